use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608150011_create_orders"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("orders"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("booking_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("order_value")).double().not_null())
                    .col(
                        ColumnDef::new(Alias::new("payment_status"))
                            .enumeration(
                                Alias::new("order_payment_status"),
                                vec![
                                    Alias::new("upcoming"),
                                    Alias::new("processing"),
                                    Alias::new("completed"),
                                    Alias::new("cancelled"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("payment_method")).string())
                    .col(ColumnDef::new(Alias::new("transaction_id")).string())
                    .col(ColumnDef::new(Alias::new("payment_date")).timestamp())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("orders"), Alias::new("booking_id"))
                            .to(Alias::new("bookings"), Alias::new("id")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("orders")).to_owned())
            .await
    }
}
