use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608150008_create_bookings"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("bookings"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("customer_user_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("event_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("service_id")).big_integer())
                    .col(
                        ColumnDef::new(Alias::new("booking_type"))
                            .enumeration(
                                Alias::new("booking_type"),
                                vec![
                                    Alias::new("service_booking"),
                                    Alias::new("event_booking"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("event_date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("total_members")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("veg_guests")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("non_veg_guests")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("primary_chef_user_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("alternate_chef1_user_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("alternate_chef2_user_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("primary_vendor_user_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("alternate_vendor1_user_id")).big_integer())
                    .col(ColumnDef::new(Alias::new("alternate_vendor2_user_id")).big_integer())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("booking_status"),
                                vec![
                                    Alias::new("pending"),
                                    Alias::new("confirmed"),
                                    Alias::new("failed"),
                                    Alias::new("cancelled"),
                                    Alias::new("completed"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("bookings"), Alias::new("customer_user_id"))
                            .to(Alias::new("users"), Alias::new("id")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("bookings"), Alias::new("event_id"))
                            .to(Alias::new("events"), Alias::new("id")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("bookings"), Alias::new("service_id"))
                            .to(Alias::new("services"), Alias::new("id")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("bookings")).to_owned())
            .await
    }
}
