use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608150010_create_party_responses"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("party_responses"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("booking_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("user_id")).big_integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("role"))
                            .enumeration(
                                Alias::new("party_role"),
                                vec![Alias::new("chef"), Alias::new("vendor")],
                            )
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("acceptance_status"))
                            .enumeration(
                                Alias::new("acceptance_status"),
                                vec![
                                    Alias::new("pending"),
                                    Alias::new("accepted"),
                                    Alias::new("declined"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("comments")).string())
                    .col(ColumnDef::new(Alias::new("responded_at")).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("party_responses"), Alias::new("booking_id"))
                            .to(Alias::new("bookings"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("party_responses"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id")),
                    )
                    .to_owned(),
            )
            .await?;

        // Response identity; also the serialization guard for concurrent upserts.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_party_responses_identity")
                    .table(Alias::new("party_responses"))
                    .col(Alias::new("booking_id"))
                    .col(Alias::new("user_id"))
                    .col(Alias::new("role"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("party_responses")).to_owned())
            .await
    }
}
