use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608150009_create_booking_menu_items"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("booking_menu_items"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("booking_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("menu_item_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("quantity")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("price")).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("booking_menu_items"), Alias::new("booking_id"))
                            .to(Alias::new("bookings"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("booking_menu_items"), Alias::new("menu_item_id"))
                            .to(Alias::new("menu_items"), Alias::new("id")),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (booking, menu item); re-attachment updates in place.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_booking_menu_items_booking_item")
                    .table(Alias::new("booking_menu_items"))
                    .col(Alias::new("booking_id"))
                    .col(Alias::new("menu_item_id"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("booking_menu_items"))
                    .to_owned(),
            )
            .await
    }
}
