use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608150015_create_menu_subcategories"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("menu_subcategories"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("active")).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        // Mapping table: a subcategory can sit under several categories.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("menu_category_links"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("category_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("subcategory_id")).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("menu_category_links"), Alias::new("category_id"))
                            .to(Alias::new("menu_categories"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("menu_category_links"), Alias::new("subcategory_id"))
                            .to(Alias::new("menu_subcategories"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_menu_category_links_pair")
                    .table(Alias::new("menu_category_links"))
                    .col(Alias::new("category_id"))
                    .col(Alias::new("subcategory_id"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("menu_category_links"))
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("menu_subcategories"))
                    .to_owned(),
            )
            .await
    }
}
