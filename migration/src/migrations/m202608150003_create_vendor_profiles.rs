use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608150003_create_vendor_profiles"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("vendor_profiles"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("user_id")).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("business_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("experience_years")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("services_offered")).string())
                    .col(ColumnDef::new(Alias::new("declaration")).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("vendor_profiles"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("vendor_profiles")).to_owned())
            .await
    }
}
