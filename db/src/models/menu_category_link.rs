use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Category/subcategory pairing row, unique per pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "menu_category_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub category_id: i64,
    pub subcategory_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_category::Entity",
        from = "Column::CategoryId",
        to = "super::menu_category::Column::Id"
    )]
    Category,

    #[sea_orm(
        belongs_to = "super::menu_subcategory::Entity",
        from = "Column::SubcategoryId",
        to = "super::menu_subcategory::Column::Id"
    )]
    Subcategory,
}

impl Related<super::menu_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::menu_subcategory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
