use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A subcategory can appear under several categories; the pairing lives in
/// `menu_category_links`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "menu_subcategories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_category_link::Entity")]
    MenuCategoryLink,
}

impl Related<super::menu_category_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuCategoryLink.def()
    }
}

impl Related<super::menu_category::Entity> for Entity {
    fn to() -> RelationDef {
        super::menu_category_link::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::menu_category_link::Relation::Subcategory.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
