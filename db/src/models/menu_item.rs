use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub category: Option<String>,
    /// Catalog price. Bookings snapshot their own price at attachment time.
    pub price: f64,
    pub is_veg: bool,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking_menu_item::Entity")]
    BookingMenuItem,
}

impl Related<super::booking_menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingMenuItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
