use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One candidate's accept/decline decision for a booking role.
///
/// Identified by (`booking_id`, `user_id`, `role`); a unique index backs the
/// upsert and serializes concurrent responses.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "party_responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub booking_id: i64,
    pub user_id: i64,
    pub role: PartyRole,
    pub acceptance_status: AcceptanceStatus,
    pub comments: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "party_role")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PartyRole {
    #[sea_orm(string_value = "chef")]
    Chef,

    #[sea_orm(string_value = "vendor")]
    Vendor,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "acceptance_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AcceptanceStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "accepted")]
    Accepted,

    #[sea_orm(string_value = "declined")]
    Declined,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_for_booking<C: ConnectionTrait>(
        db: &C,
        booking_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::BookingId.eq(booking_id))
            .all(db)
            .await
    }

    pub async fn find_by_identity<C: ConnectionTrait>(
        db: &C,
        booking_id: i64,
        user_id: i64,
        role: PartyRole,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::BookingId.eq(booking_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Role.eq(role))
            .one(db)
            .await
    }
}
