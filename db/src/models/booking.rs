use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::party_response::PartyRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub customer_user_id: i64,

    /// Exactly one of `event_id` / `service_id` is set, matching `booking_type`.
    pub event_id: Option<i64>,
    pub service_id: Option<i64>,
    pub booking_type: BookingType,

    pub event_date: NaiveDate,
    pub total_members: i32,
    pub veg_guests: i32,
    pub non_veg_guests: i32,

    pub primary_chef_user_id: Option<i64>,
    pub alternate_chef1_user_id: Option<i64>,
    pub alternate_chef2_user_id: Option<i64>,
    pub primary_vendor_user_id: Option<i64>,
    pub alternate_vendor1_user_id: Option<i64>,
    pub alternate_vendor2_user_id: Option<i64>,

    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_type")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BookingType {
    #[sea_orm(string_value = "service_booking")]
    ServiceBooking,

    #[sea_orm(string_value = "event_booking")]
    EventBooking,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "confirmed")]
    Confirmed,

    #[sea_orm(string_value = "failed")]
    Failed,

    #[sea_orm(string_value = "cancelled")]
    Cancelled,

    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Position of a candidate within a role's three slots, in promotion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSlot {
    Primary,
    Alternate1,
    Alternate2,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CustomerUserId",
        to = "super::user::Column::Id"
    )]
    Customer,

    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,

    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id"
    )]
    Service,

    #[sea_orm(has_many = "super::booking_menu_item::Entity")]
    BookingMenuItem,

    #[sea_orm(has_many = "super::party_response::Entity")]
    PartyResponse,

    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::booking_menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingMenuItem.def()
    }
}

impl Related<super::party_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyResponse.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Candidate user ids for a role, in slot order (primary first).
    pub fn candidates(&self, role: PartyRole) -> [Option<i64>; 3] {
        match role {
            PartyRole::Chef => [
                self.primary_chef_user_id,
                self.alternate_chef1_user_id,
                self.alternate_chef2_user_id,
            ],
            PartyRole::Vendor => [
                self.primary_vendor_user_id,
                self.alternate_vendor1_user_id,
                self.alternate_vendor2_user_id,
            ],
        }
    }

    /// A role participates in the booking iff any of its slots is filled.
    pub fn requires_role(&self, role: PartyRole) -> bool {
        self.candidates(role).iter().any(Option::is_some)
    }

    /// Which slot (if any) the given user occupies for the given role.
    pub fn slot_of(&self, user_id: i64, role: PartyRole) -> Option<CandidateSlot> {
        let slots = [
            CandidateSlot::Primary,
            CandidateSlot::Alternate1,
            CandidateSlot::Alternate2,
        ];
        self.candidates(role)
            .iter()
            .zip(slots)
            .find(|(candidate, _)| **candidate == Some(user_id))
            .map(|(_, slot)| slot)
    }

    /// Every filled (user, role) candidate pair on the booking.
    pub fn candidate_parties(&self) -> Vec<(i64, PartyRole)> {
        let mut parties = Vec::new();
        for role in [PartyRole::Chef, PartyRole::Vendor] {
            for candidate in self.candidates(role).into_iter().flatten() {
                parties.push((candidate, role));
            }
        }
        parties
    }

    pub async fn set_status<C: ConnectionTrait>(
        db: &C,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(booking_id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Booking not found".to_string()))?;

        let mut active_model: ActiveModel = model.into();
        active_model.status = Set(status);
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }
}
