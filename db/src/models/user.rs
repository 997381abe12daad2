use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, ConnectionTrait};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A single identity row. Role-specific attributes live in
/// `chef_profiles` / `vendor_profiles`, keyed by `user_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: Option<String>,

    pub role: UserRole,

    /// Authoritative approval field; `active` follows approve/reject
    /// transitions but is independently togglable.
    pub approval_status: ApprovalStatus,
    pub active: bool,
    pub approved_by: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserRole {
    #[sea_orm(string_value = "customer")]
    Customer,

    #[sea_orm(string_value = "chef")]
    Chef,

    #[sea_orm(string_value = "vendor")]
    Vendor,

    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "approval_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApprovalStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "approved")]
    Approved,

    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::chef_profile::Entity")]
    ChefProfile,

    #[sea_orm(has_one = "super::vendor_profile::Entity")]
    VendorProfile,
}

impl Related<super::chef_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChefProfile.def()
    }
}

impl Related<super::vendor_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VendorProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_partner(&self) -> bool {
        matches!(self.role, UserRole::Chef | UserRole::Vendor)
    }

    pub fn is_bookable(&self) -> bool {
        self.is_partner() && self.approval_status == ApprovalStatus::Approved && self.active
    }

    pub fn hash_password(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("Failed to hash password")
            .to_string()
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let parsed = match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Looks a user up by either email or mobile (login identifier).
    pub async fn find_by_identifier<C: ConnectionTrait>(
        db: &C,
        identifier: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Email.eq(identifier))
                    .add(Column::Mobile.eq(identifier)),
            )
            .one(db)
            .await
    }

    pub async fn identifier_taken<C: ConnectionTrait>(
        db: &C,
        email: &str,
        mobile: &str,
    ) -> Result<bool, DbErr> {
        let existing = Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Email.eq(email))
                    .add(Column::Mobile.eq(mobile)),
            )
            .one(db)
            .await?;
        Ok(existing.is_some())
    }

    pub async fn set_active<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        active: bool,
    ) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User not found".to_string()))?;

        let mut active_model: ActiveModel = model.into();
        active_model.active = Set(active);
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }
}
