//! Public partner directory: the chefs and vendors a customer can browse
//! when picking booking candidates. Only approved, active accounts appear.

use db::models::user::{self, ApprovalStatus, UserRole};
use db::models::{chef_profile, vendor_profile};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::error::ServiceError;

#[derive(Debug, Serialize)]
pub struct ChefListing {
    pub user: user::Model,
    pub profile: Option<chef_profile::Model>,
}

#[derive(Debug, Serialize)]
pub struct VendorListing {
    pub user: user::Model,
    pub profile: Option<vendor_profile::Model>,
}

pub async fn public_chefs(db: &DatabaseConnection) -> Result<Vec<ChefListing>, ServiceError> {
    let rows = bookable(UserRole::Chef)
        .find_also_related(chef_profile::Entity)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(user, profile)| ChefListing { user, profile })
        .collect())
}

pub async fn public_vendors(db: &DatabaseConnection) -> Result<Vec<VendorListing>, ServiceError> {
    let rows = bookable(UserRole::Vendor)
        .find_also_related(vendor_profile::Entity)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(user, profile)| VendorListing { user, profile })
        .collect())
}

fn bookable(role: UserRole) -> sea_orm::Select<user::Entity> {
    user::Entity::find()
        .filter(user::Column::Role.eq(role))
        .filter(user::Column::ApprovalStatus.eq(ApprovalStatus::Approved))
        .filter(user::Column::Active.eq(true))
        .order_by_asc(user::Column::Name)
}
