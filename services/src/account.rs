//! Registration and credential checks. Customers come out of registration
//! ready to book; chefs and vendors land in the approval queue.

use chrono::Utc;
use db::models::user::{self, ApprovalStatus, UserRole};
use db::models::{chef_profile, vendor_profile};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct ChefDetails {
    pub age: i32,
    pub experience_years: i32,
    pub cooking_styles: Option<String>,
    pub declaration: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VendorDetails {
    pub business_name: String,
    pub experience_years: i32,
    pub services_offered: Option<String>,
    pub declaration: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub address: Option<String>,
    pub role: UserRole,
    pub chef_details: Option<ChefDetails>,
    pub vendor_details: Option<VendorDetails>,
}

/// Creates a user plus its role-specific profile in one transaction.
///
/// Duplicate email or mobile is a `Conflict`. Chef and vendor registrations
/// must carry their profile details and start `pending`/inactive; customers
/// are usable immediately. Admin accounts are provisioned out of band and
/// cannot be self-registered.
pub async fn register_user(
    db: &DatabaseConnection,
    params: RegisterUser,
) -> Result<user::Model, ServiceError> {
    if params.password.len() < 8 {
        return Err(ServiceError::validation(
            "password must be at least 8 characters",
        ));
    }

    match params.role {
        UserRole::Chef => {
            let details = params
                .chef_details
                .as_ref()
                .ok_or_else(|| ServiceError::validation("chef registration requires chef details"))?;
            if details.age < 18 {
                return Err(ServiceError::validation("chefs must be at least 18"));
            }
            if details.experience_years < 0 {
                return Err(ServiceError::validation(
                    "experience_years must be non-negative",
                ));
            }
        }
        UserRole::Vendor => {
            let details = params.vendor_details.as_ref().ok_or_else(|| {
                ServiceError::validation("vendor registration requires vendor details")
            })?;
            if details.business_name.trim().is_empty() {
                return Err(ServiceError::validation("business_name must not be empty"));
            }
            if details.experience_years < 0 {
                return Err(ServiceError::validation(
                    "experience_years must be non-negative",
                ));
            }
        }
        UserRole::Customer => {
            if params.chef_details.is_some() || params.vendor_details.is_some() {
                return Err(ServiceError::validation(
                    "profile details are only accepted for chef or vendor registrations",
                ));
            }
        }
        UserRole::Admin => {
            return Err(ServiceError::validation(
                "admin accounts cannot be registered",
            ));
        }
    }

    if user::Model::identifier_taken(db, &params.email, &params.mobile).await? {
        return Err(ServiceError::conflict("email or mobile already registered"));
    }

    let is_partner = matches!(params.role, UserRole::Chef | UserRole::Vendor);
    let now = Utc::now();

    let txn = db.begin().await?;

    let created = user::ActiveModel {
        name: Set(params.name),
        email: Set(params.email),
        mobile: Set(params.mobile),
        password_hash: Set(user::Model::hash_password(&params.password)),
        address: Set(params.address),
        role: Set(params.role),
        approval_status: Set(if is_partner {
            ApprovalStatus::Pending
        } else {
            ApprovalStatus::Approved
        }),
        active: Set(!is_partner),
        approved_by: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(details) = params.chef_details {
        chef_profile::ActiveModel {
            user_id: Set(created.id),
            age: Set(details.age),
            experience_years: Set(details.experience_years),
            cooking_styles: Set(details.cooking_styles),
            declaration: Set(details.declaration),
        }
        .insert(&txn)
        .await?;
    }
    if let Some(details) = params.vendor_details {
        vendor_profile::ActiveModel {
            user_id: Set(created.id),
            business_name: Set(details.business_name),
            experience_years: Set(details.experience_years),
            services_offered: Set(details.services_offered),
            declaration: Set(details.declaration),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(user_id = created.id, role = %created.role, "user registered");
    Ok(created)
}

/// Checks an email-or-mobile identifier against its password.
///
/// Returns the same `Forbidden` error whether the identifier is unknown or
/// the password is wrong, and refuses inactive accounts.
pub async fn verify_credentials(
    db: &DatabaseConnection,
    identifier: &str,
    password: &str,
) -> Result<user::Model, ServiceError> {
    let user = user::Model::find_by_identifier(db, identifier)
        .await?
        .filter(|u| u.verify_password(password))
        .ok_or_else(|| ServiceError::forbidden("invalid credentials"))?;

    if !user.active {
        return Err(ServiceError::forbidden("account is inactive"));
    }
    Ok(user)
}
