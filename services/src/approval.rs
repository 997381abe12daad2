//! Moderation of chef/vendor accounts. Partners register as `pending` and
//! cannot take bookings until an admin approves them.

use chrono::Utc;
use db::models::user::{self, ApprovalStatus, UserRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::error::ServiceError;

/// Approves a partner account and reactivates it.
pub async fn approve_user(
    db: &DatabaseConnection,
    user_id: i64,
    moderator_id: i64,
) -> Result<user::Model, ServiceError> {
    moderate(db, user_id, moderator_id, ApprovalStatus::Approved).await
}

/// Rejects a partner account and deactivates it.
pub async fn reject_user(
    db: &DatabaseConnection,
    user_id: i64,
    moderator_id: i64,
) -> Result<user::Model, ServiceError> {
    moderate(db, user_id, moderator_id, ApprovalStatus::Rejected).await
}

async fn moderate(
    db: &DatabaseConnection,
    user_id: i64,
    moderator_id: i64,
    verdict: ApprovalStatus,
) -> Result<user::Model, ServiceError> {
    let moderator = user::Entity::find_by_id(moderator_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("moderator not found"))?;
    if moderator.role != UserRole::Admin {
        return Err(ServiceError::forbidden("only admins can moderate accounts"));
    }

    let target = user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("user not found"))?;
    if !target.is_partner() {
        return Err(ServiceError::validation(
            "only chef and vendor accounts go through approval",
        ));
    }

    let approved = verdict == ApprovalStatus::Approved;
    let mut active: user::ActiveModel = target.into();
    active.approval_status = Set(verdict);
    active.active = Set(approved);
    active.approved_by = Set(approved.then_some(moderator_id));
    active.updated_at = Set(Utc::now());
    let updated = active.update(db).await?;

    tracing::info!(
        user_id = updated.id,
        moderator_id,
        verdict = %verdict,
        "partner account moderated"
    );
    Ok(updated)
}

/// Partner accounts, optionally filtered by approval status, newest first.
pub async fn list_partners(
    db: &DatabaseConnection,
    status: Option<ApprovalStatus>,
) -> Result<Vec<user::Model>, ServiceError> {
    let mut query = user::Entity::find().filter(
        Condition::any()
            .add(user::Column::Role.eq(UserRole::Chef))
            .add(user::Column::Role.eq(UserRole::Vendor)),
    );
    if let Some(status) = status {
        query = query.filter(user::Column::ApprovalStatus.eq(status));
    }
    Ok(query
        .order_by_desc(user::Column::CreatedAt)
        .all(db)
        .await?)
}
