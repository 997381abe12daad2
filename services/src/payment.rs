//! Ledger of credits and debits against user accounts. Refunds are modeled
//! as explicit debits, never as negative amounts.

use chrono::Utc;
use db::models::payment::{self, TransactionType};
use db::models::{booking, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::Serialize;

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct RecordPayment {
    pub user_id: i64,
    pub booking_id: Option<i64>,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
}

/// Ledger row joined with the account holder's name.
#[derive(Debug, Serialize, FromQueryResult)]
pub struct PaymentHistoryEntry {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub booking_id: Option<i64>,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub transaction_date: chrono::DateTime<Utc>,
}

/// Appends a ledger entry. Amounts must be strictly positive.
pub async fn record_payment(
    db: &DatabaseConnection,
    params: RecordPayment,
) -> Result<payment::Model, ServiceError> {
    if params.amount <= 0.0 {
        return Err(ServiceError::validation("amount must be greater than zero"));
    }

    user::Entity::find_by_id(params.user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("user not found"))?;
    if let Some(booking_id) = params.booking_id {
        booking::Entity::find_by_id(booking_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("booking not found"))?;
    }

    let created = payment::ActiveModel {
        user_id: Set(params.user_id),
        booking_id: Set(params.booking_id),
        amount: Set(params.amount),
        transaction_type: Set(params.transaction_type),
        description: Set(params.description),
        transaction_date: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        payment_id = created.id,
        user_id = created.user_id,
        transaction_type = %created.transaction_type,
        "payment recorded"
    );
    Ok(created)
}

/// Ledger entries newest first, optionally narrowed to one transaction type
/// and/or a case-insensitive search over description and account-holder name.
pub async fn payment_history(
    db: &DatabaseConnection,
    transaction_type: Option<TransactionType>,
    search: Option<&str>,
) -> Result<Vec<PaymentHistoryEntry>, ServiceError> {
    let mut query = payment::Entity::find()
        .select_only()
        .columns([
            payment::Column::Id,
            payment::Column::UserId,
            payment::Column::BookingId,
            payment::Column::Amount,
            payment::Column::TransactionType,
            payment::Column::Description,
            payment::Column::TransactionDate,
        ])
        .column_as(user::Column::Name, "user_name")
        .join(JoinType::InnerJoin, payment::Relation::User.def());

    if let Some(kind) = transaction_type {
        query = query.filter(payment::Column::TransactionType.eq(kind));
    }
    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        let pattern = format!("%{term}%");
        query = query.filter(
            Condition::any()
                .add(payment::Column::Description.like(&pattern))
                .add(user::Column::Name.like(&pattern)),
        );
    }

    Ok(query
        .order_by_desc(payment::Column::TransactionDate)
        .into_model::<PaymentHistoryEntry>()
        .all(db)
        .await?)
}
