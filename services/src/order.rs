//! Orders hang off confirmed bookings and carry the payment state for the
//! engagement.

use chrono::Utc;
use db::models::booking::{self, BookingStatus};
use db::models::order::{self, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::Serialize;

use crate::error::ServiceError;

#[derive(Debug, Serialize)]
pub struct OrderWithMembers {
    pub order: order::Model,
    pub event_date: chrono::NaiveDate,
    pub total_members: i32,
    pub veg_guests: i32,
    pub non_veg_guests: i32,
}

/// Per payment-status rollup across all orders.
#[derive(Debug, Serialize, FromQueryResult)]
pub struct OrderStatusSummary {
    pub payment_status: PaymentStatus,
    pub orders: i64,
    pub total_members: i64,
    pub veg_guests: i64,
    pub non_veg_guests: i64,
}

/// Creates an order for a confirmed booking. Payment starts `upcoming`.
pub async fn create_order_for_booking(
    db: &DatabaseConnection,
    booking_id: i64,
    order_value: f64,
    payment_method: Option<String>,
) -> Result<order::Model, ServiceError> {
    if order_value <= 0.0 {
        return Err(ServiceError::validation("order_value must be positive"));
    }

    let booking = booking::Entity::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;
    if booking.status != BookingStatus::Confirmed {
        return Err(ServiceError::conflict(format!(
            "orders require a confirmed booking, this one is {}",
            booking.status
        )));
    }

    let now = Utc::now();
    let created = order::ActiveModel {
        booking_id: Set(booking_id),
        order_value: Set(order_value),
        payment_status: Set(PaymentStatus::Upcoming),
        payment_method: Set(payment_method),
        transaction_id: Set(None),
        payment_date: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(order_id = created.id, booking_id, "order created");
    Ok(created)
}

/// Moves an order's payment forward and stamps the transaction when it
/// completes.
pub async fn set_payment_status(
    db: &DatabaseConnection,
    order_id: i64,
    status: PaymentStatus,
    transaction_id: Option<String>,
) -> Result<order::Model, ServiceError> {
    let existing = order::Entity::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("order not found"))?;

    let mut active: order::ActiveModel = existing.into();
    active.payment_status = Set(status);
    if status == PaymentStatus::Completed {
        active.payment_date = Set(Some(Utc::now()));
    }
    if let Some(txn_id) = transaction_id {
        active.transaction_id = Set(Some(txn_id));
    }
    active.updated_at = Set(Utc::now());
    Ok(active.update(db).await?)
}

/// All orders with the guest counts of their bookings, newest first.
pub async fn list_orders_with_members(
    db: &DatabaseConnection,
) -> Result<Vec<OrderWithMembers>, ServiceError> {
    let rows = order::Entity::find()
        .find_also_related(booking::Entity)
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(order, booking)| {
            booking.map(|b| OrderWithMembers {
                order,
                event_date: b.event_date,
                total_members: b.total_members,
                veg_guests: b.veg_guests,
                non_veg_guests: b.non_veg_guests,
            })
        })
        .collect())
}

/// Order counts and guest totals grouped by payment status.
pub async fn status_summary(
    db: &DatabaseConnection,
) -> Result<Vec<OrderStatusSummary>, ServiceError> {
    let rows = order::Entity::find()
        .select_only()
        .column(order::Column::PaymentStatus)
        .column_as(order::Column::Id.count(), "orders")
        .column_as(booking::Column::TotalMembers.sum(), "total_members")
        .column_as(booking::Column::VegGuests.sum(), "veg_guests")
        .column_as(booking::Column::NonVegGuests.sum(), "non_veg_guests")
        .join(JoinType::InnerJoin, order::Relation::Booking.def())
        .group_by(order::Column::PaymentStatus)
        .into_model::<OrderStatusSummary>()
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn orders_by_status(
    db: &DatabaseConnection,
    status: PaymentStatus,
) -> Result<Vec<order::Model>, ServiceError> {
    Ok(order::Entity::find()
        .filter(order::Column::PaymentStatus.eq(status))
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await?)
}
