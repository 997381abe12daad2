//! Booking lifecycle engine: creation, menu-item attachment, detail reads
//! and administrative transitions.

use chrono::{NaiveDate, Utc};
use db::models::booking::{self, BookingStatus, BookingType};
use db::models::party_response::{self, AcceptanceStatus};
use db::models::user::{self, UserRole};
use db::models::{booking_menu_item, event, menu_item, service};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use serde::Serialize;

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub customer_user_id: i64,
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
}

#[derive(Debug, Serialize)]
pub struct BookingMenuItemView {
    pub menu_item_id: i64,
    pub name: Option<String>,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct BookingDetail {
    pub booking: booking::Model,
    pub menu_items: Vec<BookingMenuItemView>,
    pub responses: Vec<party_response::Model>,
}

/// Creates a booking and seeds a `pending` party response for every filled
/// candidate slot, all inside one transaction.
pub async fn create_booking(
    db: &DatabaseConnection,
    params: CreateBooking,
) -> Result<booking::Model, ServiceError> {
    if params.veg_guests < 0 || params.non_veg_guests < 0 {
        return Err(ServiceError::validation("guest counts must be non-negative"));
    }
    if params.total_members != params.veg_guests + params.non_veg_guests {
        return Err(ServiceError::validation(
            "total_members must equal veg_guests + non_veg_guests",
        ));
    }

    match (params.event_id, params.service_id, params.booking_type) {
        (Some(_), None, BookingType::EventBooking) => {}
        (None, Some(_), BookingType::ServiceBooking) => {}
        (Some(_), Some(_), _) => {
            return Err(ServiceError::validation(
                "exactly one of event_id and service_id must be set",
            ));
        }
        (None, None, _) => {
            return Err(ServiceError::validation(
                "exactly one of event_id and service_id must be set",
            ));
        }
        _ => {
            return Err(ServiceError::validation(
                "booking_type does not match the provided event_id/service_id",
            ));
        }
    }

    let customer = user::Entity::find_by_id(params.customer_user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer not found"))?;
    if customer.role != UserRole::Customer {
        return Err(ServiceError::validation("booking owner must be a customer"));
    }
    if !customer.active {
        return Err(ServiceError::validation("customer account is inactive"));
    }

    if let Some(event_id) = params.event_id {
        event::Entity::find_by_id(event_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("event not found"))?;
    }
    if let Some(service_id) = params.service_id {
        service::Entity::find_by_id(service_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("service not found"))?;
    }

    let chef_slots = [
        params.primary_chef_user_id,
        params.alternate_chef1_user_id,
        params.alternate_chef2_user_id,
    ];
    let vendor_slots = [
        params.primary_vendor_user_id,
        params.alternate_vendor1_user_id,
        params.alternate_vendor2_user_id,
    ];
    for candidate in chef_slots.into_iter().flatten() {
        validate_candidate(db, candidate, UserRole::Chef).await?;
    }
    for candidate in vendor_slots.into_iter().flatten() {
        validate_candidate(db, candidate, UserRole::Vendor).await?;
    }

    let now = Utc::now();
    let txn = db.begin().await?;

    let booking = booking::ActiveModel {
        customer_user_id: Set(params.customer_user_id),
        event_id: Set(params.event_id),
        service_id: Set(params.service_id),
        booking_type: Set(params.booking_type),
        event_date: Set(params.event_date),
        total_members: Set(params.total_members),
        veg_guests: Set(params.veg_guests),
        non_veg_guests: Set(params.non_veg_guests),
        primary_chef_user_id: Set(params.primary_chef_user_id),
        alternate_chef1_user_id: Set(params.alternate_chef1_user_id),
        alternate_chef2_user_id: Set(params.alternate_chef2_user_id),
        primary_vendor_user_id: Set(params.primary_vendor_user_id),
        alternate_vendor1_user_id: Set(params.alternate_vendor1_user_id),
        alternate_vendor2_user_id: Set(params.alternate_vendor2_user_id),
        status: Set(BookingStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for (candidate, role) in booking.candidate_parties() {
        party_response::ActiveModel {
            booking_id: Set(booking.id),
            user_id: Set(candidate),
            role: Set(role),
            acceptance_status: Set(AcceptanceStatus::Pending),
            comments: Set(None),
            responded_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        customer_user_id = booking.customer_user_id,
        "booking created"
    );
    Ok(booking)
}

async fn validate_candidate<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    expected_role: UserRole,
) -> Result<(), ServiceError> {
    let candidate = user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("candidate user {user_id} not found")))?;
    if candidate.role != expected_role {
        return Err(ServiceError::validation(format!(
            "candidate user {user_id} is not a {expected_role}",
        )));
    }
    Ok(())
}

/// Attaches a menu item to a booking with a snapshot price.
///
/// One row per (booking, menu item): re-attaching the same item updates its
/// quantity and price in place.
pub async fn add_menu_item(
    db: &DatabaseConnection,
    booking_id: i64,
    menu_item_id: i64,
    quantity: i32,
    price: f64,
) -> Result<booking_menu_item::Model, ServiceError> {
    if quantity <= 0 {
        return Err(ServiceError::validation("quantity must be positive"));
    }
    if price < 0.0 {
        return Err(ServiceError::validation("price must not be negative"));
    }

    let txn = db.begin().await?;

    booking::Entity::find_by_id(booking_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;
    menu_item::Entity::find_by_id(menu_item_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("menu item not found"))?;

    let existing = booking_menu_item::Entity::find()
        .filter(booking_menu_item::Column::BookingId.eq(booking_id))
        .filter(booking_menu_item::Column::MenuItemId.eq(menu_item_id))
        .one(&txn)
        .await?;

    let row = match existing {
        Some(row) => {
            let mut active: booking_menu_item::ActiveModel = row.into();
            active.quantity = Set(quantity);
            active.price = Set(price);
            active.update(&txn).await?
        }
        None => {
            booking_menu_item::ActiveModel {
                booking_id: Set(booking_id),
                menu_item_id: Set(menu_item_id),
                quantity: Set(quantity),
                price: Set(price),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    txn.commit().await?;
    Ok(row)
}

/// Booking joined with its menu items (catalog name included) and its party
/// responses. A missing booking is a `NotFound` error, applied uniformly
/// across all detail views.
pub async fn get_booking_detail(
    db: &DatabaseConnection,
    booking_id: i64,
) -> Result<BookingDetail, ServiceError> {
    let booking = booking::Entity::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;

    let menu_items = booking_menu_item::Entity::find()
        .filter(booking_menu_item::Column::BookingId.eq(booking_id))
        .find_also_related(menu_item::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|(row, item)| BookingMenuItemView {
            menu_item_id: row.menu_item_id,
            name: item.map(|i| i.name),
            quantity: row.quantity,
            price: row.price,
        })
        .collect();

    let responses = party_response::Model::find_for_booking(db, booking_id).await?;

    Ok(BookingDetail {
        booking,
        menu_items,
        responses,
    })
}

/// Administrative cancellation. Only an open booking can be cancelled.
pub async fn cancel_booking(
    db: &DatabaseConnection,
    booking_id: i64,
) -> Result<booking::Model, ServiceError> {
    let booking = booking::Entity::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;

    match booking.status {
        BookingStatus::Pending | BookingStatus::Confirmed => {
            Ok(booking::Model::set_status(db, booking_id, BookingStatus::Cancelled).await?)
        }
        other => Err(ServiceError::conflict(format!(
            "cannot cancel a booking in status {other}",
        ))),
    }
}

/// Marks a confirmed booking as completed.
pub async fn complete_booking(
    db: &DatabaseConnection,
    booking_id: i64,
) -> Result<booking::Model, ServiceError> {
    let booking = booking::Entity::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;

    if booking.status != BookingStatus::Confirmed {
        return Err(ServiceError::conflict(format!(
            "cannot complete a booking in status {}",
            booking.status
        )));
    }
    Ok(booking::Model::set_status(db, booking_id, BookingStatus::Completed).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_customer, seed_menu_item, seed_service, seed_vendor};
    use db::models::party_response::PartyRole;
    use db::test_utils::setup_test_db;

    fn service_booking(customer_id: i64, service_id: i64) -> CreateBooking {
        CreateBooking {
            customer_user_id: customer_id,
            event_id: None,
            service_id: Some(service_id),
            booking_type: BookingType::ServiceBooking,
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            total_members: 10,
            veg_guests: 6,
            non_veg_guests: 4,
            primary_chef_user_id: None,
            alternate_chef1_user_id: None,
            alternate_chef2_user_id: None,
            primary_vendor_user_id: None,
            alternate_vendor1_user_id: None,
            alternate_vendor2_user_id: None,
        }
    }

    #[tokio::test]
    async fn create_booking_returns_positive_id_and_seeds_responses() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "thandi").await;
        let service = seed_service(&db, "wedding catering").await;
        let vendor = seed_vendor(&db, "fresh-events").await;

        let mut params = service_booking(customer.id, service.id);
        params.primary_vendor_user_id = Some(vendor.id);

        let booking = create_booking(&db, params).await.unwrap();
        assert!(booking.id > 0);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_members, 10);

        let responses = party_response::Model::find_for_booking(&db, booking.id)
            .await
            .unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].user_id, vendor.id);
        assert_eq!(responses[0].role, PartyRole::Vendor);
        assert_eq!(responses[0].acceptance_status, AcceptanceStatus::Pending);
    }

    #[tokio::test]
    async fn create_booking_rejects_both_or_neither_target() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "sipho").await;
        let service = seed_service(&db, "birthday catering").await;

        let mut both = service_booking(customer.id, service.id);
        both.event_id = Some(1);
        let err = create_booking(&db, both).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let mut neither = service_booking(customer.id, service.id);
        neither.service_id = None;
        let err = create_booking(&db, neither).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_booking_enforces_guest_count_reconciliation() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "lindiwe").await;
        let service = seed_service(&db, "conference catering").await;

        let mut params = service_booking(customer.id, service.id);
        params.total_members = 12; // veg 6 + non-veg 4 = 10
        let err = create_booking(&db, params).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_booking_rejects_unknown_customer_and_service() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "naledi").await;
        let service = seed_service(&db, "braai").await;

        let params = service_booking(9999, service.id);
        assert!(matches!(
            create_booking(&db, params).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));

        let params = service_booking(customer.id, 9999);
        assert!(matches!(
            create_booking(&db, params).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn add_menu_item_upserts_on_reattachment() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "zola").await;
        let service = seed_service(&db, "canapes").await;
        let item = seed_menu_item(&db, "samosa platter", 240.0).await;
        let booking = create_booking(&db, service_booking(customer.id, service.id))
            .await
            .unwrap();

        add_menu_item(&db, booking.id, item.id, 2, 240.0).await.unwrap();
        add_menu_item(&db, booking.id, item.id, 5, 230.0).await.unwrap();

        let rows = booking_menu_item::Model::find_for_booking(&db, booking.id)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 5);
        assert_eq!(rows[0].price, 230.0);
    }

    #[tokio::test]
    async fn add_menu_item_validates_inputs_and_references() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "karabo").await;
        let service = seed_service(&db, "high tea").await;
        let item = seed_menu_item(&db, "scones", 80.0).await;
        let booking = create_booking(&db, service_booking(customer.id, service.id))
            .await
            .unwrap();

        assert!(matches!(
            add_menu_item(&db, booking.id, item.id, 0, 80.0).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
        assert!(matches!(
            add_menu_item(&db, booking.id, item.id, 1, -1.0).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
        assert!(matches!(
            add_menu_item(&db, 9999, item.id, 1, 80.0).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            add_menu_item(&db, booking.id, 9999, 1, 80.0).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn booking_detail_includes_items_with_catalog_names() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "anathi").await;
        let service = seed_service(&db, "buffet").await;
        let item = seed_menu_item(&db, "lamb curry", 150.0).await;
        let booking = create_booking(&db, service_booking(customer.id, service.id))
            .await
            .unwrap();
        add_menu_item(&db, booking.id, item.id, 3, 150.0).await.unwrap();

        let detail = get_booking_detail(&db, booking.id).await.unwrap();
        assert_eq!(detail.booking.id, booking.id);
        assert_eq!(detail.menu_items.len(), 1);
        assert_eq!(detail.menu_items[0].name.as_deref(), Some("lamb curry"));

        assert!(matches!(
            get_booking_detail(&db, 9999).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn cancel_and_complete_respect_current_status() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "mbali").await;
        let service = seed_service(&db, "picnic").await;
        let booking = create_booking(&db, service_booking(customer.id, service.id))
            .await
            .unwrap();

        // Pending bookings cannot be completed.
        assert!(matches!(
            complete_booking(&db, booking.id).await.unwrap_err(),
            ServiceError::Conflict(_)
        ));

        let cancelled = cancel_booking(&db, booking.id).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        // Cancelled bookings cannot be cancelled again.
        assert!(matches!(
            cancel_booking(&db, booking.id).await.unwrap_err(),
            ServiceError::Conflict(_)
        ));
    }
}
