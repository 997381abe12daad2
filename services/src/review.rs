//! Post-booking reviews. One review per (booking, customer), scored 0-5 on
//! hygiene, taste and chef behaviour.

use chrono::Utc;
use db::models::{booking, review, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct AddReview {
    pub booking_id: i64,
    pub customer_user_id: i64,
    pub hygiene: i32,
    pub food_taste: i32,
    pub chef_behavior: i32,
    pub comments: Option<String>,
}

pub async fn add_review(
    db: &DatabaseConnection,
    params: AddReview,
) -> Result<review::Model, ServiceError> {
    for (field, value) in [
        ("hygiene", params.hygiene),
        ("food_taste", params.food_taste),
        ("chef_behavior", params.chef_behavior),
    ] {
        if !(0..=5).contains(&value) {
            return Err(ServiceError::validation(format!(
                "{field} must be between 0 and 5",
            )));
        }
    }

    let booking = booking::Entity::find_by_id(params.booking_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;
    user::Entity::find_by_id(params.customer_user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer not found"))?;

    if booking.customer_user_id != params.customer_user_id {
        return Err(ServiceError::forbidden(
            "only the booking's customer may review it",
        ));
    }

    let duplicate = review::Entity::find()
        .filter(review::Column::BookingId.eq(params.booking_id))
        .filter(review::Column::CustomerUserId.eq(params.customer_user_id))
        .one(db)
        .await?;
    if duplicate.is_some() {
        return Err(ServiceError::conflict("booking already reviewed"));
    }

    let created = review::ActiveModel {
        booking_id: Set(params.booking_id),
        customer_user_id: Set(params.customer_user_id),
        hygiene: Set(params.hygiene),
        food_taste: Set(params.food_taste),
        chef_behavior: Set(params.chef_behavior),
        comments: Set(params.comments),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        review_id = created.id,
        booking_id = created.booking_id,
        "review added"
    );
    Ok(created)
}

pub async fn reviews_for_booking(
    db: &DatabaseConnection,
    booking_id: i64,
) -> Result<Vec<review::Model>, ServiceError> {
    Ok(review::Entity::find()
        .filter(review::Column::BookingId.eq(booking_id))
        .order_by_desc(review::Column::CreatedAt)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{create_booking, CreateBooking};
    use crate::test_support::{seed_customer, seed_service};
    use chrono::NaiveDate;
    use db::models::booking::BookingType;
    use db::test_utils::setup_test_db;
    use sea_orm::DatabaseConnection;

    async fn seed_booking(db: &DatabaseConnection, customer_id: i64) -> booking::Model {
        let service = seed_service(db, "dinner party").await;
        create_booking(
            db,
            CreateBooking {
                customer_user_id: customer_id,
                event_id: None,
                service_id: Some(service.id),
                booking_type: BookingType::ServiceBooking,
                event_date: NaiveDate::from_ymd_opt(2026, 12, 5).unwrap(),
                total_members: 6,
                veg_guests: 2,
                non_veg_guests: 4,
                primary_chef_user_id: None,
                alternate_chef1_user_id: None,
                alternate_chef2_user_id: None,
                primary_vendor_user_id: None,
                alternate_vendor1_user_id: None,
                alternate_vendor2_user_id: None,
            },
        )
        .await
        .unwrap()
    }

    fn review_params(booking_id: i64, customer_id: i64) -> AddReview {
        AddReview {
            booking_id,
            customer_user_id: customer_id,
            hygiene: 5,
            food_taste: 4,
            chef_behavior: 5,
            comments: Some("flawless service".to_owned()),
        }
    }

    #[tokio::test]
    async fn customer_can_review_their_booking_once() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "gourmand").await;
        let booking = seed_booking(&db, customer.id).await;

        let created = add_review(&db, review_params(booking.id, customer.id))
            .await
            .unwrap();
        assert_eq!(created.hygiene, 5);

        let err = add_review(&db, review_params(booking.id, customer.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let listed = reviews_for_booking(&db, booking.id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn ratings_outside_zero_to_five_are_rejected() {
        let db = setup_test_db().await;
        let customer = seed_customer(&db, "harsh").await;
        let booking = seed_booking(&db, customer.id).await;

        let mut params = review_params(booking.id, customer.id);
        params.food_taste = 6;
        assert!(matches!(
            add_review(&db, params).await.unwrap_err(),
            ServiceError::Validation(_)
        ));

        let mut params = review_params(booking.id, customer.id);
        params.hygiene = -1;
        assert!(matches!(
            add_review(&db, params).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn only_the_bookings_customer_may_review() {
        let db = setup_test_db().await;
        let owner = seed_customer(&db, "owner").await;
        let stranger = seed_customer(&db, "stranger").await;
        let booking = seed_booking(&db, owner.id).await;

        let err = add_review(&db, review_params(booking.id, stranger.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));

        let err = add_review(&db, review_params(9999, owner.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
