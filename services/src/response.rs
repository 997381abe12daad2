//! Accept/decline handling for booking candidates.
//!
//! A response is recorded and the booking's aggregate status is recomputed
//! inside a single transaction, so two candidates racing on the same booking
//! never leave the stored status stale.

use chrono::Utc;
use db::models::booking::{self, BookingStatus};
use db::models::party_response::{self, AcceptanceStatus, PartyRole};
use db::models::user::{self, UserRole};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::aggregate::{aggregate_status, PromotionPolicy};
use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct RespondToBooking {
    pub booking_id: i64,
    pub user_id: i64,
    pub role: PartyRole,
    pub accept: bool,
    pub comments: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ResponseOutcome {
    pub booking: booking::Model,
    pub response: party_response::Model,
}

/// Records a candidate's decision and folds it into the booking status.
///
/// The responder must be an approved, active partner occupying one of the
/// role's candidate slots. An accept is refused while any other candidate of
/// the same role stands accepted, so a role never ends up accepted twice;
/// responding to a closed booking is likewise a conflict.
pub async fn respond_to_booking(
    db: &DatabaseConnection,
    params: RespondToBooking,
    policy: PromotionPolicy,
) -> Result<ResponseOutcome, ServiceError> {
    let responder = user::Entity::find_by_id(params.user_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("user not found"))?;

    let expected = match params.role {
        PartyRole::Chef => UserRole::Chef,
        PartyRole::Vendor => UserRole::Vendor,
    };
    if responder.role != expected {
        return Err(ServiceError::validation(format!(
            "user {} cannot respond as {}",
            responder.id, params.role
        )));
    }
    if !responder.is_bookable() {
        return Err(ServiceError::forbidden(
            "account is not approved for bookings",
        ));
    }

    let txn = db.begin().await?;

    let booking = booking::Entity::find_by_id(params.booking_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("booking not found"))?;

    if booking.status != BookingStatus::Pending {
        return Err(ServiceError::conflict(format!(
            "booking is {} and no longer accepts responses",
            booking.status
        )));
    }

    if booking.slot_of(params.user_id, params.role).is_none() {
        return Err(ServiceError::forbidden(
            "user is not a candidate on this booking",
        ));
    }

    // Serialization guard: the role is locked the moment any candidate has
    // accepted, regardless of slot order or promotion policy. Without this a
    // primary's accept could land after an alternate's and leave the role
    // accepted twice.
    if params.accept {
        let responses = party_response::Model::find_for_booking(&txn, params.booking_id).await?;
        let taken = responses.iter().any(|r| {
            r.role == params.role
                && r.user_id != params.user_id
                && r.acceptance_status == AcceptanceStatus::Accepted
        });
        if taken {
            return Err(ServiceError::conflict(format!(
                "{} role already accepted by another candidate",
                params.role
            )));
        }
    }

    let decision = if params.accept {
        AcceptanceStatus::Accepted
    } else {
        AcceptanceStatus::Declined
    };

    let existing = party_response::Model::find_by_identity(
        &txn,
        params.booking_id,
        params.user_id,
        params.role,
    )
    .await?;

    let response = match existing {
        Some(row) => {
            let mut active: party_response::ActiveModel = row.into();
            active.acceptance_status = Set(decision);
            active.comments = Set(params.comments.clone());
            active.responded_at = Set(Some(Utc::now()));
            active.update(&txn).await?
        }
        None => {
            party_response::ActiveModel {
                booking_id: Set(params.booking_id),
                user_id: Set(params.user_id),
                role: Set(params.role),
                acceptance_status: Set(decision),
                comments: Set(params.comments.clone()),
                responded_at: Set(Some(Utc::now())),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    let responses = party_response::Model::find_for_booking(&txn, params.booking_id).await?;
    let next = aggregate_status(&booking, &responses, policy);

    let booking = if next != booking.status {
        booking::Model::set_status(&txn, booking.id, next).await?
    } else {
        booking
    };

    txn.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        user_id = params.user_id,
        role = %params.role,
        decision = %decision,
        status = %booking.status,
        "booking response recorded"
    );

    Ok(ResponseOutcome { booking, response })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{create_booking, CreateBooking};
    use crate::test_support::{seed_chef, seed_customer, seed_service, seed_user, seed_vendor};
    use chrono::NaiveDate;
    use db::models::booking::BookingType;
    use db::models::user::ApprovalStatus;
    use db::test_utils::setup_test_db;
    use sea_orm::DatabaseConnection;

    async fn booking_with(
        db: &DatabaseConnection,
        chefs: [Option<i64>; 3],
        vendors: [Option<i64>; 3],
    ) -> booking::Model {
        let customer = seed_customer(db, "host").await;
        let service = seed_service(db, "full catering").await;
        create_booking(
            db,
            CreateBooking {
                customer_user_id: customer.id,
                event_id: None,
                service_id: Some(service.id),
                booking_type: BookingType::ServiceBooking,
                event_date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
                total_members: 20,
                veg_guests: 12,
                non_veg_guests: 8,
                primary_chef_user_id: chefs[0],
                alternate_chef1_user_id: chefs[1],
                alternate_chef2_user_id: chefs[2],
                primary_vendor_user_id: vendors[0],
                alternate_vendor1_user_id: vendors[1],
                alternate_vendor2_user_id: vendors[2],
            },
        )
        .await
        .unwrap()
    }

    fn respond(booking_id: i64, user_id: i64, role: PartyRole, accept: bool) -> RespondToBooking {
        RespondToBooking {
            booking_id,
            user_id,
            role,
            accept,
            comments: None,
        }
    }

    #[tokio::test]
    async fn all_primaries_accepting_confirms_the_booking() {
        let db = setup_test_db().await;
        let chef = seed_chef(&db, "pierre").await;
        let vendor = seed_vendor(&db, "bloem-events").await;
        let booking = booking_with(&db, [Some(chef.id), None, None], [Some(vendor.id), None, None]).await;

        let out = respond_to_booking(
            &db,
            respond(booking.id, chef.id, PartyRole::Chef, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Pending);
        assert_eq!(out.response.acceptance_status, AcceptanceStatus::Accepted);

        let out = respond_to_booking(
            &db,
            respond(booking.id, vendor.id, PartyRole::Vendor, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn every_candidate_declining_fails_the_booking() {
        let db = setup_test_db().await;
        let v1 = seed_vendor(&db, "first-choice").await;
        let v2 = seed_vendor(&db, "second-choice").await;
        let booking = booking_with(&db, [None, None, None], [Some(v1.id), Some(v2.id), None]).await;

        let out = respond_to_booking(
            &db,
            respond(booking.id, v1.id, PartyRole::Vendor, false),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Pending);

        let out = respond_to_booking(
            &db,
            respond(booking.id, v2.id, PartyRole::Vendor, false),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Failed);
    }

    #[tokio::test]
    async fn unapproved_partner_cannot_respond() {
        let db = setup_test_db().await;
        let vendor = seed_user(
            &db,
            "awaiting-review",
            UserRole::Vendor,
            ApprovalStatus::Pending,
            true,
        )
        .await;
        let booking = booking_with(&db, [None, None, None], [Some(vendor.id), None, None]).await;

        let err = respond_to_booking(
            &db,
            respond(booking.id, vendor.id, PartyRole::Vendor, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn non_candidate_cannot_respond() {
        let db = setup_test_db().await;
        let vendor = seed_vendor(&db, "listed").await;
        let outsider = seed_vendor(&db, "unlisted").await;
        let booking = booking_with(&db, [None, None, None], [Some(vendor.id), None, None]).await;

        let err = respond_to_booking(
            &db,
            respond(booking.id, outsider.id, PartyRole::Vendor, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn role_user_mismatch_is_rejected() {
        let db = setup_test_db().await;
        let chef = seed_chef(&db, "moonlighting").await;
        let booking = booking_with(&db, [Some(chef.id), None, None], [None, None, None]).await;

        let err = respond_to_booking(
            &db,
            respond(booking.id, chef.id, PartyRole::Vendor, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn closed_booking_rejects_further_responses() {
        let db = setup_test_db().await;
        let vendor = seed_vendor(&db, "prompt").await;
        let booking = booking_with(&db, [None, None, None], [Some(vendor.id), None, None]).await;

        let out = respond_to_booking(
            &db,
            respond(booking.id, vendor.id, PartyRole::Vendor, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Confirmed);

        let err = respond_to_booking(
            &db,
            respond(booking.id, vendor.id, PartyRole::Vendor, false),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn accepting_an_already_held_role_conflicts() {
        let db = setup_test_db().await;
        let chef = seed_chef(&db, "headliner").await;
        let v1 = seed_vendor(&db, "declined-first").await;
        let v2 = seed_vendor(&db, "stepped-up").await;
        let v3 = seed_vendor(&db, "too-late").await;
        let booking = booking_with(
            &db,
            [Some(chef.id), None, None],
            [Some(v1.id), Some(v2.id), Some(v3.id)],
        )
        .await;

        // Primary vendor declines, alternate1 takes the role. The chef has
        // not answered yet, so the booking stays pending.
        respond_to_booking(
            &db,
            respond(booking.id, v1.id, PartyRole::Vendor, false),
            PromotionPolicy::PromoteAlternates,
        )
        .await
        .unwrap();
        let out = respond_to_booking(
            &db,
            respond(booking.id, v2.id, PartyRole::Vendor, true),
            PromotionPolicy::PromoteAlternates,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Pending);

        let err = respond_to_booking(
            &db,
            respond(booking.id, v3.id, PartyRole::Vendor, true),
            PromotionPolicy::PromoteAlternates,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    async fn accepted_user_ids(
        db: &DatabaseConnection,
        booking_id: i64,
        role: PartyRole,
    ) -> Vec<i64> {
        use sea_orm::{ColumnTrait, QueryFilter};
        party_response::Entity::find()
            .filter(party_response::Column::BookingId.eq(booking_id))
            .filter(party_response::Column::Role.eq(role))
            .filter(party_response::Column::AcceptanceStatus.eq(AcceptanceStatus::Accepted))
            .all(db)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.user_id)
            .collect()
    }

    #[tokio::test]
    async fn primary_cannot_accept_after_an_alternate_has() {
        let db = setup_test_db().await;
        let c1 = seed_chef(&db, "slow-primary").await;
        let c2 = seed_chef(&db, "eager-alternate").await;
        let booking = booking_with(&db, [Some(c1.id), Some(c2.id), None], [None, None, None]).await;

        respond_to_booking(
            &db,
            respond(booking.id, c2.id, PartyRole::Chef, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();

        // The primary arrives late; the role is already spoken for.
        let err = respond_to_booking(
            &db,
            respond(booking.id, c1.id, PartyRole::Chef, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(
            accepted_user_ids(&db, booking.id, PartyRole::Chef).await,
            vec![c2.id]
        );
    }

    #[tokio::test]
    async fn simultaneous_accepts_leave_one_accepted_per_role() {
        let db = setup_test_db().await;
        let c1 = seed_chef(&db, "racing-primary").await;
        let c2 = seed_chef(&db, "racing-alternate").await;
        let booking = booking_with(&db, [Some(c1.id), Some(c2.id), None], [None, None, None]).await;

        let (first, second) = tokio::join!(
            respond_to_booking(
                &db,
                respond(booking.id, c1.id, PartyRole::Chef, true),
                PromotionPolicy::PrimaryOnly,
            ),
            respond_to_booking(
                &db,
                respond(booking.id, c2.id, PartyRole::Chef, true),
                PromotionPolicy::PrimaryOnly,
            ),
        );

        assert_eq!(u8::from(first.is_ok()) + u8::from(second.is_ok()), 1);
        let loser = if first.is_err() {
            first.unwrap_err()
        } else {
            second.unwrap_err()
        };
        assert!(matches!(loser, ServiceError::Conflict(_)));
        assert_eq!(
            accepted_user_ids(&db, booking.id, PartyRole::Chef).await.len(),
            1
        );
    }

    #[tokio::test]
    async fn candidate_may_revise_a_response_while_booking_is_open() {
        let db = setup_test_db().await;
        let c1 = seed_chef(&db, "undecided").await;
        let c2 = seed_chef(&db, "backup").await;
        let booking = booking_with(&db, [Some(c1.id), Some(c2.id), None], [None, None, None]).await;

        // Primary declines; the alternate keeps the booking alive.
        let out = respond_to_booking(
            &db,
            respond(booking.id, c1.id, PartyRole::Chef, false),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Pending);

        // Primary changes their mind while the booking is still open.
        let out = respond_to_booking(
            &db,
            respond(booking.id, c1.id, PartyRole::Chef, true),
            PromotionPolicy::PrimaryOnly,
        )
        .await
        .unwrap();
        assert_eq!(out.booking.status, BookingStatus::Confirmed);
        assert_eq!(out.response.acceptance_status, AcceptanceStatus::Accepted);
    }
}
