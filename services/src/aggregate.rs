//! Pure transition logic deriving a booking's overall status from its
//! candidates' individual responses.
//!
//! The original system buried these rules in stored procedures; here every
//! transition is an explicit function over in-memory values so it can be
//! unit-tested without a database.

use db::models::booking::{self, BookingStatus};
use db::models::party_response::{AcceptanceStatus, PartyRole};

/// What happens when a primary candidate declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPolicy {
    /// Only the acting primary (first filled slot) can confirm its role.
    /// A declined primary leaves the booking pending until all candidates
    /// decline or the booking is administratively reassigned.
    PrimaryOnly,
    /// A declined primary is substituted by the first slot-ordered candidate
    /// that has not declined; that candidate's acceptance confirms the role.
    PromoteAlternates,
}

/// Derives the aggregate status of a booking from its party responses.
///
/// A role participates iff any of its candidate slots is filled. The booking
/// is `Failed` as soon as every candidate of a participating role has
/// declined, `Confirmed` once every participating role is confirmed under
/// the given policy, and `Pending` otherwise. Administrative states
/// (cancelled/completed) are never produced here; callers must not invoke
/// aggregation on a closed booking.
pub fn aggregate_status(
    booking: &booking::Model,
    responses: &[db::models::party_response::Model],
    policy: PromotionPolicy,
) -> BookingStatus {
    let mut any_required = false;
    let mut all_confirmed = true;

    for role in [PartyRole::Chef, PartyRole::Vendor] {
        if !booking.requires_role(role) {
            continue;
        }
        any_required = true;
        let candidates: Vec<i64> = booking.candidates(role).into_iter().flatten().collect();

        let status_of = |user_id: i64| -> AcceptanceStatus {
            responses
                .iter()
                .find(|r| r.role == role && r.user_id == user_id)
                .map(|r| r.acceptance_status)
                .unwrap_or(AcceptanceStatus::Pending)
        };

        if candidates
            .iter()
            .all(|c| status_of(*c) == AcceptanceStatus::Declined)
        {
            return BookingStatus::Failed;
        }

        let confirmed = match policy {
            PromotionPolicy::PrimaryOnly => status_of(candidates[0]) == AcceptanceStatus::Accepted,
            PromotionPolicy::PromoteAlternates => candidates
                .iter()
                .map(|c| status_of(*c))
                .find(|s| *s != AcceptanceStatus::Declined)
                .map(|s| s == AcceptanceStatus::Accepted)
                .unwrap_or(false),
        };

        if !confirmed {
            all_confirmed = false;
        }
    }

    if any_required && all_confirmed {
        BookingStatus::Confirmed
    } else {
        BookingStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use db::models::booking::BookingType;
    use db::models::party_response;

    fn booking_with_slots(
        chefs: [Option<i64>; 3],
        vendors: [Option<i64>; 3],
    ) -> booking::Model {
        booking::Model {
            id: 1,
            customer_user_id: 100,
            event_id: None,
            service_id: Some(5),
            booking_type: BookingType::ServiceBooking,
            event_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            total_members: 10,
            veg_guests: 6,
            non_veg_guests: 4,
            primary_chef_user_id: chefs[0],
            alternate_chef1_user_id: chefs[1],
            alternate_chef2_user_id: chefs[2],
            primary_vendor_user_id: vendors[0],
            alternate_vendor1_user_id: vendors[1],
            alternate_vendor2_user_id: vendors[2],
            status: BookingStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn response(user_id: i64, role: PartyRole, status: AcceptanceStatus) -> party_response::Model {
        party_response::Model {
            id: 0,
            booking_id: 1,
            user_id,
            role,
            acceptance_status: status,
            comments: None,
            responded_at: Some(Utc::now()),
        }
    }

    #[test]
    fn no_responses_is_pending() {
        let booking = booking_with_slots([Some(2), None, None], [Some(7), None, None]);
        let status = aggregate_status(&booking, &[], PromotionPolicy::PrimaryOnly);
        assert_eq!(status, BookingStatus::Pending);
    }

    #[test]
    fn vendor_only_booking_confirms_on_primary_vendor_accept() {
        let booking = booking_with_slots([None, None, None], [Some(7), None, None]);
        let responses = vec![response(7, PartyRole::Vendor, AcceptanceStatus::Accepted)];
        let status = aggregate_status(&booking, &responses, PromotionPolicy::PrimaryOnly);
        assert_eq!(status, BookingStatus::Confirmed);
    }

    #[test]
    fn both_roles_required_needs_both_primaries() {
        let booking = booking_with_slots([Some(2), None, None], [Some(7), None, None]);

        let chef_only = vec![response(2, PartyRole::Chef, AcceptanceStatus::Accepted)];
        assert_eq!(
            aggregate_status(&booking, &chef_only, PromotionPolicy::PrimaryOnly),
            BookingStatus::Pending
        );

        let both = vec![
            response(2, PartyRole::Chef, AcceptanceStatus::Accepted),
            response(7, PartyRole::Vendor, AcceptanceStatus::Accepted),
        ];
        assert_eq!(
            aggregate_status(&booking, &both, PromotionPolicy::PrimaryOnly),
            BookingStatus::Confirmed
        );
    }

    #[test]
    fn all_candidates_declining_a_required_role_fails_the_booking() {
        let booking = booking_with_slots([Some(2), Some(3), None], [Some(7), None, None]);
        let responses = vec![
            response(2, PartyRole::Chef, AcceptanceStatus::Declined),
            response(3, PartyRole::Chef, AcceptanceStatus::Declined),
            response(7, PartyRole::Vendor, AcceptanceStatus::Accepted),
        ];
        assert_eq!(
            aggregate_status(&booking, &responses, PromotionPolicy::PrimaryOnly),
            BookingStatus::Failed
        );
    }

    #[test]
    fn primary_decline_stays_pending_without_promotion() {
        let booking = booking_with_slots([None, None, None], [Some(7), Some(8), None]);
        let responses = vec![
            response(7, PartyRole::Vendor, AcceptanceStatus::Declined),
            response(8, PartyRole::Vendor, AcceptanceStatus::Accepted),
        ];
        assert_eq!(
            aggregate_status(&booking, &responses, PromotionPolicy::PrimaryOnly),
            BookingStatus::Pending
        );
    }

    #[test]
    fn promotion_policy_lets_accepting_alternate_confirm() {
        let booking = booking_with_slots([None, None, None], [Some(7), Some(8), None]);
        let responses = vec![
            response(7, PartyRole::Vendor, AcceptanceStatus::Declined),
            response(8, PartyRole::Vendor, AcceptanceStatus::Accepted),
        ];
        assert_eq!(
            aggregate_status(&booking, &responses, PromotionPolicy::PromoteAlternates),
            BookingStatus::Confirmed
        );
    }

    #[test]
    fn promotion_respects_slot_order() {
        // Alternate2 accepted but alternate1 is still pending: the role is
        // not confirmed because alternate1 is next in line.
        let booking = booking_with_slots([None, None, None], [Some(7), Some(8), Some(9)]);
        let responses = vec![
            response(7, PartyRole::Vendor, AcceptanceStatus::Declined),
            response(9, PartyRole::Vendor, AcceptanceStatus::Accepted),
        ];
        assert_eq!(
            aggregate_status(&booking, &responses, PromotionPolicy::PromoteAlternates),
            BookingStatus::Pending
        );
    }

    #[test]
    fn booking_without_candidates_stays_pending() {
        let booking = booking_with_slots([None, None, None], [None, None, None]);
        assert_eq!(
            aggregate_status(&booking, &[], PromotionPolicy::PromoteAlternates),
            BookingStatus::Pending
        );
    }
}
