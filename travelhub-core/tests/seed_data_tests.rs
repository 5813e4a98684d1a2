// File: travelhub-core/tests/seed_data_tests.rs

use std::collections::HashSet;

use chrono::Utc;
use travelhub_core::seed::data;

#[test]
fn emails_are_unique() {
    let fixtures = data::build(Utc::now());
    let emails: HashSet<&str> = fixtures.users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails.len(), fixtures.users.len());
}

#[test]
fn consent_timestamps_match_flags() {
    let fixtures = data::build(Utc::now());
    for user in &fixtures.users {
        assert!(
            user.consent_consistent(),
            "user {} has inconsistent consent data",
            user.email
        );
    }
}

#[test]
fn oauth_accounts_reference_seeded_users() {
    let fixtures = data::build(Utc::now());
    let user_ids: HashSet<_> = fixtures.users.iter().map(|u| u.user_id).collect();
    for account in &fixtures.oauth_accounts {
        assert!(user_ids.contains(&account.user_id));
    }
}

#[test]
fn chat_sessions_and_messages_are_linked() {
    let fixtures = data::build(Utc::now());
    let user_ids: HashSet<_> = fixtures.users.iter().map(|u| u.user_id).collect();
    let session_ids: HashSet<_> = fixtures
        .chat_sessions
        .iter()
        .map(|s| s.session_id)
        .collect();

    for session in &fixtures.chat_sessions {
        assert!(user_ids.contains(&session.user_id));
    }
    for msg in &fixtures.chat_messages {
        assert!(session_ids.contains(&msg.session_id));
    }
}

#[test]
fn bookings_reference_seeded_users_and_sessions() {
    let fixtures = data::build(Utc::now());
    let user_ids: HashSet<_> = fixtures.users.iter().map(|u| u.user_id).collect();
    let session_ids: HashSet<_> = fixtures
        .chat_sessions
        .iter()
        .map(|s| s.session_id)
        .collect();

    for booking in &fixtures.bookings {
        assert!(user_ids.contains(&booking.user_id));
        if let Some(session_id) = booking.chat_session_id {
            assert!(session_ids.contains(&session_id));
        }
    }
}

#[test]
fn booking_items_reference_exactly_one_detail() {
    let fixtures = data::build(Utc::now());
    let flight_ids: HashSet<_> = fixtures
        .flight_bookings
        .iter()
        .map(|f| f.flight_booking_id)
        .collect();
    let hotel_ids: HashSet<_> = fixtures
        .hotel_bookings
        .iter()
        .map(|h| h.hotel_booking_id)
        .collect();
    let booking_ids: HashSet<_> = fixtures.bookings.iter().map(|b| b.booking_id).collect();

    for item in &fixtures.booking_items {
        assert!(item.references_one_detail());
        assert!(booking_ids.contains(&item.booking_id));
        if let Some(id) = item.flight_booking_id {
            assert!(flight_ids.contains(&id));
        }
        if let Some(id) = item.hotel_booking_id {
            assert!(hotel_ids.contains(&id));
        }
    }

    // Each detail record maps to exactly one booking item.
    let used_flights: Vec<_> = fixtures
        .booking_items
        .iter()
        .filter_map(|i| i.flight_booking_id)
        .collect();
    let used_hotels: Vec<_> = fixtures
        .booking_items
        .iter()
        .filter_map(|i| i.hotel_booking_id)
        .collect();
    assert_eq!(used_flights.len(), fixtures.flight_bookings.len());
    assert_eq!(used_hotels.len(), fixtures.hotel_bookings.len());
    assert_eq!(used_flights.iter().collect::<HashSet<_>>().len(), used_flights.len());
    assert_eq!(used_hotels.iter().collect::<HashSet<_>>().len(), used_hotels.len());
}

#[test]
fn caches_expire_after_creation() {
    let now = Utc::now();
    let fixtures = data::build(now);
    for entry in &fixtures.flight_caches {
        assert!(entry.expires_at > now);
        assert!(entry.result_count_matches());
    }
    for entry in &fixtures.hotel_caches {
        assert!(entry.expires_at > now);
        assert!(entry.result_count_matches());
    }
}

#[test]
fn analytics_events_reference_seeded_users() {
    let fixtures = data::build(Utc::now());
    let user_ids: HashSet<_> = fixtures.users.iter().map(|u| u.user_id).collect();
    for event in &fixtures.analytics_events {
        if let Some(user_id) = event.user_id {
            assert!(user_ids.contains(&user_id));
        }
    }
}

#[test]
fn fixture_cardinalities() {
    let fixtures = data::build(Utc::now());
    assert_eq!(fixtures.users.len(), 3);
    assert_eq!(fixtures.oauth_accounts.len(), 2);
    assert_eq!(fixtures.chat_sessions.len(), 2);
    assert_eq!(fixtures.chat_messages.len(), 2);
    assert_eq!(fixtures.flight_caches.len(), 1);
    assert_eq!(fixtures.hotel_caches.len(), 1);
    assert_eq!(fixtures.bookings.len(), 2);
    assert_eq!(fixtures.flight_bookings.len(), 1);
    assert_eq!(fixtures.hotel_bookings.len(), 1);
    assert_eq!(fixtures.booking_items.len(), 2);
    assert_eq!(fixtures.analytics_events.len(), 3);
}

#[test]
fn fixed_identifiers_are_stable_across_builds() {
    let now = Utc::now();
    let a = data::build(now);
    let b = data::build(now);

    for (x, y) in a.users.iter().zip(&b.users) {
        assert_eq!(x.user_id, y.user_id);
        assert_eq!(x.email, y.email);
    }
    for (x, y) in a.chat_sessions.iter().zip(&b.chat_sessions) {
        assert_eq!(x.session_id, y.session_id);
    }
    for (x, y) in a.bookings.iter().zip(&b.bookings) {
        assert_eq!(x.booking_id, y.booking_id);
        assert_eq!(x.booking_reference, y.booking_reference);
    }
    for (x, y) in a.flight_caches.iter().zip(&b.flight_caches) {
        assert_eq!(x.search_hash, y.search_hash);
    }
    for (x, y) in a.hotel_caches.iter().zip(&b.hotel_caches) {
        assert_eq!(x.search_hash, y.search_hash);
    }
}
