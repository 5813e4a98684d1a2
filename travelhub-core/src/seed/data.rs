// src/seed/data.rs

//! Fixed sample rows for local development. Every run inserts the same
//! identifiers, emails, booking references, and search hashes, so a second
//! run against a non-reset database fails on uniqueness constraints.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde_json::json;
use uuid::{Uuid, uuid};

use travelhub_common::models::{
    AnalyticsEvent, Booking, BookingItem, BookingStatus, ChatMessage, ChatSession,
    ChatSessionStatus, FlightBooking, FlightSearchCache, HotelBooking, HotelSearchCache,
    MessageRole, OAuthAccount, OAuthProvider, PaymentStatus, User, UserRole, UserStatus,
};

/// Cached search results stay valid for 30 minutes.
const CACHE_TTL_MINUTES: i64 = 30;

pub struct Fixtures {
    pub users: Vec<User>,
    pub oauth_accounts: Vec<OAuthAccount>,
    pub chat_sessions: Vec<ChatSession>,
    pub chat_messages: Vec<ChatMessage>,
    pub flight_caches: Vec<FlightSearchCache>,
    pub hotel_caches: Vec<HotelSearchCache>,
    pub bookings: Vec<Booking>,
    pub flight_bookings: Vec<FlightBooking>,
    pub hotel_bookings: Vec<HotelBooking>,
    pub booking_items: Vec<BookingItem>,
    pub analytics_events: Vec<AnalyticsEvent>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("valid timestamp")
}

/// Build the full fixture set. `now` drives every "current time" value
/// (consent grants, cache expiry, confirmation times) so tests can pin the
/// clock.
pub fn build(now: DateTime<Utc>) -> Fixtures {
    let user1 = User {
        user_id: uuid!("550e8400-e29b-41d4-a716-446655440000"),
        email: "admin@globaltravelhub.com".to_string(),
        full_name: "Admin User".to_string(),
        role: UserRole::Admin,
        status: UserStatus::Active,
        data_processing_consent: true,
        consent_granted_at: Some(now),
        created_at: now,
    };

    let user2 = User {
        user_id: uuid!("550e8400-e29b-41d4-a716-446655440001"),
        email: "test.user@gmail.com".to_string(),
        full_name: "Test User".to_string(),
        role: UserRole::User,
        status: UserStatus::Active,
        data_processing_consent: true,
        consent_granted_at: Some(now),
        created_at: now,
    };

    let user3 = User {
        user_id: uuid!("550e8400-e29b-41d4-a716-446655440002"),
        email: "john.doe@example.com".to_string(),
        full_name: "John Doe".to_string(),
        role: UserRole::User,
        status: UserStatus::Active,
        data_processing_consent: true,
        consent_granted_at: Some(now),
        created_at: now,
    };

    let oauth_accounts = vec![
        OAuthAccount {
            oauth_account_id: Uuid::new_v4(),
            user_id: user2.user_id,
            provider: OAuthProvider::Google,
            provider_user_id: "google-123456".to_string(),
            provider_email: Some("test.user@gmail.com".to_string()),
            created_at: now,
        },
        OAuthAccount {
            oauth_account_id: Uuid::new_v4(),
            user_id: user3.user_id,
            provider: OAuthProvider::Google,
            provider_user_id: "google-789012".to_string(),
            provider_email: Some("john.doe@example.com".to_string()),
            created_at: now,
        },
    ];

    let session1 = ChatSession {
        session_id: uuid!("660e8400-e29b-41d4-a716-446655440000"),
        user_id: user2.user_id,
        title: "Trip to Paris".to_string(),
        status: ChatSessionStatus::Active,
        thread_id: "770e8400-e29b-41d4-a716-446655440000".to_string(),
        context: json!({ "destination": "Paris", "intent": "flight_search" }),
        message_count: 5,
        created_at: now,
    };

    let session2 = ChatSession {
        session_id: uuid!("660e8400-e29b-41d4-a716-446655440001"),
        user_id: user2.user_id,
        title: "Hotel in Tokyo".to_string(),
        status: ChatSessionStatus::Active,
        thread_id: "770e8400-e29b-41d4-a716-446655440001".to_string(),
        context: json!({ "destination": "Tokyo", "intent": "hotel_search" }),
        message_count: 3,
        created_at: now,
    };

    let chat_messages = vec![
        ChatMessage {
            message_id: uuid!("880e8400-e29b-41d4-a716-446655440000"),
            session_id: session1.session_id,
            role: MessageRole::User,
            content: "I want to book a flight from NYC to Paris in June".to_string(),
            model: None,
            tokens_total: None,
            latency_ms: None,
            created_at: now,
        },
        ChatMessage {
            message_id: uuid!("880e8400-e29b-41d4-a716-446655440001"),
            session_id: session1.session_id,
            role: MessageRole::Ai,
            content: "I'd be happy to help you find flights from NYC to Paris in June!"
                .to_string(),
            model: Some("gpt-4".to_string()),
            tokens_total: Some(45),
            latency_ms: Some(850),
            created_at: now,
        },
    ];

    let flight_caches = vec![FlightSearchCache {
        cache_id: uuid!("f1e2d3c4-b5a6-7890-abcd-ef1234567890"),
        search_hash: "a1b2c3d4e5f6789012345678901234567890abcd1234567890abcdef12345678"
            .to_string(),
        origin: "JFK".to_string(),
        destination: "CDG".to_string(),
        departure_date: date(2024, 6, 15),
        return_date: Some(date(2024, 6, 22)),
        passengers_adults: 1,
        cabin_class: "economy".to_string(),
        results: json!([
            { "airline": "Air France", "flightNumber": "AF006", "price": 850 },
            { "airline": "Delta", "flightNumber": "DL264", "price": 920 }
        ]),
        result_count: 2,
        expires_at: now + Duration::minutes(CACHE_TTL_MINUTES),
        hit_count: 15,
        created_at: now,
    }];

    let hotel_caches = vec![HotelSearchCache {
        cache_id: uuid!("a1b2c3d4-e5f6-7890-abcd-ef1234567891"),
        search_hash: "b2c3d4e5f6a789012345678901234567890abcde1234567890abcdef123456789"
            .to_string(),
        location: "Tokyo".to_string(),
        check_in: date(2024, 7, 1),
        check_out: date(2024, 7, 5),
        guests: 2,
        rooms: 1,
        results: json!([
            { "hotelId": "HT123", "hotelName": "Park Hyatt Tokyo", "pricePerNight": 450 },
            { "hotelId": "HT456", "hotelName": "Shibuya Excel Hotel", "pricePerNight": 180 }
        ]),
        result_count: 2,
        expires_at: now + Duration::minutes(CACHE_TTL_MINUTES),
        hit_count: 8,
        created_at: now,
    }];

    let booking1 = Booking {
        booking_id: uuid!("990e8400-e29b-41d4-a716-446655440000"),
        user_id: user3.user_id,
        booking_reference: "GTH-ABC123".to_string(),
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Completed,
        total_amount: 1250.00,
        currency: "USD".to_string(),
        contact_email: "john.doe@example.com".to_string(),
        contact_phone: Some("+1-555-0123".to_string()),
        chat_session_id: Some(session2.session_id),
        confirmed_at: Some(now),
        created_at: now,
    };

    let booking2 = Booking {
        booking_id: uuid!("990e8400-e29b-41d4-a716-446655440001"),
        user_id: user2.user_id,
        booking_reference: "GTH-DEF456".to_string(),
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Completed,
        total_amount: 2100.00,
        currency: "USD".to_string(),
        contact_email: "test.user@gmail.com".to_string(),
        contact_phone: Some("+1-555-0456".to_string()),
        chat_session_id: Some(session1.session_id),
        confirmed_at: Some(now),
        created_at: now,
    };

    let flight_booking = FlightBooking {
        flight_booking_id: uuid!("aa0e8400-e29b-41d4-a716-446655440000"),
        booking_reference: "ABC123".to_string(),
        airline_code: "BA".to_string(),
        airline_name: "British Airways".to_string(),
        flight_number: "BA112".to_string(),
        origin: "JFK".to_string(),
        destination: "LHR".to_string(),
        departure_time: timestamp(2024, 3, 15, 22, 30, 0),
        arrival_time: timestamp(2024, 3, 16, 8, 45, 0),
        cabin_class: "business".to_string(),
        passengers: json!([{ "name": "John Doe", "type": "adult", "price": 1200 }]),
        passenger_count: 1,
        external_booking_id: Some("EXT-12345".to_string()),
        created_at: now,
    };

    let hotel_booking = HotelBooking {
        hotel_booking_id: uuid!("bb0e8400-e29b-41d4-a716-446655440000"),
        booking_reference: "DEF456".to_string(),
        hotel_id: "HT789".to_string(),
        hotel_name: "The Peninsula Paris".to_string(),
        hotel_address: "19 Avenue Kléber, 75116 Paris, France".to_string(),
        hotel_rating: 5.0,
        room_type: "Deluxe Room".to_string(),
        check_in: date(2024, 6, 15),
        check_out: date(2024, 6, 22),
        nights: 7,
        guests: 2,
        rooms: 1,
        breakfast_included: true,
        guest_details: json!([{ "name": "Test User", "type": "adult" }]),
        external_booking_id: Some("EXT-67890".to_string()),
        created_at: now,
    };

    let booking_items = vec![
        BookingItem::flight(
            booking1.booking_id,
            1,
            flight_booking.flight_booking_id,
            1200.00,
            now,
        ),
        BookingItem::hotel(
            booking2.booking_id,
            1,
            hotel_booking.hotel_booking_id,
            2100.00,
            now,
        ),
    ];

    let analytics_events = vec![
        AnalyticsEvent {
            event_id: Uuid::new_v4(),
            event_type: "page_view".to_string(),
            user_id: Some(user2.user_id),
            session_id: Some("sess-123".to_string()),
            event_data: Some(json!({ "page": "/flights/search", "referrer": "google" })),
            created_at: now,
        },
        AnalyticsEvent {
            event_id: Uuid::new_v4(),
            event_type: "search_flight".to_string(),
            user_id: Some(user2.user_id),
            session_id: Some("sess-123".to_string()),
            event_data: Some(json!({ "origin": "JFK", "destination": "CDG", "resultsCount": 2 })),
            created_at: now,
        },
        AnalyticsEvent {
            event_id: Uuid::new_v4(),
            event_type: "booking_completed".to_string(),
            user_id: Some(user2.user_id),
            session_id: Some("sess-123".to_string()),
            event_data: Some(json!({
                "bookingId": booking2.booking_id.to_string(),
                "amount": 2100
            })),
            created_at: now,
        },
    ];

    Fixtures {
        users: vec![user1, user2, user3],
        oauth_accounts,
        chat_sessions: vec![session1, session2],
        chat_messages,
        flight_caches,
        hotel_caches,
        bookings: vec![booking1, booking2],
        flight_bookings: vec![flight_booking],
        hotel_bookings: vec![hotel_booking],
        booking_items,
        analytics_events,
    }
}
