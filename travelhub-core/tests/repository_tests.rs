// File: travelhub-core/tests/repository_tests.rs
//
// Repository round-trips against a real Postgres. Ignored by default; run
// with `cargo test -- --ignored`.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use travelhub_core::models::{
    Booking, BookingItem, BookingStatus, ChatMessage, ChatSession, ChatSessionStatus,
    FlightBooking, MessageRole, OAuthAccount, OAuthProvider, PaymentStatus, User, UserRole,
    UserStatus,
};
use travelhub_core::repositories::postgres::booking::{BookingRepo, PostgresBookingRepository};
use travelhub_core::repositories::postgres::chat::{ChatRepo, PostgresChatRepository};
use travelhub_core::repositories::postgres::oauth_account::{
    OAuthAccountRepo, OAuthAccountRepository,
};
use travelhub_core::repositories::postgres::user::{UserRepo, UserRepository};
use travelhub_core::test_utils::helpers::*;
use travelhub_core::Error;

fn test_user() -> User {
    let now = Utc::now();
    User {
        user_id: Uuid::new_v4(),
        email: format!("{}@example.com", Uuid::new_v4()),
        full_name: "Repo Test".to_string(),
        role: UserRole::User,
        status: UserStatus::Active,
        data_processing_consent: true,
        consent_granted_at: Some(now),
        created_at: now,
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn user_repository_round_trip() -> Result<(), Error> {
    let db = setup_test_database().await?;
    let repo = UserRepository::new(db.pool().clone());

    let user = test_user();
    repo.create(&user).await?;

    let retrieved = repo.get(user.user_id).await?.expect("user should exist");
    assert_eq!(retrieved.email, user.email);
    assert_eq!(retrieved.role, UserRole::User);
    assert!(retrieved.consent_consistent());

    let by_email = repo.get_by_email(&user.email).await?.expect("user should exist");
    assert_eq!(by_email.user_id, user.user_id);

    assert_eq!(repo.list_all().await?.len(), 1);

    db.close().await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn chat_repository_round_trip() -> Result<(), Error> {
    let db = setup_test_database().await?;
    let users = UserRepository::new(db.pool().clone());
    let chat = PostgresChatRepository::new(db.pool().clone());

    let user = test_user();
    users.create(&user).await?;

    let now = Utc::now();
    let session = ChatSession {
        session_id: Uuid::new_v4(),
        user_id: user.user_id,
        title: "Weekend in Rome".to_string(),
        status: ChatSessionStatus::Active,
        thread_id: Uuid::new_v4().to_string(),
        context: json!({ "destination": "Rome" }),
        message_count: 1,
        created_at: now,
    };
    chat.insert_chat_session(&session).await?;

    let msg = ChatMessage {
        message_id: Uuid::new_v4(),
        session_id: session.session_id,
        role: MessageRole::User,
        content: "Find me a hotel near the Colosseum".to_string(),
        model: None,
        tokens_total: None,
        latency_ms: None,
        created_at: now,
    };
    chat.insert_chat_message(&msg).await?;

    let stored = chat
        .get_session(session.session_id)
        .await?
        .expect("session should exist");
    assert_eq!(stored.title, session.title);
    assert_eq!(stored.context, session.context);

    let messages = chat.get_messages_for_session(session.session_id).await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::User);

    db.close().await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn oauth_accounts_are_scoped_to_their_user() -> Result<(), Error> {
    let db = setup_test_database().await?;
    let users = UserRepository::new(db.pool().clone());
    let oauth = OAuthAccountRepository::new(db.pool().clone());

    let user = test_user();
    users.create(&user).await?;

    let account = OAuthAccount {
        oauth_account_id: Uuid::new_v4(),
        user_id: user.user_id,
        provider: OAuthProvider::Google,
        provider_user_id: "google-42".to_string(),
        provider_email: Some(user.email.clone()),
        created_at: Utc::now(),
    };
    oauth.create(&account).await?;

    let accounts = oauth.get_all_for_user(user.user_id).await?;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].provider, OAuthProvider::Google);

    assert!(oauth.get_all_for_user(Uuid::new_v4()).await?.is_empty());

    db.close().await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn booking_with_flight_item_round_trip() -> Result<(), Error> {
    let db = setup_test_database().await?;
    let users = UserRepository::new(db.pool().clone());
    let bookings = PostgresBookingRepository::new(db.pool().clone());

    let user = test_user();
    users.create(&user).await?;

    let now = Utc::now();
    let detail = FlightBooking {
        flight_booking_id: Uuid::new_v4(),
        booking_reference: "XYZ789".to_string(),
        airline_code: "AF".to_string(),
        airline_name: "Air France".to_string(),
        flight_number: "AF006".to_string(),
        origin: "JFK".to_string(),
        destination: "CDG".to_string(),
        departure_time: now,
        arrival_time: now,
        cabin_class: "economy".to_string(),
        passengers: json!([{ "name": "Repo Test", "type": "adult" }]),
        passenger_count: 1,
        external_booking_id: None,
        created_at: now,
    };
    bookings.create_flight_booking(&detail).await?;

    let booking = Booking {
        booking_id: Uuid::new_v4(),
        user_id: user.user_id,
        booking_reference: "GTH-XYZ789".to_string(),
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Completed,
        total_amount: 850.0,
        currency: "USD".to_string(),
        contact_email: user.email.clone(),
        contact_phone: None,
        chat_session_id: None,
        confirmed_at: Some(now),
        created_at: now,
    };
    bookings.create_booking(&booking).await?;

    let item = BookingItem::flight(
        booking.booking_id,
        1,
        detail.flight_booking_id,
        850.0,
        now,
    );
    bookings.create_booking_item(&item).await?;

    let stored = bookings
        .get_booking(booking.booking_id)
        .await?
        .expect("booking should exist");
    assert_eq!(stored.status, BookingStatus::Confirmed);

    let items = bookings.get_items_for_booking(booking.booking_id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].flight_booking_id, Some(detail.flight_booking_id));
    assert!(items[0].references_one_detail());

    db.close().await;
    Ok(())
}
