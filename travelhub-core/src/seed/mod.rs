// src/seed/mod.rs

//! Seed loader: inserts the development fixtures in dependency order.

pub mod data;
pub mod plan;

use std::fmt;

use chrono::Utc;
use tracing::info;

use crate::Error;
use crate::db::Database;
use crate::repositories::postgres::analytics::{AnalyticsRepo, PostgresAnalyticsRepository};
use crate::repositories::postgres::booking::{BookingRepo, PostgresBookingRepository};
use crate::repositories::postgres::chat::{ChatRepo, PostgresChatRepository};
use crate::repositories::postgres::oauth_account::{OAuthAccountRepo, OAuthAccountRepository};
use crate::repositories::postgres::search_cache::{
    PostgresSearchCacheRepository, SearchCacheRepo,
};
use crate::repositories::postgres::user::{UserRepo, UserRepository};

/// Per-entity row counts from a completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub oauth_accounts: usize,
    pub chat_sessions: usize,
    pub chat_messages: usize,
    pub flight_search_caches: usize,
    pub hotel_search_caches: usize,
    pub bookings: usize,
    pub flight_bookings: usize,
    pub hotel_bookings: usize,
    pub booking_items: usize,
    pub analytics_events: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.users
            + self.oauth_accounts
            + self.chat_sessions
            + self.chat_messages
            + self.flight_search_caches
            + self.hotel_search_caches
            + self.bookings
            + self.flight_bookings
            + self.hotel_bookings
            + self.booking_items
            + self.analytics_events
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seeded {} rows: {} users, {} OAuth accounts, {} chat sessions, {} chat messages, \
             {} flight caches, {} hotel caches, {} bookings, {} flight bookings, \
             {} hotel bookings, {} booking items, {} analytics events",
            self.total(),
            self.users,
            self.oauth_accounts,
            self.chat_sessions,
            self.chat_messages,
            self.flight_search_caches,
            self.hotel_search_caches,
            self.bookings,
            self.flight_bookings,
            self.hotel_bookings,
            self.booking_items,
            self.analytics_events,
        )
    }
}

/// Run the full seed sequence against `db`. Strictly sequential; the first
/// failed insert aborts the remaining steps and surfaces the error.
pub async fn run(db: &Database) -> Result<SeedSummary, Error> {
    let order = plan::execution_order()?;

    let user_repo = UserRepository::new(db.pool().clone());
    let oauth_repo = OAuthAccountRepository::new(db.pool().clone());
    let chat_repo = PostgresChatRepository::new(db.pool().clone());
    let cache_repo = PostgresSearchCacheRepository::new(db.pool().clone());
    let booking_repo = PostgresBookingRepository::new(db.pool().clone());
    let analytics_repo = PostgresAnalyticsRepository::new(db.pool().clone());

    run_with(
        &order,
        &user_repo,
        &oauth_repo,
        &chat_repo,
        &cache_repo,
        &booking_repo,
        &analytics_repo,
    )
    .await
}

async fn run_with(
    order: &[&str],
    users: &impl UserRepo,
    oauth: &impl OAuthAccountRepo,
    chat: &impl ChatRepo,
    caches: &impl SearchCacheRepo,
    bookings: &impl BookingRepo,
    analytics: &impl AnalyticsRepo,
) -> Result<SeedSummary, Error> {
    info!("Start seeding...");

    let fixtures = data::build(Utc::now());
    let mut summary = SeedSummary::default();

    for step in order {
        match *step {
            plan::STEP_USERS => {
                for user in &fixtures.users {
                    users.create(user).await?;
                    info!("created user {} <{}>", user.user_id, user.email);
                }
                summary.users = fixtures.users.len();
            }
            plan::STEP_OAUTH_ACCOUNTS => {
                for account in &fixtures.oauth_accounts {
                    oauth.create(account).await?;
                    info!(
                        "created oauth account {} ({} / {})",
                        account.oauth_account_id, account.provider, account.provider_user_id
                    );
                }
                summary.oauth_accounts = fixtures.oauth_accounts.len();
            }
            plan::STEP_CHAT_SESSIONS => {
                for session in &fixtures.chat_sessions {
                    chat.insert_chat_session(session).await?;
                    info!("created chat session {} '{}'", session.session_id, session.title);
                }
                summary.chat_sessions = fixtures.chat_sessions.len();
            }
            plan::STEP_CHAT_MESSAGES => {
                for msg in &fixtures.chat_messages {
                    chat.insert_chat_message(msg).await?;
                    info!("created chat message {} ({})", msg.message_id, msg.role);
                }
                summary.chat_messages = fixtures.chat_messages.len();
            }
            plan::STEP_SEARCH_CACHES => {
                for entry in &fixtures.flight_caches {
                    caches.insert_flight_cache(entry).await?;
                    info!(
                        "created flight search cache {} ({} -> {})",
                        entry.cache_id, entry.origin, entry.destination
                    );
                }
                for entry in &fixtures.hotel_caches {
                    caches.insert_hotel_cache(entry).await?;
                    info!("created hotel search cache {} ({})", entry.cache_id, entry.location);
                }
                summary.flight_search_caches = fixtures.flight_caches.len();
                summary.hotel_search_caches = fixtures.hotel_caches.len();
            }
            plan::STEP_BOOKINGS => {
                for booking in &fixtures.bookings {
                    bookings.create_booking(booking).await?;
                    info!(
                        "created booking {} ({})",
                        booking.booking_id, booking.booking_reference
                    );
                }
                summary.bookings = fixtures.bookings.len();
            }
            plan::STEP_TRAVEL_DETAILS => {
                for detail in &fixtures.flight_bookings {
                    bookings.create_flight_booking(detail).await?;
                    info!(
                        "created flight booking {} ({} {})",
                        detail.flight_booking_id, detail.airline_code, detail.flight_number
                    );
                }
                for detail in &fixtures.hotel_bookings {
                    bookings.create_hotel_booking(detail).await?;
                    info!(
                        "created hotel booking {} ({})",
                        detail.hotel_booking_id, detail.hotel_name
                    );
                }
                summary.flight_bookings = fixtures.flight_bookings.len();
                summary.hotel_bookings = fixtures.hotel_bookings.len();
            }
            plan::STEP_BOOKING_ITEMS => {
                for item in &fixtures.booking_items {
                    bookings.create_booking_item(item).await?;
                    info!(
                        "created booking item {} for booking {}",
                        item.booking_item_id, item.booking_id
                    );
                }
                summary.booking_items = fixtures.booking_items.len();
            }
            plan::STEP_ANALYTICS_EVENTS => {
                for event in &fixtures.analytics_events {
                    analytics.insert_event(event).await?;
                    info!("created analytics event {} ({})", event.event_id, event.event_type);
                }
                summary.analytics_events = fixtures.analytics_events.len();
            }
            other => {
                return Err(Error::Seed(format!("unknown seed step '{}'", other)));
            }
        }
    }

    info!("Seeding finished.");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::postgres::analytics::MockAnalyticsRepo;
    use crate::repositories::postgres::booking::MockBookingRepo;
    use crate::repositories::postgres::chat::MockChatRepo;
    use crate::repositories::postgres::oauth_account::MockOAuthAccountRepo;
    use crate::repositories::postgres::search_cache::MockSearchCacheRepo;
    use crate::repositories::postgres::user::MockUserRepo;

    #[tokio::test]
    async fn runs_every_step_and_reports_counts() {
        let mut users = MockUserRepo::new();
        users.expect_create().times(3).returning(|_| Ok(()));

        let mut oauth = MockOAuthAccountRepo::new();
        oauth.expect_create().times(2).returning(|_| Ok(()));

        let mut chat = MockChatRepo::new();
        chat.expect_insert_chat_session().times(2).returning(|_| Ok(()));
        chat.expect_insert_chat_message().times(2).returning(|_| Ok(()));

        let mut caches = MockSearchCacheRepo::new();
        caches.expect_insert_flight_cache().times(1).returning(|_| Ok(()));
        caches.expect_insert_hotel_cache().times(1).returning(|_| Ok(()));

        let mut bookings = MockBookingRepo::new();
        bookings.expect_create_booking().times(2).returning(|_| Ok(()));
        bookings.expect_create_flight_booking().times(1).returning(|_| Ok(()));
        bookings.expect_create_hotel_booking().times(1).returning(|_| Ok(()));
        bookings.expect_create_booking_item().times(2).returning(|_| Ok(()));

        let mut analytics = MockAnalyticsRepo::new();
        analytics.expect_insert_event().times(3).returning(|_| Ok(()));

        let order = plan::execution_order().unwrap();
        let summary = run_with(&order, &users, &oauth, &chat, &caches, &bookings, &analytics)
            .await
            .unwrap();

        assert_eq!(summary.users, 3);
        assert_eq!(summary.oauth_accounts, 2);
        assert_eq!(summary.chat_sessions, 2);
        assert_eq!(summary.chat_messages, 2);
        assert_eq!(summary.flight_search_caches, 1);
        assert_eq!(summary.hotel_search_caches, 1);
        assert_eq!(summary.bookings, 2);
        assert_eq!(summary.flight_bookings, 1);
        assert_eq!(summary.hotel_bookings, 1);
        assert_eq!(summary.booking_items, 2);
        assert_eq!(summary.analytics_events, 3);
        assert_eq!(summary.total(), 20);
    }

    #[tokio::test]
    async fn aborts_on_first_insert_failure() {
        let mut users = MockUserRepo::new();
        users
            .expect_create()
            .times(1)
            .returning(|_| Err(Error::Seed("duplicate key".to_string())));

        // No expectations on the remaining repositories: any call would
        // fail the test.
        let oauth = MockOAuthAccountRepo::new();
        let chat = MockChatRepo::new();
        let caches = MockSearchCacheRepo::new();
        let bookings = MockBookingRepo::new();
        let analytics = MockAnalyticsRepo::new();

        let order = plan::execution_order().unwrap();
        let result = run_with(&order, &users, &oauth, &chat, &caches, &bookings, &analytics).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unknown_step_is_rejected() {
        let users = MockUserRepo::new();
        let oauth = MockOAuthAccountRepo::new();
        let chat = MockChatRepo::new();
        let caches = MockSearchCacheRepo::new();
        let bookings = MockBookingRepo::new();
        let analytics = MockAnalyticsRepo::new();

        let order = ["nonsense"];
        let result = run_with(&order, &users, &oauth, &chat, &caches, &bookings, &analytics).await;
        assert!(matches!(result, Err(Error::Seed(_))));
    }
}
