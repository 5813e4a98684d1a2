// src/repositories/mod.rs

pub mod postgres;

pub use postgres::analytics::{AnalyticsRepo, PostgresAnalyticsRepository};
pub use postgres::booking::{BookingRepo, PostgresBookingRepository};
pub use postgres::chat::{ChatRepo, PostgresChatRepository};
pub use postgres::oauth_account::{OAuthAccountRepo, OAuthAccountRepository};
pub use postgres::search_cache::{PostgresSearchCacheRepository, SearchCacheRepo};
pub use postgres::user::{UserRepo, UserRepository};
