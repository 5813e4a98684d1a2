// src/repositories/postgres/mod.rs

pub mod analytics;
pub mod booking;
pub mod chat;
pub mod oauth_account;
pub mod search_cache;
pub mod user;

pub use analytics::PostgresAnalyticsRepository;
pub use booking::PostgresBookingRepository;
pub use chat::PostgresChatRepository;
pub use oauth_account::OAuthAccountRepository;
pub use search_cache::PostgresSearchCacheRepository;
pub use user::UserRepository;
