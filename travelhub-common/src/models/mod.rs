// File: travelhub-common/src/models/mod.rs
pub mod analytics;
pub mod booking;
pub mod cache;
pub mod chat;
pub mod oauth;
pub mod user;

pub use analytics::AnalyticsEvent;
pub use booking::{Booking, BookingItem, BookingItemType, BookingStatus, FlightBooking, HotelBooking, PaymentStatus};
pub use cache::{FlightSearchCache, HotelSearchCache};
pub use chat::{ChatMessage, ChatSession, ChatSessionStatus, MessageRole};
pub use oauth::{OAuthAccount, OAuthProvider};
pub use user::{User, UserRole, UserStatus};
