// File: travelhub-common/src/models/booking.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Unknown booking status: {}", s)),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(BookingStatus::Pending)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Unknown payment status: {}", s)),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(PaymentStatus::Pending)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingItemType {
    Flight,
    Hotel,
}

impl fmt::Display for BookingItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingItemType::Flight => write!(f, "flight"),
            BookingItemType::Hotel => write!(f, "hotel"),
        }
    }
}

impl FromStr for BookingItemType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" => Ok(BookingItemType::Flight),
            "hotel" => Ok(BookingItemType::Hotel),
            _ => Err(format!("Unknown booking item type: {}", s)),
        }
    }
}

impl From<String> for BookingItemType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(BookingItemType::Flight)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub booking_reference: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: f64,
    pub currency: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub chat_session_id: Option<Uuid>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Carrier-side reservation detail for one flight. `passengers` is the raw
/// passenger list as received from the booking provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlightBooking {
    pub flight_booking_id: Uuid,
    pub booking_reference: String,
    pub airline_code: String,
    pub airline_name: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub cabin_class: String,
    pub passengers: Value,
    pub passenger_count: i32,
    pub external_booking_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotelBooking {
    pub hotel_booking_id: Uuid,
    pub booking_reference: String,
    pub hotel_id: String,
    pub hotel_name: String,
    pub hotel_address: String,
    pub hotel_rating: f64,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i32,
    pub guests: i32,
    pub rooms: i32,
    pub breakfast_included: bool,
    pub guest_details: Value,
    pub external_booking_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Line entry linking a booking to exactly one flight or hotel detail
/// record.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingItem {
    pub booking_item_id: Uuid,
    pub booking_id: Uuid,
    pub item_type: BookingItemType,
    pub item_sequence: i32,
    pub flight_booking_id: Option<Uuid>,
    pub hotel_booking_id: Option<Uuid>,
    pub item_price: f64,
    pub created_at: DateTime<Utc>,
}

impl BookingItem {
    pub fn flight(
        booking_id: Uuid,
        item_sequence: i32,
        flight_booking_id: Uuid,
        item_price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_item_id: Uuid::new_v4(),
            booking_id,
            item_type: BookingItemType::Flight,
            item_sequence,
            flight_booking_id: Some(flight_booking_id),
            hotel_booking_id: None,
            item_price,
            created_at,
        }
    }

    pub fn hotel(
        booking_id: Uuid,
        item_sequence: i32,
        hotel_booking_id: Uuid,
        item_price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_item_id: Uuid::new_v4(),
            booking_id,
            item_type: BookingItemType::Hotel,
            item_sequence,
            flight_booking_id: None,
            hotel_booking_id: Some(hotel_booking_id),
            item_price,
            created_at,
        }
    }

    /// Exactly one detail id must be set, and it must match `item_type`.
    pub fn references_one_detail(&self) -> bool {
        match self.item_type {
            BookingItemType::Flight => {
                self.flight_booking_id.is_some() && self.hotel_booking_id.is_none()
            }
            BookingItemType::Hotel => {
                self.hotel_booking_id.is_some() && self.flight_booking_id.is_none()
            }
        }
    }
}
