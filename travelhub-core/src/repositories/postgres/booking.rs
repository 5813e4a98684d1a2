// src/repositories/postgres/booking.rs

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use travelhub_common::models::{
    Booking, BookingItem, BookingItemType, BookingStatus, FlightBooking, HotelBooking,
    PaymentStatus,
};

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookingRepo: Send + Sync {
    async fn create_booking(&self, booking: &Booking) -> Result<(), Error>;
    async fn create_flight_booking(&self, detail: &FlightBooking) -> Result<(), Error>;
    async fn create_hotel_booking(&self, detail: &HotelBooking) -> Result<(), Error>;
    async fn create_booking_item(&self, item: &BookingItem) -> Result<(), Error>;
    async fn get_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, Error>;
    async fn get_items_for_booking(&self, booking_id: Uuid) -> Result<Vec<BookingItem>, Error>;
}

#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: Pool<Postgres>,
}

impl PostgresBookingRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookingRepo for PostgresBookingRepository {
    async fn create_booking(&self, booking: &Booking) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id, user_id, booking_reference, status, payment_status,
                total_amount, currency, contact_email, contact_phone,
                chat_session_id, confirmed_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
            .bind(booking.booking_id)
            .bind(booking.user_id)
            .bind(&booking.booking_reference)
            .bind(booking.status.to_string())
            .bind(booking.payment_status.to_string())
            .bind(booking.total_amount)
            .bind(&booking.currency)
            .bind(&booking.contact_email)
            .bind(&booking.contact_phone)
            .bind(booking.chat_session_id)
            .bind(booking.confirmed_at)
            .bind(booking.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_flight_booking(&self, detail: &FlightBooking) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO flight_bookings (
                flight_booking_id, booking_reference, airline_code, airline_name,
                flight_number, origin, destination, departure_time, arrival_time,
                cabin_class, passengers, passenger_count, external_booking_id,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
            .bind(detail.flight_booking_id)
            .bind(&detail.booking_reference)
            .bind(&detail.airline_code)
            .bind(&detail.airline_name)
            .bind(&detail.flight_number)
            .bind(&detail.origin)
            .bind(&detail.destination)
            .bind(detail.departure_time)
            .bind(detail.arrival_time)
            .bind(&detail.cabin_class)
            .bind(&detail.passengers)
            .bind(detail.passenger_count)
            .bind(&detail.external_booking_id)
            .bind(detail.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_hotel_booking(&self, detail: &HotelBooking) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO hotel_bookings (
                hotel_booking_id, booking_reference, hotel_id, hotel_name,
                hotel_address, hotel_rating, room_type, check_in, check_out,
                nights, guests, rooms, breakfast_included, guest_details,
                external_booking_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
            .bind(detail.hotel_booking_id)
            .bind(&detail.booking_reference)
            .bind(&detail.hotel_id)
            .bind(&detail.hotel_name)
            .bind(&detail.hotel_address)
            .bind(detail.hotel_rating)
            .bind(&detail.room_type)
            .bind(detail.check_in)
            .bind(detail.check_out)
            .bind(detail.nights)
            .bind(detail.guests)
            .bind(detail.rooms)
            .bind(detail.breakfast_included)
            .bind(&detail.guest_details)
            .bind(&detail.external_booking_id)
            .bind(detail.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_booking_item(&self, item: &BookingItem) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO booking_items (
                booking_item_id, booking_id, item_type, item_sequence,
                flight_booking_id, hotel_booking_id, item_price, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
            .bind(item.booking_item_id)
            .bind(item.booking_id)
            .bind(item.item_type.to_string())
            .bind(item.item_sequence)
            .bind(item.flight_booking_id)
            .bind(item.hotel_booking_id)
            .bind(item.item_price)
            .bind(item.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, Error> {
        let row = sqlx::query(
            r#"
            SELECT booking_id, user_id, booking_reference, status, payment_status,
                   total_amount, currency, contact_email, contact_phone,
                   chat_session_id, confirmed_at, created_at
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(Booking {
                booking_id: r.try_get("booking_id")?,
                user_id: r.try_get("user_id")?,
                booking_reference: r.try_get("booking_reference")?,
                status: BookingStatus::from(r.try_get::<String, _>("status")?),
                payment_status: PaymentStatus::from(r.try_get::<String, _>("payment_status")?),
                total_amount: r.try_get("total_amount")?,
                currency: r.try_get("currency")?,
                contact_email: r.try_get("contact_email")?,
                contact_phone: r.try_get("contact_phone")?,
                chat_session_id: r.try_get("chat_session_id")?,
                confirmed_at: r.try_get::<Option<DateTime<Utc>>, _>("confirmed_at")?,
                created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn get_items_for_booking(&self, booking_id: Uuid) -> Result<Vec<BookingItem>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT booking_item_id, booking_id, item_type, item_sequence,
                   flight_booking_id, hotel_booking_id, item_price, created_at
            FROM booking_items
            WHERE booking_id = $1
            ORDER BY item_sequence ASC
            "#,
        )
            .bind(booking_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| {
                Ok(BookingItem {
                    booking_item_id: r.try_get("booking_item_id")?,
                    booking_id: r.try_get("booking_id")?,
                    item_type: BookingItemType::from(r.try_get::<String, _>("item_type")?),
                    item_sequence: r.try_get("item_sequence")?,
                    flight_booking_id: r.try_get("flight_booking_id")?,
                    hotel_booking_id: r.try_get("hotel_booking_id")?,
                    item_price: r.try_get("item_price")?,
                    created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
                })
            })
            .collect()
    }
}
