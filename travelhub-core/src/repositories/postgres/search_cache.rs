// src/repositories/postgres/search_cache.rs

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};

use travelhub_common::models::{FlightSearchCache, HotelSearchCache};

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchCacheRepo: Send + Sync {
    async fn insert_flight_cache(&self, entry: &FlightSearchCache) -> Result<(), Error>;
    async fn insert_hotel_cache(&self, entry: &HotelSearchCache) -> Result<(), Error>;
    async fn get_flight_cache_by_hash(&self, search_hash: &str)
                                      -> Result<Option<FlightSearchCache>, Error>;
    async fn get_hotel_cache_by_hash(&self, search_hash: &str)
                                     -> Result<Option<HotelSearchCache>, Error>;
}

#[derive(Clone)]
pub struct PostgresSearchCacheRepository {
    pool: Pool<Postgres>,
}

impl PostgresSearchCacheRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SearchCacheRepo for PostgresSearchCacheRepository {
    async fn insert_flight_cache(&self, entry: &FlightSearchCache) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO flight_search_caches (
                cache_id, search_hash, origin, destination,
                departure_date, return_date, passengers_adults, cabin_class,
                results, result_count, expires_at, hit_count, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
            .bind(entry.cache_id)
            .bind(&entry.search_hash)
            .bind(&entry.origin)
            .bind(&entry.destination)
            .bind(entry.departure_date)
            .bind(entry.return_date)
            .bind(entry.passengers_adults)
            .bind(&entry.cabin_class)
            .bind(&entry.results)
            .bind(entry.result_count)
            .bind(entry.expires_at)
            .bind(entry.hit_count)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_hotel_cache(&self, entry: &HotelSearchCache) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO hotel_search_caches (
                cache_id, search_hash, location, check_in, check_out,
                guests, rooms, results, result_count,
                expires_at, hit_count, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
            .bind(entry.cache_id)
            .bind(&entry.search_hash)
            .bind(&entry.location)
            .bind(entry.check_in)
            .bind(entry.check_out)
            .bind(entry.guests)
            .bind(entry.rooms)
            .bind(&entry.results)
            .bind(entry.result_count)
            .bind(entry.expires_at)
            .bind(entry.hit_count)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_flight_cache_by_hash(
        &self,
        search_hash: &str,
    ) -> Result<Option<FlightSearchCache>, Error> {
        let row = sqlx::query(
            r#"
            SELECT cache_id, search_hash, origin, destination,
                   departure_date, return_date, passengers_adults, cabin_class,
                   results, result_count, expires_at, hit_count, created_at
            FROM flight_search_caches
            WHERE search_hash = $1
            "#,
        )
            .bind(search_hash)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(FlightSearchCache {
                cache_id: r.try_get("cache_id")?,
                search_hash: r.try_get("search_hash")?,
                origin: r.try_get("origin")?,
                destination: r.try_get("destination")?,
                departure_date: r.try_get("departure_date")?,
                return_date: r.try_get("return_date")?,
                passengers_adults: r.try_get("passengers_adults")?,
                cabin_class: r.try_get("cabin_class")?,
                results: r.try_get("results")?,
                result_count: r.try_get("result_count")?,
                expires_at: r.try_get::<DateTime<Utc>, _>("expires_at")?,
                hit_count: r.try_get("hit_count")?,
                created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn get_hotel_cache_by_hash(
        &self,
        search_hash: &str,
    ) -> Result<Option<HotelSearchCache>, Error> {
        let row = sqlx::query(
            r#"
            SELECT cache_id, search_hash, location, check_in, check_out,
                   guests, rooms, results, result_count,
                   expires_at, hit_count, created_at
            FROM hotel_search_caches
            WHERE search_hash = $1
            "#,
        )
            .bind(search_hash)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(HotelSearchCache {
                cache_id: r.try_get("cache_id")?,
                search_hash: r.try_get("search_hash")?,
                location: r.try_get("location")?,
                check_in: r.try_get("check_in")?,
                check_out: r.try_get("check_out")?,
                guests: r.try_get("guests")?,
                rooms: r.try_get("rooms")?,
                results: r.try_get("results")?,
                result_count: r.try_get("result_count")?,
                expires_at: r.try_get::<DateTime<Utc>, _>("expires_at")?,
                hit_count: r.try_get("hit_count")?,
                created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }
}
