// File: travelhub-common/src/models/cache.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Snapshot of a prior flight search, keyed by a hash of the query
/// parameters. `results` is the raw provider result array.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlightSearchCache {
    pub cache_id: Uuid,
    pub search_hash: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers_adults: i32,
    pub cabin_class: String,
    pub results: Value,
    pub result_count: i32,
    pub expires_at: DateTime<Utc>,
    pub hit_count: i32,
    pub created_at: DateTime<Utc>,
}

impl FlightSearchCache {
    pub fn result_count_matches(&self) -> bool {
        self.results.as_array().map(|a| a.len()) == Some(self.result_count as usize)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotelSearchCache {
    pub cache_id: Uuid,
    pub search_hash: String,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub rooms: i32,
    pub results: Value,
    pub result_count: i32,
    pub expires_at: DateTime<Utc>,
    pub hit_count: i32,
    pub created_at: DateTime<Utc>,
}

impl HotelSearchCache {
    pub fn result_count_matches(&self) -> bool {
        self.results.as_array().map(|a| a.len()) == Some(self.result_count as usize)
    }
}
