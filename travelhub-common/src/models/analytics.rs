// File: travelhub-common/src/models/analytics.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single tracked frontend/backend event. `session_id` is the web session
/// cookie, not a chat session.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyticsEvent {
    pub event_id: Uuid,
    pub event_type: String,
    pub user_id: Option<Uuid>,
    pub session_id: Option<String>,
    pub event_data: Option<Value>,
    pub created_at: DateTime<Utc>,
}
