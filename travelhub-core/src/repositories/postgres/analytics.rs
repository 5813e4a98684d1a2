// src/repositories/postgres/analytics.rs

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use travelhub_common::models::AnalyticsEvent;

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AnalyticsRepo: Send + Sync {
    /// Insert a new `AnalyticsEvent`.
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<(), Error>;

    async fn count_events_for_user(&self, user_id: Uuid) -> Result<i64, Error>;
}

#[derive(Clone)]
pub struct PostgresAnalyticsRepository {
    pool: Pool<Postgres>,
}

impl PostgresAnalyticsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AnalyticsRepo for PostgresAnalyticsRepository {
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO analytics_events (
                event_id, event_type, user_id, session_id, event_data, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
            .bind(event.event_id)
            .bind(&event.event_type)
            .bind(event.user_id)
            .bind(&event.session_id)
            .bind(&event.event_data)
            .bind(event.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_events_for_user(&self, user_id: Uuid) -> Result<i64, Error> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS event_count
            FROM analytics_events
            WHERE user_id = $1
            "#,
        )
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("event_count")?)
    }
}
