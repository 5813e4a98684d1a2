// src/repositories/postgres/user.rs

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use travelhub_common::models::{User, UserRole, UserStatus};

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), Error>;
    async fn get(&self, id: Uuid) -> Result<Option<User>, Error>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, Error>;
    async fn list_all(&self) -> Result<Vec<User>, Error>;
}

pub struct UserRepository {
    pub pool: Pool<Postgres>,
}

impl UserRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn row_to_user(r: &sqlx::postgres::PgRow) -> Result<User, Error> {
    Ok(User {
        user_id: r.try_get("user_id")?,
        email: r.try_get("email")?,
        full_name: r.try_get("full_name")?,
        role: UserRole::from(r.try_get::<String, _>("role")?),
        status: UserStatus::from(r.try_get::<String, _>("status")?),
        data_processing_consent: r.try_get("data_processing_consent")?,
        consent_granted_at: r.try_get::<Option<DateTime<Utc>>, _>("consent_granted_at")?,
        created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait::async_trait]
impl UserRepo for UserRepository {
    async fn create(&self, user: &User) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id, email, full_name, role, status,
                data_processing_consent, consent_granted_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
            .bind(user.user_id)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(user.role.to_string())
            .bind(user.status.to_string())
            .bind(user.data_processing_consent)
            .bind(user.consent_granted_at)
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, Error> {
        let row = sqlx::query(
            r#"
            SELECT user_id, email, full_name, role, status,
                   data_processing_consent, consent_granted_at, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(row_to_user(&r)?))
        } else {
            Ok(None)
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let row = sqlx::query(
            r#"
            SELECT user_id, email, full_name, role, status,
                   data_processing_consent, consent_granted_at, created_at
            FROM users
            WHERE email = $1
            "#,
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(row_to_user(&r)?))
        } else {
            Ok(None)
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, email, full_name, role, status,
                   data_processing_consent, consent_granted_at, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_user).collect()
    }
}
