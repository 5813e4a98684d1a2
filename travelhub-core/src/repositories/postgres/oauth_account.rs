// src/repositories/postgres/oauth_account.rs

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use travelhub_common::models::{OAuthAccount, OAuthProvider};

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait OAuthAccountRepo: Send + Sync {
    async fn create(&self, account: &OAuthAccount) -> Result<(), Error>;
    async fn get_all_for_user(&self, user_id: Uuid) -> Result<Vec<OAuthAccount>, Error>;
}

pub struct OAuthAccountRepository {
    pool: Pool<Postgres>,
}

impl OAuthAccountRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl OAuthAccountRepo for OAuthAccountRepository {
    async fn create(&self, account: &OAuthAccount) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO oauth_accounts (
                oauth_account_id, user_id, provider,
                provider_user_id, provider_email, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
            .bind(account.oauth_account_id)
            .bind(account.user_id)
            .bind(account.provider.to_string())
            .bind(&account.provider_user_id)
            .bind(&account.provider_email)
            .bind(account.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_all_for_user(&self, user_id: Uuid) -> Result<Vec<OAuthAccount>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT oauth_account_id, user_id, provider,
                   provider_user_id, provider_email, created_at
            FROM oauth_accounts
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| {
                Ok(OAuthAccount {
                    oauth_account_id: r.try_get("oauth_account_id")?,
                    user_id: r.try_get("user_id")?,
                    provider: OAuthProvider::from(r.try_get::<String, _>("provider")?),
                    provider_user_id: r.try_get("provider_user_id")?,
                    provider_email: r.try_get("provider_email")?,
                    created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
                })
            })
            .collect()
    }
}
