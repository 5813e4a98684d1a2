// File: travelhub-common/src/models/oauth.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Facebook,
    Apple,
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OAuthProvider::Google => write!(f, "google"),
            OAuthProvider::Facebook => write!(f, "facebook"),
            OAuthProvider::Apple => write!(f, "apple"),
        }
    }
}

impl FromStr for OAuthProvider {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "facebook" => Ok(OAuthProvider::Facebook),
            "apple" => Ok(OAuthProvider::Apple),
            _ => Err(format!("Unknown OAuth provider: {}", s)),
        }
    }
}

impl From<String> for OAuthProvider {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(OAuthProvider::Google)
    }
}

/// A third-party login linked to a user. `(provider, provider_user_id)` is
/// unique per user.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OAuthAccount {
    pub oauth_account_id: Uuid,
    pub user_id: Uuid,
    pub provider: OAuthProvider,
    pub provider_user_id: String,
    pub provider_email: Option<String>,
    pub created_at: DateTime<Utc>,
}
