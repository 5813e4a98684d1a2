// File: travelhub-common/src/models/chat.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "lowercase")]
pub enum ChatSessionStatus {
    Active,
    Archived,
}

impl fmt::Display for ChatSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatSessionStatus::Active => write!(f, "active"),
            ChatSessionStatus::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for ChatSessionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ChatSessionStatus::Active),
            "archived" => Ok(ChatSessionStatus::Archived),
            _ => Err(format!("Unknown chat session status: {}", s)),
        }
    }
}

impl From<String> for ChatSessionStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(ChatSessionStatus::Active)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Ai,
    System,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Ai => write!(f, "ai"),
            MessageRole::System => write!(f, "system"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "ai" => Ok(MessageRole::Ai),
            "system" => Ok(MessageRole::System),
            _ => Err(format!("Unknown message role: {}", s)),
        }
    }
}

impl From<String> for MessageRole {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(MessageRole::User)
    }
}

/// One assistant conversation. `thread_id` is the handle the AI backend
/// assigned; `context` is a free-form JSON document whose shape varies per
/// session.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatSession {
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub status: ChatSessionStatus,
    pub thread_id: String,
    pub context: Value,
    pub message_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub model: Option<String>,
    pub tokens_total: Option<i32>,
    pub latency_ms: Option<i32>,
    pub created_at: DateTime<Utc>,
}
