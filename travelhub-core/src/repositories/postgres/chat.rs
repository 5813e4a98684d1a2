// src/repositories/postgres/chat.rs

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use travelhub_common::models::{ChatMessage, ChatSession, ChatSessionStatus, MessageRole};

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatRepo: Send + Sync {
    async fn insert_chat_session(&self, session: &ChatSession) -> Result<(), Error>;
    async fn insert_chat_message(&self, msg: &ChatMessage) -> Result<(), Error>;
    async fn get_session(&self, session_id: Uuid) -> Result<Option<ChatSession>, Error>;
    async fn get_messages_for_session(&self, session_id: Uuid) -> Result<Vec<ChatMessage>, Error>;
}

#[derive(Clone)]
pub struct PostgresChatRepository {
    pool: Pool<Postgres>,
}

impl PostgresChatRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ChatRepo for PostgresChatRepository {
    async fn insert_chat_session(&self, session: &ChatSession) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO chat_sessions (
                session_id, user_id, title, status, thread_id,
                context, message_count, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
            .bind(session.session_id)
            .bind(session.user_id)
            .bind(&session.title)
            .bind(session.status.to_string())
            .bind(&session.thread_id)
            .bind(&session.context)
            .bind(session.message_count)
            .bind(session.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_chat_message(&self, msg: &ChatMessage) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (
                message_id, session_id, role, content,
                model, tokens_total, latency_ms, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
            .bind(msg.message_id)
            .bind(msg.session_id)
            .bind(msg.role.to_string())
            .bind(&msg.content)
            .bind(&msg.model)
            .bind(msg.tokens_total)
            .bind(msg.latency_ms)
            .bind(msg.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Option<ChatSession>, Error> {
        let row = sqlx::query(
            r#"
            SELECT session_id, user_id, title, status, thread_id,
                   context, message_count, created_at
            FROM chat_sessions
            WHERE session_id = $1
            "#,
        )
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(r) = row {
            Ok(Some(ChatSession {
                session_id: r.try_get("session_id")?,
                user_id: r.try_get("user_id")?,
                title: r.try_get("title")?,
                status: ChatSessionStatus::from(r.try_get::<String, _>("status")?),
                thread_id: r.try_get("thread_id")?,
                context: r.try_get("context")?,
                message_count: r.try_get("message_count")?,
                created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn get_messages_for_session(&self, session_id: Uuid) -> Result<Vec<ChatMessage>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT message_id, session_id, role, content,
                   model, tokens_total, latency_ms, created_at
            FROM chat_messages
            WHERE session_id = $1
            ORDER BY created_at ASC
            "#,
        )
            .bind(session_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| {
                Ok(ChatMessage {
                    message_id: r.try_get("message_id")?,
                    session_id: r.try_get("session_id")?,
                    role: MessageRole::from(r.try_get::<String, _>("role")?),
                    content: r.try_get("content")?,
                    model: r.try_get("model")?,
                    tokens_total: r.try_get("tokens_total")?,
                    latency_ms: r.try_get("latency_ms")?,
                    created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
                })
            })
            .collect()
    }
}
