/**
 * Session Store
 *
 * Server-side sessions keyed by an opaque token carried in a cookie. A
 * session holds a `SessionUser` snapshot taken at login; nothing in here
 * reads the `user` table.
 *
 * # Backends
 *
 * - `MemorySessionStore` - process-local map, lost on restart
 * - `SqliteSessionStore` - `session` table in the application database
 *
 * The backend is chosen once at startup (`SESSION_STORE`) and handed to the
 * router as `Arc<dyn SessionStore>`.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::shared::SessionUser;

/// Errors raised by a session backend
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored session is unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Pluggable storage for session snapshots
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a snapshot under a fresh token and return the token
    async fn open(&self, user: SessionUser) -> Result<String, SessionError>;

    /// Snapshot for a token, `None` if unknown or expired
    async fn get(&self, token: &str) -> Result<Option<SessionUser>, SessionError>;

    /// Forget a token; unknown tokens are not an error
    async fn destroy(&self, token: &str) -> Result<(), SessionError>;

    /// Drop every expired session, returning how many were removed
    async fn purge_expired(&self) -> Result<u64, SessionError>;
}

/// Which backend to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionBackend {
    #[default]
    Memory,
    Database,
}

/// Build the configured backend
pub fn build_session_store(
    backend: SessionBackend,
    pool: &SqlitePool,
    ttl: Duration,
) -> Arc<dyn SessionStore> {
    match backend {
        SessionBackend::Memory => Arc::new(MemorySessionStore::new(ttl)),
        SessionBackend::Database => Arc::new(SqliteSessionStore::new(pool.clone(), ttl)),
    }
}

/// Generate an opaque session token (122 random bits, hex encoded)
pub fn new_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Clone)]
struct SessionRecord {
    user: SessionUser,
    expires_at: DateTime<Utc>,
}

/// In-process session map
pub struct MemorySessionStore {
    ttl: Duration,
    entries: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live entries, expired ones included until purged
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn open(&self, user: SessionUser) -> Result<String, SessionError> {
        let token = new_token();
        let record = SessionRecord {
            user,
            expires_at: Utc::now() + self.ttl,
        };
        self.entries.write().await.insert(token.clone(), record);
        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionUser>, SessionError> {
        let now = Utc::now();
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                None => return Ok(None),
                Some(record) if record.expires_at > now => return Ok(Some(record.user.clone())),
                Some(_) => {}
            }
        }
        self.entries.write().await.remove(token);
        Ok(None)
    }

    async fn destroy(&self, token: &str) -> Result<(), SessionError> {
        self.entries.write().await.remove(token);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, SessionError> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, record| record.expires_at > now);
        Ok((before - entries.len()) as u64)
    }
}

/// Sessions persisted in the `session` table
///
/// The snapshot is stored as JSON; `expires_at` is a unix timestamp.
pub struct SqliteSessionStore {
    pool: SqlitePool,
    ttl: Duration,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool, ttl: Duration) -> Self {
        Self { pool, ttl }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn open(&self, user: SessionUser) -> Result<String, SessionError> {
        let token = new_token();
        let data = serde_json::to_string(&user)?;
        let expires_at = (Utc::now() + self.ttl).timestamp();

        sqlx::query("INSERT INTO session (token, data, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(&data)
            .bind(expires_at)
            .execute(&self.pool)
            .await?;

        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionUser>, SessionError> {
        let row: Option<(String, i64)> =
            sqlx::query_as("SELECT data, expires_at FROM session WHERE token = ?")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        let Some((data, expires_at)) = row else {
            return Ok(None);
        };

        if expires_at <= Utc::now().timestamp() {
            self.destroy(token).await?;
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&data)?))
    }

    async fn destroy(&self, token: &str) -> Result<(), SessionError> {
        sqlx::query("DELETE FROM session WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, SessionError> {
        let result = sqlx::query("DELETE FROM session WHERE expires_at <= ?")
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
