//! Startup schema
//!
//! Idempotent DDL issued on every start. There is no migration history;
//! an existing database is left as it is.

use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS user (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        fname TEXT NOT NULL,
        lname TEXT NOT NULL,
        email TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        avatar TEXT,
        role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('user', 'admin'))
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS user_email_unique ON user (email)",
    r#"
    CREATE TABLE IF NOT EXISTS session (
        token TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        expires_at INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS session_expires_at ON session (expires_at)",
];

/// Create the `user` and `session` tables if they are missing
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Schema ensured ({} statements)", SCHEMA.len());
    Ok(())
}
