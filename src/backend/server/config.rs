/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables (after `.env` has been applied by the binary).
 *
 * # Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `DATABASE_URL` | `sqlite://userdesk.db?mode=rwc` |
 * | `SERVER_HOST` | `0.0.0.0` |
 * | `SERVER_PORT` | `3000` |
 * | `SESSION_STORE` | `memory` (or `database`) |
 * | `SESSION_TTL_SECS` | `86400` |
 * | `SESSION_PURGE_INTERVAL_SECS` | `300` |
 * | `COOKIE_SECURE` | `false` |
 * | `BCRYPT_COST` | `12` (4..=31) |
 * | `ADMIN_EMAIL`, `ADMIN_PASSWORD`, `ADMIN_FNAME`, `ADMIN_LNAME` | unset |
 *
 * # Error Handling
 *
 * Unlike optional services, a malformed value stops startup with a
 * `ConfigError` naming the variable. Unset variables fall back to defaults.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::sessions::SessionBackend;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://userdesk.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;
pub const DEFAULT_PURGE_INTERVAL_SECS: u64 = 300;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{var} is required when {because} is set")]
    Missing {
        var: &'static str,
        because: &'static str,
    },
}

/// Optional administrator created or promoted at startup
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub fname: String,
    pub lname: String,
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub session_backend: SessionBackend,
    pub session_ttl: chrono::Duration,
    pub purge_interval: Duration,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
    pub admin: Option<AdminBootstrap>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_backend: SessionBackend::Memory,
            session_ttl: chrono::Duration::seconds(DEFAULT_SESSION_TTL_SECS),
            purge_interval: Duration::from_secs(DEFAULT_PURGE_INTERVAL_SECS),
            cookie_secure: false,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            admin: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let session_ttl_secs: i64 = parse_var(&get, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        if session_ttl_secs <= 0 {
            return Err(invalid("SESSION_TTL_SECS", session_ttl_secs, "must be positive"));
        }

        let purge_secs: u64 = parse_var(&get, "SESSION_PURGE_INTERVAL_SECS", DEFAULT_PURGE_INTERVAL_SECS)?;
        if purge_secs == 0 {
            return Err(invalid("SESSION_PURGE_INTERVAL_SECS", purge_secs, "must be positive"));
        }

        let bcrypt_cost: u32 = parse_var(&get, "BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(invalid("BCRYPT_COST", bcrypt_cost, "must be between 4 and 31"));
        }

        let session_backend = match get("SESSION_STORE").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("memory") => SessionBackend::Memory,
            Some("database") => SessionBackend::Database,
            Some(other) => {
                return Err(invalid("SESSION_STORE", other, "expected memory or database"));
            }
        };

        let cookie_secure = match get("COOKIE_SECURE").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("false") | Some("0") | Some("no") => false,
            Some("true") | Some("1") | Some("yes") => true,
            Some(other) => return Err(invalid("COOKIE_SECURE", other, "expected true or false")),
        };

        let admin = match get("ADMIN_EMAIL") {
            None => None,
            Some(email) => Some(AdminBootstrap {
                email,
                password: get("ADMIN_PASSWORD").ok_or(ConfigError::Missing {
                    var: "ADMIN_PASSWORD",
                    because: "ADMIN_EMAIL",
                })?,
                fname: get("ADMIN_FNAME").unwrap_or_else(|| "Admin".to_string()),
                lname: get("ADMIN_LNAME").unwrap_or_else(|| "User".to_string()),
            }),
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            host: get("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_var(&get, "SERVER_PORT", defaults.port)?,
            session_backend,
            session_ttl: chrono::Duration::seconds(session_ttl_secs),
            purge_interval: Duration::from_secs(purge_secs),
            cookie_secure,
            bcrypt_cost,
            admin,
        })
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn invalid(var: &'static str, value: impl ToString, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    }
}

fn parse_var<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            var,
            value: raw,
            reason: "not a number in range",
        }),
    }
}

/// Open the SQLite pool
///
/// An in-memory database lives only as long as its connection, so for
/// `:memory:` URLs the pool is pinned to one connection that never expires.
///
/// # Example
///
/// ```rust,no_run
/// use userdesk::backend::server::config::connect_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = connect_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::info!("Database connection pool created for {}", database_url);
    Ok(pool)
}
