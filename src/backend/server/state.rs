/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The SQLite connection pool
 * - The session store, behind `Arc<dyn SessionStore>`
 * - The bcrypt password hasher
 * - Cookie settings
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the pool and the hasher
 * are reference-counted internally, the session store is an `Arc` and
 * guards its own data.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let middleware and handlers take only the
 * piece they need, e.g. `State(store): State<Arc<dyn SessionStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::cookie::CookieSettings;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionStore;

/// Application state shared by every request
#[derive(Clone)]
pub struct AppState {
    /// SQLite pool holding the `user` (and optionally `session`) table
    pub db: SqlitePool,

    /// Session backend chosen at startup
    pub sessions: Arc<dyn SessionStore>,

    /// bcrypt wrapper configured with the startup cost
    pub hasher: PasswordHasher,

    /// Attributes applied to the session cookie
    pub cookies: CookieSettings,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        sessions: Arc<dyn SessionStore>,
        hasher: PasswordHasher,
        cookies: CookieSettings,
    ) -> Self {
        Self {
            db,
            sessions,
            hasher,
            cookies,
        }
    }
}

/// Implement FromRef for SqlitePool
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Implement FromRef for the session store
///
/// Used by the session-loading middleware, which needs nothing else.
impl FromRef<AppState> for Arc<dyn SessionStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher.clone()
    }
}

impl FromRef<AppState> for CookieSettings {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookies
    }
}
