/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and ensure the schema
 * 2. Build the session store, password hasher and cookie settings
 * 3. Create or promote the bootstrap admin, if configured
 * 4. Start the periodic session purge
 * 5. Create and configure the router
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::cookie::CookieSettings;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{build_session_store, SessionStore};
use crate::backend::auth::users::{create_user, get_user_by_email, set_role, NewUser};
use crate::backend::error::ApiError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, AdminBootstrap, ConfigError, ServerConfig};
use crate::backend::server::schema::ensure_schema;
use crate::backend::server::state::AppState;
use crate::shared::validation::normalize_email;
use crate::shared::Role;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("admin bootstrap failed: {0}")]
    Bootstrap(#[from] ApiError),

    #[error("password hasher setup failed: {0}")]
    Hasher(ApiError),
}

/// Build `AppState` around an open pool
///
/// The schema must already exist. The hasher's dummy hash is computed here
/// so the first unknown-email login costs the same as every later one.
///
/// # Errors
///
/// Fails if bcrypt rejects the configured cost.
pub async fn build_state(db: sqlx::SqlitePool, config: &ServerConfig) -> Result<AppState, StartupError> {
    let sessions = build_session_store(config.session_backend, &db, config.session_ttl);
    let hasher = PasswordHasher::new(config.bcrypt_cost)
        .await
        .map_err(StartupError::Hasher)?;
    Ok(AppState::new(
        db,
        sessions,
        hasher,
        CookieSettings {
            secure: config.cookie_secure,
        },
    ))
}

/// Create the configured admin, or promote the existing row with that email
///
/// An existing account keeps its password.
pub async fn bootstrap_admin(state: &AppState, admin: &AdminBootstrap) -> Result<(), ApiError> {
    let email = normalize_email(Some(&admin.email)).ok_or(ApiError::MissingFields)?;

    if let Some(existing) = get_user_by_email(&state.db, &email).await? {
        if existing.role() != Role::Admin {
            set_role(&state.db, existing.id, Role::Admin).await?;
            tracing::warn!("Promoted {} (id {}) to admin", email, existing.id);
        } else {
            tracing::info!("Bootstrap admin {} already present", email);
        }
        return Ok(());
    }

    let password_hash = state.hasher.hash(&admin.password).await?;
    let user = create_user(
        &state.db,
        NewUser {
            fname: admin.fname.clone(),
            lname: admin.lname.clone(),
            email,
            password_hash,
            avatar: None,
            role: Role::Admin,
        },
    )
    .await
    .map_err(ApiError::from_user_write)?;

    tracing::info!("Created bootstrap admin {} (id {})", user.email, user.id);
    Ok(())
}

/// Purge expired sessions on a fixed interval for the life of the process
pub fn spawn_session_purge(sessions: Arc<dyn SessionStore>, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match sessions.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!("Purged {} expired sessions", removed),
                Err(e) => tracing::error!("Session purge failed: {}", e),
            }
        }
    })
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened, the schema cannot be created,
/// or the bootstrap admin cannot be written.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing userdesk backend server");

    let db = connect_database(&config.database_url).await?;
    ensure_schema(&db).await?;

    let state = build_state(db, config).await?;
    tracing::info!(
        "State ready: {:?} session store, ttl {}s, bcrypt cost {}",
        config.session_backend,
        config.session_ttl.num_seconds(),
        state.hasher.cost()
    );

    if let Some(admin) = &config.admin {
        bootstrap_admin(&state, admin).await?;
    }

    spawn_session_purge(state.sessions.clone(), config.purge_interval);

    let app = create_router(state);
    tracing::info!("Router configured with periodic session purge");

    Ok(app)
}
