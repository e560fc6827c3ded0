//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallbacks and layers
//! ├── auth_routes.rs  - /auth/* endpoints
//! └── user_routes.rs  - /users/* endpoints
//! ```
//!
//! # Access Levels
//!
//! | Route | Gate |
//! |---|---|
//! | `POST /auth/register`, `/auth/login`, `/auth/logout` | none |
//! | `GET /auth/me`, `POST /auth/change_password` | session |
//! | `GET /users/read`, `/users/readone`, `/users/search` | session |
//! | `PATCH /users/update` | session (owner or admin, checked in handler) |
//! | `POST /auth/admin_reset_password` | admin |
//! | `POST /users/create`, `DELETE /users/delete` | admin |
//!
//! # Example
//!
//! ```rust,no_run
//! use userdesk::backend::routes::create_router;
//! use userdesk::backend::server::{build_state, connect_database, ensure_schema, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::default();
//! let pool = connect_database("sqlite::memory:").await?;
//! ensure_schema(&pool).await?;
//! let router = create_router(build_state(pool, &config).await?);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// Profile routes
pub mod user_routes;

pub use router::create_router;
