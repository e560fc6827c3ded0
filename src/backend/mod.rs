//! Backend Module
//!
//! This module contains all server-side code for userdesk: an Axum HTTP
//! server exposing JSON endpoints for accounts and profiles, with
//! session-cookie authentication and two roles.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, schema, application state, startup
//! - **`routes`** - Route groups, guards, fallbacks and layers
//! - **`auth`** - Credential store, password hashing, sessions, auth gate
//! - **`users`** - Profile list, search, read, create, update and delete
//! - **`middleware`** - Session loading, route guards and extractors
//! - **`error`** - `ApiError` and its JSON response
//! - **`extract`** - JSON and query extractors that reject with `ApiError`
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── users/          - Profile handlers
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! └── extract.rs      - Request extractors
//! ```
//!
//! # Request Flow
//!
//! 1. CORS answers preflights; everything else continues
//! 2. `load_session` resolves the cookie into a `SessionContext`
//! 3. The route group's guard (if any) checks the access level
//! 4. The handler extracts its body, talks to SQLite, returns JSON
//! 5. Errors become `{"status":"error","message":"<code>"}`
//!
//! # Example
//!
//! ```rust,no_run
//! use userdesk::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and sessions
pub mod auth;

/// Profile management
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Request extractors
pub mod extract;

/// Re-export commonly used types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
