//! userdesk - Main Library
//!
//! userdesk is a user-management HTTP/JSON service: account registration,
//! login with server-side sessions carried in an HttpOnly cookie, two roles
//! (`admin` and `user`), and profile list/search/read/update/delete
//! endpoints backed by a single SQLite `user` table.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that describe the HTTP contract
//!   - `Role`, `SessionUser`, `UserSummary`, `UserProfile`
//!   - Input normalization helpers
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, guards and middleware
//!   - Credential store, bcrypt hashing, session store
//!   - Profile handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use userdesk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Handlers return `Result<_, ApiError>`; every failure is rendered as
//!   `{"status":"error","message":"<code>"}` with a matching status
//! - Infrastructure failures are logged with `tracing` and reported as
//!   `server_error` without detail
//!
//! # See Also
//!
//! - [DESIGN.md](../DESIGN.md) - Design notes

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
