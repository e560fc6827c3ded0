//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! # Architecture
//!
//! - **`session`** - resolves the session cookie into a `SessionContext`
//! - **`auth`** - route guards (`require_login`, `require_admin_role`) and
//!   the `Session` / `AuthUser` / `AdminUser` extractors

pub mod auth;
pub mod session;

pub use auth::{require_admin_role, require_login, AdminUser, AuthUser, Session};
pub use session::load_session;
