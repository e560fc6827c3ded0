//! Authentication Module
//!
//! Credentials, sessions and the auth gate.
//!
//! # Architecture
//!
//! - **`users`** - credential store: the `user` row and identity queries
//! - **`password`** - bcrypt hashing and the length policy
//! - **`sessions`** - `SessionStore` trait and its memory / SQLite backends
//! - **`cookie`** - the session cookie
//! - **`gate`** - anonymous / authenticated / admin classification
//! - **`handlers`** - HTTP handlers for `/auth/*`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── users.rs     - Credential store
//! ├── password.rs  - Password hasher
//! ├── sessions.rs  - Session store
//! ├── cookie.rs    - Session cookie helpers
//! ├── gate.rs      - Auth gate
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and verified with
//!   bcrypt, never compared as strings
//! - Session tokens are opaque and random; the cookie is HttpOnly
//! - Login failures return one code whether the email exists or not
//! - Authorization uses the session snapshot taken at login

/// Credential store
pub mod users;

/// Password hashing
pub mod password;

/// Session storage
pub mod sessions;

/// Session cookie
pub mod cookie;

/// Auth gate
pub mod gate;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use gate::{current_session, require_admin, require_authenticated, SessionContext};
pub use handlers::{admin_reset_password, change_password, get_me, login, logout, register};
pub use password::PasswordHasher;
pub use sessions::{MemorySessionStore, SessionBackend, SessionStore, SqliteSessionStore};
