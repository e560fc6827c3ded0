//! Authentication Handlers Module
//!
//! HTTP handlers for the `/auth/*` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /auth/register
//! ├── login.rs     - POST /auth/login
//! ├── logout.rs    - POST /auth/logout
//! ├── me.rs        - GET  /auth/me
//! └── password.rs  - POST /auth/change_password, /auth/admin_reset_password
//! ```
//!
//! # Credential Lifecycle
//!
//! 1. **Register**: fields validated → email checked → bcrypt hash → row
//!    inserted with role `user` → session opened
//! 2. **Login**: email looked up → bcrypt verify → session opened
//! 3. **Change password**: session required → current verified → rehash
//! 4. **Admin reset**: admin session required → target exists → rehash
//! 5. **Logout**: session destroyed, cookie cleared

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod me;

/// Password change and reset handlers
pub mod password;

pub use types::{
    AdminResetRequest, AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
    StatusResponse,
};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use password::{admin_reset_password, change_password};
pub use register::register;
