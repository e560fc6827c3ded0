//! Backend Error Module
//!
//! Error type shared by every handler and guard, and its HTTP rendering.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError and its status/code mapping
//! └── conversion.rs - IntoResponse and extractor-rejection conversions
//! ```
//!
//! Every failure renders as `{"status":"error","message":"<code>"}`.
//! Internal failures are logged with their detail and rendered as
//! `server_error`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
