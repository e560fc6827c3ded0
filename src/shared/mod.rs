//! Shared Module
//!
//! Types and helpers that describe the HTTP contract independently of the
//! server: user views, the role tag, and input normalization.
//!
//! # Overview
//!
//! - **`user`** - `Role`, `SessionUser`, `UserSummary`, `UserProfile`
//! - **`validation`** - trimming, email normalization, id parsing
//! - **`error`** - `SharedError`

/// User views and the role tag
pub mod user;

/// Input normalization helpers
pub mod validation;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use user::{Role, SessionUser, UserProfile, UserSummary};
