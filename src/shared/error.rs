//! Shared Error Types
//!
//! Errors raised while parsing or validating the data types that cross the
//! HTTP boundary. The backend converts them into API error codes.
//!
//! # Error Categories
//!
//! - `UnknownRole` - a stored or submitted role tag is not `user`/`admin`
//!
//! # Usage
//!
//! ```rust
//! use userdesk::shared::error::SharedError;
//!
//! let error = SharedError::unknown_role("root");
//! ```
use thiserror::Error;

/// Shared error types raised by the domain types in this module
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Role tag outside the known set
    #[error("Unknown role: {value}")]
    UnknownRole {
        /// The rejected tag
        value: String,
    },
}

impl SharedError {
    /// Create a new unknown-role error
    pub fn unknown_role(value: impl Into<String>) -> Self {
        Self::UnknownRole {
            value: value.into(),
        }
    }
}
