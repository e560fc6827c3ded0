/**
 * API Error Types
 *
 * Every failure a handler can report. Each variant owns a stable string
 * code that clients match on, and an HTTP status.
 *
 * # Error Categories
 *
 * ## Validation (400)
 * - `MissingFields`, `InvalidBody`, `WeakPassword`, `PasswordTooLong`,
 *   `EmailExists`
 *
 * ## Authentication (401)
 * - `Unauthorized`, `InvalidCredentials`, `InvalidCurrentPassword`
 *
 * ## Authorization (403)
 * - `Forbidden`
 *
 * ## Not found (404) / method (405)
 * - `UserNotFound`, `NotFound`, `MethodNotAllowed`
 *
 * ## Internal (500)
 * - `Internal`: store, hashing or runtime failures. The detail is logged and
 *   never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::SessionError;

/// API error returned by handlers, guards and extractors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is absent or blank
    #[error("missing required fields")]
    MissingFields,

    /// The body or query string could not be decoded
    #[error("malformed request: {0}")]
    InvalidBody(String),

    /// Registration or profile update hit an email already in use
    #[error("email already registered")]
    EmailExists,

    /// Unknown email or wrong password; the two are deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// New password fails the length policy
    #[error("password too short")]
    WeakPassword,

    /// Password longer than bcrypt can hash without truncating
    #[error("password too long")]
    PasswordTooLong,

    /// Change-password with a current password that does not verify
    #[error("current password does not verify")]
    InvalidCurrentPassword,

    /// Target user id does not exist
    #[error("user not found")]
    UserNotFound,

    /// No session
    #[error("authentication required")]
    Unauthorized,

    /// Session present but role insufficient
    #[error("insufficient role")]
    Forbidden,

    /// No route for the path
    #[error("route not found")]
    NotFound,

    /// Path exists, method does not
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Unexpected failure; the message is for logs only
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build an internal error from any displayable source
    pub fn internal(source: impl std::fmt::Display) -> Self {
        Self::Internal(source.to_string())
    }

    /// Map a failed write to the `user` table
    ///
    /// A unique-index violation can only come from the `email` column, so it
    /// becomes `EmailExists`; anything else is internal.
    pub fn from_user_write(err: sqlx::Error) -> Self {
        let unique = matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation());
        if unique {
            Self::EmailExists
        } else {
            Self::from(err)
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::InvalidBody(_)
            | Self::EmailExists
            | Self::WeakPassword
            | Self::PasswordTooLong => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials | Self::InvalidCurrentPassword => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code placed in the `message` field of the response
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidBody(_) => "invalid_body",
            Self::EmailExists => "email_exists",
            Self::InvalidCredentials => "invalid_credentials",
            Self::WeakPassword => "weak_password",
            Self::PasswordTooLong => "password_too_long",
            Self::InvalidCurrentPassword => "invalid_current_password",
            Self::UserNotFound => "user_not_found",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::Internal(_) => "server_error",
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(format!("database: {}", err))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        match err {
            bcrypt::BcryptError::Truncation(_) => Self::PasswordTooLong,
            other => Self::Internal(format!("bcrypt: {}", other)),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking task: {}", err))
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self::Internal(format!("session store: {}", err))
    }
}
