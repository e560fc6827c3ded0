/**
 * Authentication Handler Types
 *
 * Request and response bodies for the `/auth` endpoints. Request fields
 * are all optional at the serde level so that an absent or null field is
 * reported as `missing_fields` rather than as a decode error.
 */

use serde::{Deserialize, Serialize};

use crate::shared::validation::deserialize_id;
use crate::shared::SessionUser;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Change-password request for the caller's own account
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

/// Admin password reset for another account
#[derive(Deserialize, Debug, Default)]
pub struct AdminResetRequest {
    /// Accepts a JSON number or a numeric string
    #[serde(default, deserialize_with = "deserialize_id")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub new_password: Option<String>,
}

/// Returned by login, register and me
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub status: String,
    pub user: SessionUser,
}

impl AuthResponse {
    pub fn ok(user: SessionUser) -> Self {
        Self {
            status: "ok".to_string(),
            user,
        }
    }
}

/// Bare `{"status":"ok"}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
