//! User Types
//!
//! Public views of a user account. None of these types carry the password
//! hash; the full database row lives in `backend::auth::users::User` and is
//! never serialized to clients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Coarse permission tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account, the role given at registration
    #[default]
    User,
    /// Administrator, may reset passwords and delete accounts
    Admin,
}

impl Role {
    /// Tag stored in the `role` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(SharedError::unknown_role(other)),
        }
    }
}

/// Snapshot of an account held by the session store
///
/// Captured at login or registration. The role inside is what the auth gate
/// checks, so a role change in the database only takes effect on the next
/// login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Row returned by list and search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub avatar: Option<String>,
}

/// Row returned by read-one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub avatar: Option<String>,
}
