/**
 * Credential Store
 *
 * Queries against the `user` table that touch identity: creation, lookup by
 * email or id, password-hash updates and role changes. Profile listing and
 * editing live in `backend::users::db`.
 *
 * Emails are expected to be normalized (trimmed, lower-cased) by the caller.
 */

use sqlx::SqlitePool;

use crate::shared::{Role, SessionUser, UserProfile};

/// Full `user` row, including the password hash
///
/// Never serialized; convert to `SessionUser` or `UserProfile` before
/// anything leaves the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: String,
}

impl User {
    /// Parsed role; an unrecognized tag degrades to `Role::User`
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or_else(|e| {
            tracing::warn!("User {} has {}, treating as user", self.id, e);
            Role::User
        })
    }

    /// Session snapshot of this row
    pub fn snapshot(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            fname: self.fname.clone(),
            lname: self.lname.clone(),
            email: self.email.clone(),
            role: self.role(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            fname: self.fname.clone(),
            lname: self.lname.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Values for a new row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: Role,
}

const USER_COLUMNS: &str = "id, fname, lname, email, password_hash, avatar, role";

/// Insert a user
///
/// Fails with a unique violation if the email is taken.
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO user (fname, lname, email, password_hash, avatar, role)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&new_user.fname)
    .bind(&new_user.lname)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.avatar)
    .bind(new_user.role.as_str())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM user WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Whether any row has this email
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM user WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Whether a row other than `except_id` has this email
pub async fn email_taken_by_other(
    pool: &SqlitePool,
    email: &str,
    except_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM user WHERE email = ? AND id <> ?")
        .bind(email)
        .bind(except_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Overwrite a password hash; returns false if no such id
pub async fn update_password_hash(
    pool: &SqlitePool,
    id: i64,
    password_hash: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE user SET password_hash = ? WHERE id = ?")
        .bind(password_hash)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Change a role directly in the store
///
/// No endpoint calls this; it backs the admin bootstrap at startup.
/// Existing sessions keep their old snapshot until the user logs in again.
pub async fn set_role(pool: &SqlitePool, id: i64, role: Role) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE user SET role = ? WHERE id = ?")
        .bind(role.as_str())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Number of rows with this email (used to check the uniqueness invariant)
#[cfg(test)]
pub(crate) async fn count_by_email(pool: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
