//! Database operations for user profiles
//!
//! Listing, searching, reading, editing and deleting rows of the `user`
//! table. None of these queries select `password_hash`.

use sqlx::SqlitePool;

use crate::shared::validation::escape_like;
use crate::shared::{UserProfile, UserSummary};

/// Profile values written by an update
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Every user in insertion order
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT id, fname, lname, avatar FROM user ORDER BY id ASC")
        .fetch_all(pool)
        .await
}

/// Every user, newest first
pub async fn list_users_newest_first(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT id, fname, lname, avatar FROM user ORDER BY id DESC")
        .fetch_all(pool)
        .await
}

/// Substring match on first or last name
///
/// A keyword made only of digits also matches the id exactly. Wildcards in
/// the keyword are matched literally.
pub async fn search_users(pool: &SqlitePool, keyword: &str) -> Result<Vec<UserSummary>, sqlx::Error> {
    let pattern = format!("%{}%", escape_like(keyword));
    // Too many digits for an i64 binds NULL, which matches no id
    let id_eq = keyword
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| keyword.parse::<i64>().ok())
        .flatten();

    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, fname, lname, avatar
        FROM user
        WHERE id = ?
           OR fname LIKE ? ESCAPE '\'
           OR lname LIKE ? ESCAPE '\'
        ORDER BY id ASC
        "#,
    )
    .bind(id_eq)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await
}

/// Summary row for one id
pub async fn get_summary(pool: &SqlitePool, id: i64) -> Result<Option<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT id, fname, lname, avatar FROM user WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Profile including email
pub async fn get_profile(pool: &SqlitePool, id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>("SELECT id, fname, lname, email, avatar FROM user WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrite every profile field; returns false if no such id
pub async fn update_profile(pool: &SqlitePool, update: &ProfileUpdate) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE user
        SET fname = ?, lname = ?, email = ?, avatar = ?
        WHERE id = ?
        "#,
    )
    .bind(&update.fname)
    .bind(&update.lname)
    .bind(&update.email)
    .bind(&update.avatar)
    .bind(update.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a row; returns false if no such id
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
