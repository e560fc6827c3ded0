//! Profile HTTP Handlers
//!
//! Thin glue between the auth gate and `users::db`. Route groups apply the
//! session guards; the extractors here hand the caller's snapshot to each
//! handler and enforce the same level if a handler is mounted on its own.

use axum::{extract::State, response::Json};

use crate::backend::auth::password::check_policy;
use crate::backend::auth::users::{create_user as insert_user, email_exists, email_taken_by_other, NewUser};
use crate::backend::auth::handlers::StatusResponse;
use crate::backend::error::ApiError;
use crate::backend::extract::{ApiJson, ApiQuery};
use crate::backend::middleware::{AdminUser, AuthUser};
use crate::backend::server::state::AppState;
use crate::shared::validation::{normalize_email, optional_text, parse_id, required_password, required_text};
use crate::shared::{Role, UserProfile, UserSummary};

use super::db::{self, ProfileUpdate};
use super::types::{
    CreateUserRequest, CreatedUserResponse, DeleteUserRequest, ReadOneQuery, SearchFilter,
    SearchQuery, SearchResponse, UpdateUserRequest,
};

/// `GET /users/read`: every user's summary in id order
pub async fn read_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = db::list_users(&state.db).await?;
    tracing::debug!("User {} listed {} users", caller.id, users.len());
    Ok(Json(users))
}

/// `GET /users/readone?id=`
///
/// # Errors
///
/// * `400 missing_fields` - id absent or not a positive integer
/// * `404 user_not_found` - no such row
pub async fn read_one(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    ApiQuery(query): ApiQuery<ReadOneQuery>,
) -> Result<Json<UserProfile>, ApiError> {
    let id = query
        .id
        .as_deref()
        .and_then(parse_id)
        .ok_or(ApiError::MissingFields)?;

    let profile = db::get_profile(&state.db, id)
        .await?
        .ok_or(ApiError::UserNotFound)?;
    Ok(Json(profile))
}

/// `GET /users/search?keyword=` or `?id=`
pub async fn search_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = SearchFilter::from_query(&query);
    tracing::debug!("User {} searching with {:?}", caller.id, filter);

    let data = match filter {
        SearchFilter::Keyword(keyword) => db::search_users(&state.db, &keyword).await?,
        SearchFilter::Id(Some(id)) => db::get_summary(&state.db, id).await?.into_iter().collect(),
        SearchFilter::Id(None) => Vec::new(),
        SearchFilter::All => db::list_users_newest_first(&state.db).await?,
    };

    Ok(Json(SearchResponse::ok(data)))
}

/// `POST /users/create`: admin creates a `user`-role account
///
/// Without a password the account gets an unusable random hash and stays
/// locked until an admin reset.
///
/// # Errors
///
/// * `400 missing_fields` - fname, lname or email absent
/// * `400 weak_password` - a password was given but is too short
/// * `400 email_exists` - the email is already registered
pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<Json<CreatedUserResponse>, ApiError> {
    let fname = required_text(request.fname.as_deref());
    let lname = required_text(request.lname.as_deref());
    let email = normalize_email(request.email.as_deref());
    let (Some(fname), Some(lname), Some(email)) = (fname, lname, email) else {
        return Err(ApiError::MissingFields);
    };
    let password = required_password(request.password.as_deref());
    if let Some(password) = &password {
        check_policy(password)?;
    }

    if email_exists(&state.db, &email).await? {
        tracing::warn!("Admin {} tried to create existing email {}", admin.id, email);
        return Err(ApiError::EmailExists);
    }

    let password_hash = match password {
        Some(password) => state.hasher.hash(&password).await?,
        None => state.hasher.unusable_hash().await?,
    };

    let user = insert_user(
        &state.db,
        NewUser {
            fname,
            lname,
            email,
            password_hash,
            avatar: optional_text(request.avatar.as_deref()),
            role: Role::User,
        },
    )
    .await
    .map_err(ApiError::from_user_write)?;

    tracing::info!("Admin {} created user {} (id {})", admin.id, user.email, user.id);
    Ok(Json(CreatedUserResponse::ok(user.profile())))
}

/// `PATCH /users/update`: overwrite a profile
///
/// Callers may edit their own row; admins may edit any row. Absent avatar
/// clears it.
///
/// # Errors
///
/// * `400 missing_fields` - id, fname, lname or email absent
/// * `403 forbidden` - caller is neither the owner nor an admin
/// * `400 email_exists` - another row already has the email
/// * `404 user_not_found` - no such row
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = request.id.ok_or(ApiError::MissingFields)?;
    if caller.id != id && !caller.is_admin() {
        tracing::warn!("User {} tried to update user {}", caller.id, id);
        return Err(ApiError::Forbidden);
    }

    let fname = required_text(request.fname.as_deref());
    let lname = required_text(request.lname.as_deref());
    let email = normalize_email(request.email.as_deref());
    let (Some(fname), Some(lname), Some(email)) = (fname, lname, email) else {
        return Err(ApiError::MissingFields);
    };

    if email_taken_by_other(&state.db, &email, id).await? {
        return Err(ApiError::EmailExists);
    }

    let update = ProfileUpdate {
        id,
        fname,
        lname,
        email,
        avatar: optional_text(request.avatar.as_deref()),
    };
    if !db::update_profile(&state.db, &update)
        .await
        .map_err(ApiError::from_user_write)?
    {
        return Err(ApiError::UserNotFound);
    }

    tracing::info!("User {} updated profile {}", caller.id, id);
    Ok(Json(StatusResponse::ok()))
}

/// `DELETE /users/delete`
///
/// Sessions already opened by the deleted user are left to expire.
///
/// # Errors
///
/// * `400 missing_fields` - id absent
/// * `404 user_not_found` - no such row
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiJson(request): ApiJson<DeleteUserRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = request.id.ok_or(ApiError::MissingFields)?;

    if !db::delete_user(&state.db, id).await? {
        return Err(ApiError::UserNotFound);
    }

    tracing::info!("Admin {} deleted user {}", admin.id, id);
    Ok(Json(StatusResponse::ok()))
}
