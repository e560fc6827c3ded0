/**
 * Password Change Handlers
 *
 * - POST /auth/change_password - caller changes their own password
 * - POST /auth/admin_reset_password - admin sets another user's password
 *
 * Both rehash the new password; neither ever stores or compares plaintext
 * beyond the single bcrypt verification of the current password.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AdminResetRequest, ChangePasswordRequest, StatusResponse};
use crate::backend::auth::password::check_policy;
use crate::backend::auth::users::{get_user_by_id, update_password_hash};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::middleware::{AdminUser, AuthUser};
use crate::backend::server::state::AppState;
use crate::shared::validation::required_password;

/// Change the caller's password
///
/// # Errors
///
/// * `400 missing_fields` - current or new password absent
/// * `400 weak_password` - new password shorter than the policy minimum
/// * `401 invalid_current_password` - current password does not verify, or
///   the caller's row no longer exists
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let current = required_password(request.current_password.as_deref());
    let new = required_password(request.new_password.as_deref());
    let (Some(current), Some(new)) = (current, new) else {
        return Err(ApiError::MissingFields);
    };
    check_policy(&new)?;

    let Some(user) = get_user_by_id(&state.db, caller.id).await? else {
        tracing::warn!("Password change for vanished user id {}", caller.id);
        return Err(ApiError::InvalidCurrentPassword);
    };

    if !state.hasher.verify(&current, &user.password_hash).await? {
        tracing::warn!("Password change rejected for {}: current password mismatch", user.email);
        return Err(ApiError::InvalidCurrentPassword);
    }

    let new_hash = state.hasher.hash(&new).await?;
    update_password_hash(&state.db, user.id, &new_hash).await?;

    tracing::info!("Password changed for {} (id {})", user.email, user.id);
    Ok(Json(StatusResponse::ok()))
}

/// Reset another user's password without knowing the current one
///
/// Admin-only; the route guard rejects non-admins before the body is read.
///
/// # Errors
///
/// * `400 missing_fields` - user_id or new password absent
/// * `400 weak_password` - new password shorter than the policy minimum
/// * `404 user_not_found` - no such user id
pub async fn admin_reset_password(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiJson(request): ApiJson<AdminResetRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let new = required_password(request.new_password.as_deref());
    let (Some(user_id), Some(new)) = (request.user_id, new) else {
        return Err(ApiError::MissingFields);
    };
    check_policy(&new)?;

    if get_user_by_id(&state.db, user_id).await?.is_none() {
        tracing::warn!("Admin {} tried to reset unknown user id {}", admin.id, user_id);
        return Err(ApiError::UserNotFound);
    }

    let new_hash = state.hasher.hash(&new).await?;
    if !update_password_hash(&state.db, user_id, &new_hash).await? {
        return Err(ApiError::UserNotFound);
    }

    tracing::info!("Admin {} reset password for user id {}", admin.id, user_id);
    Ok(Json(StatusResponse::ok()))
}
