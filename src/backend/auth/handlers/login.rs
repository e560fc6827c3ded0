/**
 * Login Handler
 *
 * POST /auth/login
 *
 * # Authentication Process
 *
 * 1. Normalize the email and look the account up
 * 2. Verify the password with bcrypt
 * 3. Replace any session the browser already had with a new one holding
 *    a snapshot of the account
 * 4. Return the snapshot and set the session cookie
 *
 * # Security
 *
 * - Unknown email and wrong password both answer 401 `invalid_credentials`
 * - An unknown email still pays for one bcrypt verification
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::middleware::Session;
use crate::backend::server::state::AppState;
use crate::shared::validation::{normalize_email, required_password};
use crate::shared::SessionUser;

/// Open a session for `user`, destroying the one the browser presented
pub(crate) async fn start_session(
    state: &AppState,
    previous_token: Option<&str>,
    jar: CookieJar,
    user: SessionUser,
) -> Result<CookieJar, ApiError> {
    if let Some(previous) = previous_token {
        state.sessions.destroy(previous).await?;
    }
    let token = state.sessions.open(user).await?;
    Ok(jar.add(session_cookie(&token, state.cookies)))
}

/// Login handler
///
/// # Errors
///
/// * `400 missing_fields` - email or password absent
/// * `401 invalid_credentials` - unknown email or wrong password
/// * `500 server_error` - store or bcrypt failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@b.com", "password": "password1"}
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "user": {"id": 1, "fname": "A", "lname": "B", "email": "a@b.com", "role": "user", "avatar": null}
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Session(ctx): Session,
    jar: CookieJar,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let email = normalize_email(request.email.as_deref());
    let password = required_password(request.password.as_deref());
    let (Some(email), Some(password)) = (email, password) else {
        return Err(ApiError::MissingFields);
    };

    tracing::info!("Login request for: {}", email);

    let Some(user) = get_user_by_email(&state.db, &email).await? else {
        state.hasher.verify_dummy(&password).await?;
        tracing::warn!("Login failed for {}: no such account", email);
        return Err(ApiError::InvalidCredentials);
    };

    if !state.hasher.verify(&password, &user.password_hash).await? {
        tracing::warn!("Login failed for {}: wrong password", email);
        return Err(ApiError::InvalidCredentials);
    }

    let snapshot = user.snapshot();
    let jar = start_session(&state, ctx.token.as_deref(), jar, snapshot.clone()).await?;

    tracing::info!("User logged in: {} (id {}, role {})", snapshot.email, snapshot.id, snapshot.role);

    Ok((jar, Json(AuthResponse::ok(snapshot))))
}
