/**
 * Register Handler
 *
 * POST /auth/register
 *
 * # Registration Process
 *
 * 1. Require fname, lname, email and password (trimmed, non-empty)
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Insert the row with role `user`
 * 5. Open a session and return the snapshot
 *
 * The existence check gives the friendly error; the unique index on
 * `user.email` catches two registrations racing past it.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::login::start_session;
use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::users::{create_user, email_exists, NewUser};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::middleware::Session;
use crate::backend::server::state::AppState;
use crate::shared::validation::{normalize_email, optional_text, required_password, required_text};
use crate::shared::Role;

/// Register handler
///
/// # Errors
///
/// * `400 missing_fields` - a required field is absent or blank
/// * `400 email_exists` - the email is already registered
/// * `400 password_too_long` - the password exceeds what bcrypt hashes untruncated
/// * `500 server_error` - store or bcrypt failure
pub async fn register(
    State(state): State<AppState>,
    Session(ctx): Session,
    jar: CookieJar,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let fname = required_text(request.fname.as_deref());
    let lname = required_text(request.lname.as_deref());
    let email = normalize_email(request.email.as_deref());
    let password = required_password(request.password.as_deref());
    let avatar = optional_text(request.avatar.as_deref());

    let (Some(fname), Some(lname), Some(email), Some(password)) = (fname, lname, email, password)
    else {
        tracing::warn!("Registration rejected: missing fields");
        return Err(ApiError::MissingFields);
    };

    tracing::info!("Registration request for: {}", email);

    if email_exists(&state.db, &email).await? {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::EmailExists);
    }

    let password_hash = state.hasher.hash(&password).await?;

    let user = create_user(
        &state.db,
        NewUser {
            fname,
            lname,
            email,
            password_hash,
            avatar,
            role: Role::User,
        },
    )
    .await
    .map_err(ApiError::from_user_write)?;

    let snapshot = user.snapshot();
    let jar = start_session(&state, ctx.token.as_deref(), jar, snapshot.clone()).await?;

    tracing::info!("User registered: {} (id {})", snapshot.email, snapshot.id);

    Ok((jar, Json(AuthResponse::ok(snapshot))))
}
