/**
 * Logout Handler
 *
 * POST /auth/logout
 *
 * Destroys whatever session the cookie names and clears the cookie. Works
 * the same with no cookie, an expired cookie, or a live one.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::clear_session;
use crate::backend::auth::gate::current_session;
use crate::backend::auth::handlers::types::StatusResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::Session;
use crate::backend::server::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    Session(ctx): Session,
    jar: CookieJar,
) -> Result<(CookieJar, Json<StatusResponse>), ApiError> {
    if let Some(token) = ctx.token.as_deref() {
        state.sessions.destroy(token).await?;
    }
    if let Some(user) = current_session(&ctx) {
        tracing::info!("User logged out: {} (id {})", user.email, user.id);
    }

    Ok((clear_session(jar), Json(StatusResponse::ok())))
}
