/**
 * Current User Handler
 *
 * GET /auth/me
 *
 * Returns the session snapshot as stored at login. The `user` table is not
 * read, so the role shown is the one the auth gate enforces.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::middleware::AuthUser;

pub async fn get_me(AuthUser(user): AuthUser) -> Json<AuthResponse> {
    Json(AuthResponse::ok(user))
}
