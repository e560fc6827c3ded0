/**
 * Authentication Routes
 *
 * ## Public
 * - `POST /auth/register` - Create an account and sign in
 * - `POST /auth/login` - Sign in
 * - `POST /auth/logout` - Sign out (always succeeds)
 *
 * ## Session required
 * - `GET /auth/me` - Current session snapshot
 * - `POST /auth/change_password` - Change own password
 *
 * ## Admin only
 * - `POST /auth/admin_reset_password` - Set another user's password
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{admin_reset_password, change_password, get_me, login, logout, register};
use crate::backend::middleware::{require_admin_role, require_login};
use crate::backend::server::state::AppState;

/// Configure `/auth/*` routes
///
/// Each guarded group gets its guard through `route_layer`, so it only
/// wraps that group's routes and never the fallbacks.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let members = Router::new()
        .route("/auth/me", get(get_me))
        .route("/auth/change_password", post(change_password))
        .route_layer(middleware::from_fn(require_login));

    let admins = Router::new()
        .route("/auth/admin_reset_password", post(admin_reset_password))
        .route_layer(middleware::from_fn(require_admin_role));

    router.merge(public).merge(members).merge(admins)
}
