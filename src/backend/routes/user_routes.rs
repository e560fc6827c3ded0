/**
 * Profile Routes
 *
 * ## Session required
 * - `GET /users/read` - All users, id order
 * - `GET /users/readone?id=` - One profile
 * - `GET /users/search?keyword=|id=` - Search
 * - `PATCH /users/update` - Edit own profile (admins: any profile)
 *
 * ## Admin only
 * - `POST /users/create` - Create an account
 * - `DELETE /users/delete` - Delete an account
 */

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use crate::backend::middleware::{require_admin_role, require_login};
use crate::backend::server::state::AppState;
use crate::backend::users::{create_user, delete_user, read_one, read_users, search_users, update_user};

/// Configure `/users/*` routes
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    let members = Router::new()
        .route("/users/read", get(read_users))
        .route("/users/readone", get(read_one))
        .route("/users/search", get(search_users))
        .route("/users/update", patch(update_user))
        .route_layer(middleware::from_fn(require_login));

    let admins = Router::new()
        .route("/users/create", post(create_user))
        .route("/users/delete", delete(delete_user))
        .route_layer(middleware::from_fn(require_admin_role));

    router.merge(members).merge(admins)
}
