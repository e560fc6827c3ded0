/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layer Order
 *
 * From the outside in:
 * 1. `Content-Type: application/json; charset=utf-8` on every response
 * 2. CORS (answers preflight requests itself)
 * 3. Request tracing
 * 4. Session loading (`SessionContext` into extensions)
 * 5. Per-group guards (`route_layer`), then the handler
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::error::ApiError;
use crate::backend::middleware::load_session;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Pool, session store, hasher and cookie settings
///
/// # Fallbacks
///
/// - unknown path: 404 `not_found`
/// - known path, wrong method: 405 `method_not_allowed`
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_user_routes(router);

    router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(app_state.clone(), load_session))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        ))
        .with_state(app_state)
}

/// Credentialed CORS for the browser front end; the request origin is echoed
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
