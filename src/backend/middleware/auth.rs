/**
 * Authorization Middleware
 *
 * Route guards and extractors built on the `SessionContext` that
 * `load_session` put in request extensions.
 *
 * Guards are applied per route group with `Router::route_layer`, so an
 * unmet requirement is answered before the handler's body extractor runs:
 *
 * ```rust,ignore
 * Router::new()
 *     .route("/users/delete", delete(delete_user))
 *     .route_layer(middleware::from_fn(require_admin_role));
 * ```
 *
 * Handlers then take `AuthUser` / `AdminUser` to get the snapshot.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::gate::{self, SessionContext};
use crate::backend::error::ApiError;
use crate::shared::SessionUser;

fn session_context(parts_extensions: &axum::http::Extensions) -> SessionContext {
    parts_extensions
        .get::<SessionContext>()
        .cloned()
        .unwrap_or_else(|| {
            tracing::warn!("SessionContext missing from request extensions");
            SessionContext::anonymous()
        })
}

/// Guard: 401 unless the request has a live session
pub async fn require_login(request: Request, next: Next) -> Result<Response, ApiError> {
    let ctx = session_context(request.extensions());
    if let Err(e) = gate::require_authenticated(&ctx) {
        tracing::warn!("Rejected {} {}: no session", request.method(), request.uri().path());
        return Err(e);
    }
    Ok(next.run(request).await)
}

/// Guard: 401 without a session, 403 unless the snapshot role is admin
pub async fn require_admin_role(request: Request, next: Next) -> Result<Response, ApiError> {
    let ctx = session_context(request.extensions());
    if let Err(e) = gate::require_admin(&ctx) {
        tracing::warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        );
        return Err(e);
    }
    Ok(next.run(request).await)
}

/// The raw session context, including the presented token
#[derive(Clone, Debug)]
pub struct Session(pub SessionContext);

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session(session_context(&parts.extensions)))
    }
}

/// Authenticated snapshot; rejects with 401
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        gate::require_authenticated(&session_context(&parts.extensions)).map(AuthUser)
    }
}

/// Admin snapshot; rejects with 401 or 403
#[derive(Clone, Debug)]
pub struct AdminUser(pub SessionUser);

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        gate::require_admin(&session_context(&parts.extensions)).map(AdminUser)
    }
}
