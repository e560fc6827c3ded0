/**
 * Session Middleware
 *
 * Runs on every request. Resolves the session cookie against the session
 * store and inserts a `SessionContext` into request extensions for the
 * guards and extractors in `middleware::auth`.
 *
 * A store failure is logged and the request continues as anonymous.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::session_token;
use crate::backend::auth::gate::SessionContext;
use crate::backend::auth::sessions::SessionStore;

/// Attach the request's `SessionContext`
pub async fn load_session(
    State(sessions): State<Arc<dyn SessionStore>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(&jar);

    let user = match &token {
        None => None,
        Some(token) => match sessions.get(token).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Session lookup failed, continuing as anonymous: {}", e);
                None
            }
        },
    };

    request.extensions_mut().insert(SessionContext { token, user });
    next.run(request).await
}
