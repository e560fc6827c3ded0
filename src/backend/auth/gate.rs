/**
 * Auth Gate
 *
 * Decides whether a request is anonymous, authenticated or admin, using
 * only the session snapshot that the session middleware resolved from the
 * cookie. The `user` table is not consulted, so a demoted admin keeps admin
 * rights until they log in again.
 */

use crate::backend::error::ApiError;
use crate::shared::SessionUser;

/// Per-request session state, inserted into request extensions by
/// `middleware::session::load_session`
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Token presented in the cookie, whether or not it resolved
    pub token: Option<String>,
    /// Snapshot for a live session
    pub user: Option<SessionUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }
}

/// Snapshot if the request carries a live session
pub fn current_session(ctx: &SessionContext) -> Option<SessionUser> {
    ctx.user.clone()
}

/// Snapshot, or `Unauthorized`
pub fn require_authenticated(ctx: &SessionContext) -> Result<SessionUser, ApiError> {
    current_session(ctx).ok_or(ApiError::Unauthorized)
}

/// Admin snapshot, or `Unauthorized` / `Forbidden`
pub fn require_admin(ctx: &SessionContext) -> Result<SessionUser, ApiError> {
    let user = require_authenticated(ctx)?;
    if !user.is_admin() {
        return Err(ApiError::Forbidden);
    }
    Ok(user)
}
