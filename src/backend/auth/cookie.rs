// Session cookie helpers
//
// The cookie only carries the opaque session token. It is HttpOnly so the
// front end can never read it; the browser attaches it to fetch calls made
// with `credentials: "include"`.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "userdesk_session";

/// Cookie attributes chosen at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    /// Set the `Secure` flag (enable behind HTTPS)
    pub secure: bool,
}

/// Build the session cookie for a freshly opened session
pub fn session_cookie(token: &str, settings: CookieSettings) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .build()
}

/// Token presented by the browser, if any
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Add a removal cookie for the session token
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
