use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use menubot_core::domain::common::generate_uuid_v7;

pub const SESSION_COOKIE: &str = "menubot_session";

/// The caller's session id, read from the session cookie. A missing or
/// unreadable cookie starts a new session; the returned jar carries the
/// cookie to set.
pub fn resolve_session(jar: CookieJar) -> (CookieJar, Uuid) {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && let Ok(session_id) = Uuid::parse_str(cookie.value())
    {
        return (jar, session_id);
    }

    let session_id = generate_uuid_v7();
    tracing::debug!(%session_id, "Starting new session");

    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), session_id)
}
