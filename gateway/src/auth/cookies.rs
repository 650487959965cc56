//! Session cookie management.
//!
//! Access and refresh tokens live in HTTP-only cookies. The gateway reads
//! the access cookie to build the upstream `Authorization` header and writes
//! both cookies on login/register; it never refreshes or validates them.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie holding the short-lived access token.
pub const AUTH_COOKIE: &str = "auth_token";
/// Cookie holding the long-lived refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

const ACCESS_MAX_AGE: Duration = Duration::minutes(30);
const REFRESH_MAX_AGE: Duration = Duration::days(7);

/// Extracts the bearer token for upstream calls.
///
/// An absent or empty cookie yields `None`, so no `Authorization` header is
/// ever sent with an empty bearer value.
pub fn bearer_token(jar: &CookieJar) -> Option<String> {
    jar.get(AUTH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

fn session_cookie(
    name: &'static str,
    value: String,
    max_age: Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(max_age)
        .build()
}

/// Stores a freshly issued token pair in the jar.
pub fn store_session(
    jar: CookieJar,
    access_token: String,
    refresh_token: String,
    secure: bool,
) -> CookieJar {
    jar.add(session_cookie(
        AUTH_COOKIE,
        access_token,
        ACCESS_MAX_AGE,
        secure,
    ))
    .add(session_cookie(
        REFRESH_COOKIE,
        refresh_token,
        REFRESH_MAX_AGE,
        secure,
    ))
}

/// Clears both session cookies by rewriting them with max-age 0.
pub fn clear_session(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(session_cookie(
        AUTH_COOKIE,
        String::new(),
        Duration::ZERO,
        secure,
    ))
    .add(session_cookie(
        REFRESH_COOKIE,
        String::new(),
        Duration::ZERO,
        secure,
    ))
}
