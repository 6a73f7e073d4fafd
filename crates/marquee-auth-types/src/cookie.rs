//! Cookie builders for the session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const MARQUEE_SESSION: &str = "marquee_session";

/// Default session lifetime in seconds (2 weeks).
pub const SESSION_TTL: u64 = 1_209_600;

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use marquee_auth_types::cookie::{set_session_cookie, MARQUEE_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "token_value".to_string(), 60, false);
/// let cookie = jar.get(MARQUEE_SESSION).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(60)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(!cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String, ttl_secs: u64, secure: bool) -> CookieJar {
    let cookie = Cookie::build((MARQUEE_SESSION, value))
        .path("/")
        .max_age(Duration::seconds(ttl_secs as i64))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use marquee_auth_types::cookie::{clear_session_cookie, set_session_cookie, MARQUEE_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "t".to_string(), 60, true);
/// let jar = clear_session_cookie(jar, true);
/// let cookie = jar.get(MARQUEE_SESSION).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// assert_eq!(cookie.value(), "");
/// ```
pub fn clear_session_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((MARQUEE_SESSION, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
