//! Session-backed identity extractors.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use http::HeaderMap;
use http::request::Parts;

use crate::cookie::MARQUEE_SESSION;
use crate::token::{SessionInfo, validate_session};

/// Where anonymous requests to protected routes are sent.
pub const LOGIN_URL: &str = "/accounts/login/";

/// Session signing settings, pulled out of the router state with `FromRef`.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub secret: Arc<str>,
    pub ttl_secs: u64,
    pub secure_cookie: bool,
}

/// The logged-in user of a request.
///
/// Rejects with a redirect to [`LOGIN_URL`] carrying the original path in
/// `next` when the session cookie is absent, expired or forged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i32,
    pub username: String,
}

impl From<SessionInfo> for CurrentUser {
    fn from(info: SessionInfo) -> Self {
        Self {
            user_id: info.user_id,
            username: info.username,
        }
    }
}

/// The logged-in user, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

/// Rejection for [`CurrentUser`]: `303` to the login page.
#[derive(Debug)]
pub struct LoginRedirect {
    pub next: String,
}

impl LoginRedirect {
    pub fn location(&self) -> String {
        format!("{LOGIN_URL}?next={}", urlencoding::encode(&self.next))
    }
}

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to(&self.location()).into_response()
    }
}

fn session_from_headers(headers: &HeaderMap, secret: &str) -> Option<CurrentUser> {
    let jar = CookieJar::from_headers(headers);
    let value = jar.get(MARQUEE_SESSION)?.value().to_owned();
    if value.is_empty() {
        return None;
    }
    match validate_session(&value, secret) {
        Ok(info) => Some(info.into()),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring invalid session cookie");
            None
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    SessionSettings: FromRef<S>,
{
    type Rejection = LoginRedirect;

    // Extract synchronously and return a 'static future; see axum-core's
    // `fn -> impl Future + Send` signature.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let settings = SessionSettings::from_ref(state);
        let user = session_from_headers(&parts.headers, &settings.secret);
        let next = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_owned())
            .unwrap_or_else(|| "/".to_owned());

        async move { user.ok_or(LoginRedirect { next }) }
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    SessionSettings: FromRef<S>,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let settings = SessionSettings::from_ref(state);
        let user = session_from_headers(&parts.headers, &settings.secret);
        async move { Ok(MaybeUser(user)) }
    }
}
