//! Mock sessions for integration tests.
//!
//! Protected routes read the `marquee_session` cookie. `MockAuth` signs a
//! session with the test secret so requests can skip the login flow.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, header};

use marquee_auth_types::cookie::MARQUEE_SESSION;
use marquee_auth_types::identity::SessionSettings;
use marquee_auth_types::token::issue_session;

/// Secret shared by `MockAuth` and the state built by [`test_session_settings`].
pub const TEST_SESSION_SECRET: &str = "test-session-secret-for-tests-only";

/// Session settings matching the cookies `MockAuth` produces.
pub fn test_session_settings() -> SessionSettings {
    SessionSettings {
        secret: Arc::from(TEST_SESSION_SECRET),
        ttl_secs: 3600,
        secure_cookie: false,
    }
}

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: i32,
    pub username: String,
}

impl MockAuth {
    pub fn new(user_id: i32, username: &str) -> Self {
        Self {
            user_id,
            username: username.to_owned(),
        }
    }

    /// Raw signed session token.
    pub fn token(&self) -> String {
        let (token, _) = issue_session(self.user_id, &self.username, TEST_SESSION_SECRET, 3600)
            .expect("sign test session");
        token
    }

    /// `Cookie` header carrying the session, as a browser would send it.
    pub fn cookie_header(&self) -> (HeaderName, HeaderValue) {
        let value = format!("{MARQUEE_SESSION}={}", self.token());
        (
            header::COOKIE,
            HeaderValue::from_str(&value).expect("cookie header value"),
        )
    }
}
