/// Store service configuration loaded from environment variables.
#[derive(Debug)]
pub struct StoreConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `STORE_PORT`.
    pub store_port: u16,
    /// HMAC secret for session tokens. Env var: `SESSION_SECRET`.
    pub session_secret: String,
    /// Session lifetime in seconds (default two weeks). Env var: `SESSION_TTL_SECS`.
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure`. Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// Directory holding uploaded images. Env var: `MEDIA_ROOT`.
    pub media_root: String,
    /// URL prefix images are served under; always ends with `/`. Env var: `MEDIA_URL`.
    pub media_url: String,
    /// JSON file of movies loaded into an empty catalog. Env var: `CATALOG_SEED_PATH`.
    pub catalog_seed_path: Option<String>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            store_port: std::env::var("STORE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(marquee_auth_types::cookie::SESSION_TTL),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_owned()),
            media_url: normalize_media_url(
                &std::env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".to_owned()),
            ),
            catalog_seed_path: std::env::var("CATALOG_SEED_PATH")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// `media` and `/media` both become `/media/`.
fn normalize_media_url(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}
