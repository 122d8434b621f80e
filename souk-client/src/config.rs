//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

/// Routes whose 401 means "bad credentials" rather than "session expired"
pub const DEFAULT_PUBLIC_ROUTES: &[&str] = &[
    "/auth/login",
    "/auth/register",
    "/auth/forgot-password",
];

/// Client configuration for connecting to the marketplace backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SOUK_API_URL | http://localhost:5000/api | Backend base URL |
/// | SOUK_TOKEN | - | Pre-issued bearer token |
/// | SOUK_TIMEOUT_SECS | 30 | Per-request timeout |
/// | SOUK_RETRY_ATTEMPTS | 3 | Total attempts for GET on network failure |
/// | SOUK_RETRY_DELAY_MS | 1000 | Linear backoff step |
/// | SOUK_SESSION_FILE | - | JSON file holding the persisted session |
/// | SOUK_PUBLIC_ROUTES | see [`DEFAULT_PUBLIC_ROUTES`] | Comma-separated paths |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.example.tn/api")
    pub base_url: String,

    /// Bearer token for authentication; a persisted session overrides it
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Total attempts for idempotent GETs that fail before a response arrives
    pub retry_attempts: u32,

    /// Backoff step; attempt `n` waits `n * retry_delay`
    pub retry_delay: Duration,

    /// Where the session is persisted (no persistence when `None`)
    pub session_file: Option<PathBuf>,

    /// Paths exempt from session teardown on 401
    pub public_routes: Vec<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            retry_attempts: 3,
            retry_delay: Duration::from_millis(1000),
            session_file: None,
            public_routes: DEFAULT_PUBLIC_ROUTES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults of [`ClientConfig::new`].
    pub fn from_env() -> Self {
        let mut config =
            Self::new(std::env::var("SOUK_API_URL").unwrap_or_else(|_| "http://localhost:5000/api".into()));

        config.token = std::env::var("SOUK_TOKEN").ok().filter(|t| !t.trim().is_empty());
        if let Some(timeout) = std::env::var("SOUK_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()) {
            config.timeout = timeout;
        }
        if let Some(attempts) = std::env::var("SOUK_RETRY_ATTEMPTS").ok().and_then(|v| v.parse().ok()) {
            config.retry_attempts = attempts;
        }
        if let Some(ms) = std::env::var("SOUK_RETRY_DELAY_MS").ok().and_then(|v| v.parse().ok()) {
            config.retry_delay = Duration::from_millis(ms);
        }
        config.session_file = std::env::var("SOUK_SESSION_FILE").ok().map(PathBuf::from);
        if let Ok(routes) = std::env::var("SOUK_PUBLIC_ROUTES") {
            config.public_routes = routes
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the GET retry policy
    pub fn with_retry(mut self, attempts: u32, delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay = delay;
        self
    }

    /// Persist the session to this file
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Replace the public routes
    pub fn with_public_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public_routes = routes.into_iter().map(Into::into).collect();
        self
    }

    /// Create a client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::SoukClient> {
        crate::SoukClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api")
    }
}
