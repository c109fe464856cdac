//! Client configuration

use std::path::PathBuf;

/// Client configuration for connecting to the admin API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BISTRO_API_URL | http://localhost:3000 | Backend base URL |
/// | BISTRO_SITE_URL | same as BISTRO_API_URL | Public site URL used in share links |
/// | BISTRO_TOKEN_DIR | .bistro | Directory holding the admin token file |
/// | BISTRO_REQUEST_TIMEOUT_SECS | unset | Request timeout; unset means none |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Public site URL
    pub site_url: String,

    /// Directory of the persisted admin token
    pub token_dir: PathBuf,

    /// Request timeout in seconds, `None` for no timeout
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            site_url: base_url.clone(),
            base_url,
            token_dir: PathBuf::from(".bistro"),
            timeout: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(
            lookup("BISTRO_API_URL").unwrap_or_else(|| "http://localhost:3000".into()),
        );
        if let Some(site_url) = lookup("BISTRO_SITE_URL") {
            config.site_url = site_url;
        }
        if let Some(dir) = lookup("BISTRO_TOKEN_DIR") {
            config.token_dir = PathBuf::from(dir);
        }
        config.timeout = lookup("BISTRO_REQUEST_TIMEOUT_SECS").and_then(|value| {
            match value.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    tracing::warn!(
                        value = %value,
                        "Ignoring invalid BISTRO_REQUEST_TIMEOUT_SECS, no timeout applied: {}",
                        e
                    );
                    None
                }
            }
        });
        config
    }

    /// Set the public site URL
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    /// Set the token directory
    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = dir.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }

    /// Create the file token store from this configuration
    pub fn token_store(&self) -> crate::FileTokenStore {
        crate::FileTokenStore::new(&self.token_dir)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
