use std::env;

/// Default target server URL
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Target endpoint configuration.
///
/// The base URL is fixed for the lifetime of the process; every probe
/// derives its request URL from it via [`Config::api_url`].
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let base_url =
            env::var("PROBE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }
}

impl Config {
    /// Create a configuration from the environment, falling back to the
    /// default local server URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration targeting an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
