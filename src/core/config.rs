//! Application configuration.
//!
//! On the server call `dotenvy::dotenv()` before `Config::from_env()`. The
//! browser bundle has no process environment, so the compile-time value of
//! `LMS_API_BASE_URL` is used there.

/// Environment variable naming the REST backend base URL
pub const API_BASE_URL_VAR: &str = "LMS_API_BASE_URL";

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// REST backend base URL, without trailing slash
    /// Example: https://lms.example.com/api
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Runtime variable first, then the value baked in at build time, then
    /// [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Self {
        let url = std::env::var(API_BASE_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| option_env!("LMS_API_BASE_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self::new(url)
    }

    /// Anchor a relative base URL (e.g. `/api`) at `origin`
    ///
    /// HTTP clients need absolute URLs; the browser supplies its origin.
    pub fn with_origin(&self, origin: &str) -> Self {
        if self.api_base_url.starts_with('/') {
            Self::new(format!("{}{}", origin.trim_end_matches('/'), self.api_base_url))
        } else {
            self.clone()
        }
    }

    /// Full URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
