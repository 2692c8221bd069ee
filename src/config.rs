//! API endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process environment at runtime, so the API
//! base URL is resolved when the crate is compiled (`PANDARANK_API_URL`), the
//! same way a bundler inlines build-time variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API root used when no override is compiled in.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Build-time environment variable that overrides [`DEFAULT_API_BASE_URL`].
pub const API_URL_ENV: &str = "PANDARANK_API_URL";

/// Resolved base URL plus endpoint builders for the remote API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from an explicit base URL. Trailing slashes are trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Resolve from the compile-time `PANDARANK_API_URL` value.
    pub fn from_env() -> Self {
        Self::from_override(option_env!("PANDARANK_API_URL"))
    }

    /// Use `raw` when it is set and non-blank, otherwise the default base URL.
    pub fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn login_url(&self) -> String {
        self.endpoint("auth/login")
    }

    pub fn register_url(&self) -> String {
        self.endpoint("auth/register")
    }

    pub fn current_user_url(&self) -> String {
        self.endpoint("users/me")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
