//! API endpoint configuration.
//!
//! The base URL comes from an environment-style value (`API_URL`). When it is
//! missing or blank every network-dependent action is disabled and callers are
//! expected to say so visibly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment key holding the API base URL.
pub const API_URL_ENV: &str = "API_URL";
/// Environment key overriding the signup endpoint path.
pub const SIGNUP_PATH_ENV: &str = "API_SIGNUP_PATH";
/// Signup path served by the paired backend. Older deployments use `/create`.
pub const DEFAULT_SIGNUP_PATH: &str = "/user";

/// Where the comment API lives and which signup path it serves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
    signup_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ApiConfig {
    /// Build a config from optional raw values. Blank values count as absent.
    #[must_use]
    pub fn new(base_url: Option<&str>, signup_path: Option<&str>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_owned);
        let signup_path = signup_path
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map_or_else(|| DEFAULT_SIGNUP_PATH.to_owned(), normalize_path);
        Self { base_url, signup_path }
    }

    /// Config with no base URL; all network actions are disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, None)
    }

    /// Resolve [`API_URL_ENV`] and [`SIGNUP_PATH_ENV`] through `lookup`.
    ///
    /// The browser build passes compile-time values; native callers can pass
    /// `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV);
        let signup_path = lookup(SIGNUP_PATH_ENV);
        Self::new(base_url.as_deref(), signup_path.as_deref())
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    #[must_use]
    pub fn signup_path(&self) -> &str {
        &self.signup_path
    }

    /// Whether network-dependent actions are available.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    /// Absolute URL for `path`, or `None` when disabled.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{base}{path}"))
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
