//! Build-time API configuration.
//!
//! `API_URL` and `API_SIGNUP_PATH` are read from the build environment
//! (e.g. `API_URL=https://api.example.com trunk build`). A build without
//! `API_URL` still runs but disables every network action.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use feed::ApiConfig;
use feed::config::{API_URL_ENV, SIGNUP_PATH_ENV};

/// The API config baked into this build.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_lookup(build_env)
}

fn build_env(key: &str) -> Option<String> {
    match key {
        API_URL_ENV => option_env!("API_URL").map(str::to_owned),
        SIGNUP_PATH_ENV => option_env!("API_SIGNUP_PATH").map(str::to_owned),
        _ => None,
    }
}
