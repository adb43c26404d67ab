//! User-facing toast text for each operation outcome.
//!
//! Both front ends render these verbatim: the browser as toasts, the CLI as
//! printed lines.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::fmt;

use crate::api::ApiError;
use crate::comments::FeedError;
use crate::session::SessionError;
use crate::types::{CreatedAccount, User};

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Error,
}

/// A short notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub tone: Tone,
}

impl Notice {
    #[must_use]
    pub fn info(title: &str, description: Option<String>) -> Self {
        Self {
            title: title.to_owned(),
            description,
            tone: Tone::Info,
        }
    }

    #[must_use]
    pub fn error(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: Some(description.to_owned()),
            tone: Tone::Error,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {description}", self.title),
            None => f.write_str(&self.title),
        }
    }
}

/// Shown when no API URL is configured.
#[must_use]
pub fn api_disabled() -> Notice {
    Notice::error(
        "API unavailable",
        "No API URL is configured, so logging in and posting are disabled.",
    )
}

#[must_use]
pub fn login(result: &Result<User, SessionError>) -> Notice {
    match result {
        Ok(user) => Notice::info("Login successful", Some(format!("Welcome back, {}!", user.email))),
        Err(SessionError::InvalidCredentials) => Notice::error("Login failed", "Invalid credentials"),
        Err(SessionError::IncompleteSession) => {
            Notice::error("Login failed", "Unexpected response from server")
        }
        Err(SessionError::Api(ApiError::Disabled)) => api_disabled(),
        Err(SessionError::Api(_)) => Notice::error("Error", "Failed to login"),
    }
}

#[must_use]
pub fn signup(result: &Result<CreatedAccount, SessionError>) -> Notice {
    match result {
        Ok(account) => Notice::info(
            "Account created",
            Some(format!("Account created for {}. Please login.", account.email)),
        ),
        Err(SessionError::Api(ApiError::Disabled)) => api_disabled(),
        Err(SessionError::Api(ApiError::Unreachable(_) | ApiError::Decode(_))) => {
            Notice::error("Error", "Failed to create account")
        }
        Err(_) => Notice::error("Signup failed", "Could not create account"),
    }
}

#[must_use]
pub fn logout() -> Notice {
    Notice::info("Logged out successfully", None)
}

#[must_use]
pub fn post(result: &Result<(), FeedError>) -> Notice {
    match result {
        Ok(()) => Notice::info(
            "Comment posted",
            Some("Your comment has been added successfully".to_owned()),
        ),
        Err(FeedError::EmptyContent) => {
            Notice::error("Failed to post comment", "Comment cannot be empty")
        }
        Err(FeedError::NotAuthenticated | FeedError::MissingUserEmail) => {
            Notice::error("Not logged in", "Log in to post comments")
        }
        Err(FeedError::Api(ApiError::Disabled)) => api_disabled(),
        Err(FeedError::Api(ApiError::Unreachable(_))) => {
            Notice::error("Error", "Failed to post comment")
        }
        Err(FeedError::Api(_)) => Notice::error("Failed to post comment", "Could not add your comment"),
    }
}

#[must_use]
pub fn delete(result: &Result<(), FeedError>) -> Notice {
    match result {
        Ok(()) => Notice::info(
            "Comment deleted",
            Some("Your comment has been removed".to_owned()),
        ),
        Err(FeedError::MissingUserEmail | FeedError::NotAuthenticated) => {
            Notice::error("Failed to delete comment", "No logged-in user email")
        }
        Err(FeedError::EmptyContent) => Notice::error("Failed to delete comment", "Nothing to delete"),
        Err(FeedError::Api(ApiError::Disabled)) => api_disabled(),
        Err(FeedError::Api(ApiError::Unreachable(_))) => {
            Notice::error("Error", "Failed to delete comment")
        }
        Err(FeedError::Api(_)) => {
            Notice::error("Failed to delete comment", "Could not delete your comment")
        }
    }
}
