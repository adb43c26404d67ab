//! Wire DTOs for the comment API.
//!
//! DESIGN
//! ======
//! Response types mirror the JSON the backend emits. Fields the client must
//! validate itself (the login token and user) are optional here so a malformed
//! success can be detected instead of failing deserialization outright.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated account as reported by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier (UUID string).
    pub id: String,
    /// Login email, also used to attribute comments.
    pub email: String,
}

/// A single comment in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier (UUID string).
    pub id: String,
    /// Email of the author.
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Body of a successful signup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedAccount {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /login` and the signup endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a 2xx `POST /login`. Both fields must be present to authenticate.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewComment<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteComment<'a> {
    pub id: &'a str,
    pub email: &'a str,
}

/// Decode a `GET /comments` body.
///
/// Any well-formed JSON that is not an array (the backend sends `null` for an
/// empty feed) reads as an empty feed. Malformed JSON or a malformed element
/// is an error.
pub(crate) fn parse_comment_list(body: &str) -> serde_json::Result<Vec<Comment>> {
    match serde_json::from_str::<serde_json::Value>(body)? {
        list @ serde_json::Value::Array(_) => serde_json::from_value(list),
        _ => Ok(Vec::new()),
    }
}
