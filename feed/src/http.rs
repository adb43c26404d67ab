//! Minimal HTTP seam between the controllers and a concrete client.
//!
//! Browser builds implement [`Transport`] with `gloo-net`; native builds with
//! `reqwest`. Bodies are pre-serialized JSON strings so implementations stay a
//! few lines long.

/// HTTP verbs used by the comment API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// An outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// Sent verbatim as the `Authorization` header. No scheme is prepended.
    pub authorization: Option<String>,
    /// JSON body; implementations must send it with `Content-Type: application/json`.
    pub body: Option<String>,
}

/// A completed response. Any status is a response; only transport failures are errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// True for 2xx statuses.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, connection, CORS, aborted body).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one request and waits for the full response body.
///
/// Futures are not required to be `Send`; browser fetch futures are not.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}
