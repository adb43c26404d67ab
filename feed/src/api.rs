//! Typed calls against the comment API.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses collapse into [`ApiError::Rejected`]; error bodies are
//! never parsed. A missing base URL short-circuits to [`ApiError::Disabled`]
//! before the transport is touched.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::http::{Method, Request, Response, Transport};
use crate::types::{
    Comment, CreatedAccount, Credentials, DeleteComment, LoginResponse, NewComment,
    parse_comment_list,
};

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No base URL is configured.
    #[error("API base URL is not configured")]
    Disabled,
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16 },
    /// No response was received.
    #[error("server unreachable: {0}")]
    Unreachable(String),
    /// A 2xx body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Comment API client over any [`Transport`].
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /comments`, in server order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; a `null` body is an empty list, not an error.
    pub async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        let resp = self.call(Method::Get, "/comments", None, None).await?;
        Ok(parse_comment_list(&resp.body)?)
    }

    /// `POST /login`. The returned body is not validated here.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub(crate) async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = encode(&Credentials { email, password })?;
        let resp = self.call(Method::Post, "/login", None, Some(body)).await?;
        decode(&resp)
    }

    /// `POST` to the configured signup path.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn create_account(&self, email: &str, password: &str) -> Result<CreatedAccount, ApiError> {
        let body = encode(&Credentials { email, password })?;
        let path = self.config.signup_path().to_owned();
        let resp = self.call(Method::Post, &path, None, Some(body)).await?;
        decode(&resp)
    }

    /// `POST /comment` authorized by the raw session token.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] except [`ApiError::Decode`]; the body is ignored.
    pub async fn post_comment(&self, token: &str, content: &str) -> Result<(), ApiError> {
        let body = encode(&NewComment { content })?;
        self.call(Method::Post, "/comment", Some(token), Some(body))
            .await
            .map(drop)
    }

    /// `DELETE /comment` authorized by the raw session token.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] except [`ApiError::Decode`]; the body is ignored.
    pub async fn delete_comment(&self, token: &str, id: &str, email: &str) -> Result<(), ApiError> {
        let body = encode(&DeleteComment { id, email })?;
        self.call(Method::Delete, "/comment", Some(token), Some(body))
            .await
            .map(drop)
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        authorization: Option<&str>,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        let url = self.config.endpoint(path).ok_or(ApiError::Disabled)?;
        let request = Request {
            method,
            url,
            authorization: authorization.map(str::to_owned),
            body,
        };
        log::debug!("{} {}", method.as_str(), request.url);
        let resp = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Unreachable(e.0))?;
        if !resp.ok() {
            return Err(ApiError::Rejected { status: resp.status });
        }
        Ok(resp)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}

fn decode<R: DeserializeOwned>(resp: &Response) -> Result<R, ApiError> {
    Ok(serde_json::from_str(&resp.body)?)
}
