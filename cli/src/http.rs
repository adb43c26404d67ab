//! `reqwest` implementation of the `feed` transport.

use feed::{Method, Request, Response, Transport, TransportError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &request.url);
        if let Some(token) = request.authorization {
            builder = builder.header(AUTHORIZATION, token);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        let resp = builder.send().await.map_err(transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport_error)?;
        Ok(Response { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    TransportError(err.to_string())
}
