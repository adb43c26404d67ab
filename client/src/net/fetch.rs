//! `gloo-net` implementation of the `feed` transport.
//!
//! Browser (csr): real `fetch` calls.
//! Native builds (tests): every send fails as unreachable, since there is no
//! browser to talk to.

#![allow(clippy::unused_async)]

use feed::{Request, Response, Transport, TransportError};

/// Stateless `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        #[cfg(feature = "csr")]
        {
            use feed::Method;
            use gloo_net::http::Request as HttpRequest;

            let mut builder = match request.method {
                Method::Get => HttpRequest::get(&request.url),
                Method::Post => HttpRequest::post(&request.url),
                Method::Delete => HttpRequest::delete(&request.url),
            };
            if let Some(token) = &request.authorization {
                builder = builder.header("Authorization", token);
            }
            let sent = match request.body {
                Some(body) => {
                    builder
                        .header("Content-Type", "application/json")
                        .body(body)
                        .map_err(transport_error)?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(transport_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_error)?;
            Ok(Response { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> TransportError {
    TransportError(err.to_string())
}
