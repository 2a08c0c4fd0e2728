//! Credentialed HTTP transport for the backend API.
//!
//! Client-side (hydrate): real fetch calls via `gloo-net`, always with
//! cookies included, raced against a request timeout. Server-side (SSR):
//! a stub error, since these endpoints are only meaningful in the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// How long a request may stay in flight before it is abandoned.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// HTTP method subset the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request to the backend, independent of any browser type.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), headers: Vec::new(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Header presence check; header names compare case-insensitively.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

/// A response from the backend: status plus raw body text.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Decode` when the body is not valid JSON for
    /// the target type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Failures at or below the HTTP layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connectivity, timeout, CORS).
    #[error("request failed: {0}")]
    Network(String),
    /// A response arrived but its body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Port for talking to the backend.
///
/// Implementations must send requests with the browser's session
/// credentials included; the backend identifies callers by cookie.
#[async_trait(?Send)]
pub trait AuthTransport {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Transport backed by the browser's fetch via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            send_browser(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(TransportError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser(req: ApiRequest) -> Result<ApiResponse, TransportError> {
    use futures::future::{Either, select};

    let method = match req.method {
        HttpMethod::Get => gloo_net::http::Method::GET,
        HttpMethod::Post => gloo_net::http::Method::POST,
    };
    let mut builder = gloo_net::http::RequestBuilder::new(&req.path)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include);
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    let request = match req.body {
        Some(body) => builder.body(body).map_err(|e| TransportError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| TransportError::Network(e.to_string()))?,
    };

    let send = Box::pin(async move {
        let response = request.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    });
    let timeout = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(
        REQUEST_TIMEOUT_MS,
    )));
    match select(send, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::Network("request timed out".to_owned())),
    }
}
