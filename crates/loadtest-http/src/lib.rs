//! HTTP transport used by the store-loadgen populators.
//!
//! The populators never talk to `reqwest` directly. They hand an
//! [`HttpRequest`] to a [`Transport`] and get back the status code and body.
//! [`ReqwestTransport`] owns a single `reqwest::Client`, so connection reuse
//! is tied to that handle rather than to any global client.

pub mod error;
mod logging;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub use error::TransportError;
pub use logging::mask_url_credentials;
pub use reqwest::header::CONTENT_TYPE;
pub use reqwest::Method;

/// Header carrying the correlation id on every generated call.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// A fully resolved request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach an already serialized JSON body along with its content type.
    pub fn body(mut self, json: String) -> Self {
        self.body = Some(json);
        self.header(CONTENT_TYPE.as_str(), "application/json")
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, TransportError> {
        Ok(self.body(serde_json::to_string(value)?))
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends requests to a target.
///
/// Any status code is a successful exchange; only failing to complete the
/// exchange is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// [`Transport`] backed by one owned `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the client's default timeouts (none).
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self { client })
    }

    /// Build a transport that gives up on a request after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let masked_url = mask_url_credentials(&url);
        tracing::debug!("{method} {masked_url}");

        let mut builder = self.client.request(method, &url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: masked_url.clone(),
                source: source.without_url(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Request {
                url: masked_url,
                source: source.without_url(),
            })?;

        Ok(HttpResponse { status, body })
    }
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// One line of console output for a completed call: `<path> - <status>`.
pub fn format_status_line(path: &str, status: u16) -> String {
    format!("{path} - {status}")
}
