//! HTTP transport seam.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: [`BrowserTransport`] reports [`TransportError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Clients never talk to `gloo-net` directly; they build an [`HttpRequest`]
//! and hand it to a [`Transport`]. This keeps request construction testable
//! with a scripted transport and lets [`super::authenticator`] mutate each
//! request right before dispatch.

#![allow(clippy::unused_async)]

use serde::Serialize;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors raised before a response status is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be delivered or the response body not read.
    #[error("network error: {0}")]
    Network(String),

    /// The request could not be assembled (bad header, unserializable body).
    #[error("request build failed: {0}")]
    Build(String),

    /// No HTTP transport exists in this build.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully constructed outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, TransportError> {
        let raw = serde_json::to_string(body).map_err(|e| TransportError::Build(e.to_string()))?;
        self.body = Some(raw);
        Ok(self)
    }

    #[must_use]
    pub fn query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Set a header, replacing any existing value with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP transport. Enables mocking in tests.
///
/// Futures are not `Send`: browser fetch futures live on the single UI thread.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Dispatch `request` and return the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait::async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Fetch-API transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            let builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            let builder = request
                .headers
                .iter()
                .fold(builder, |b, (name, value)| b.header(name, value));
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Build(e.to_string()))?;

            let resp = prepared
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
