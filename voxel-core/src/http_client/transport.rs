//! Pluggable transport underneath [`ApiClient`](super::ApiClient).
//!
//! The client decides headers, body and error semantics; a [`Transport`]
//! only moves bytes. [`ReqwestTransport`] is the production implementation.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::{error, warn};

use super::config::ApiConfig;
use crate::error::{Error, NetworkError, Result};

/// One outbound HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Fully joined URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<Bytes>,
}

/// A fully received HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Reason phrase; may be empty.
    ///
    /// Filled in by the [`Transport`]. [`ReqwestTransport`] always uses the
    /// canonical reason for the code, since `reqwest` does not expose the
    /// phrase the server sent.
    pub status_text: String,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Bytes,
}

impl RawResponse {
    /// Creates a response whose status text is the canonical reason phrase.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Overrides the reason phrase.
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }
}

/// Sends exactly one request and returns the response, or a transport error
/// when no response was received.
///
/// Implementations own [`RawResponse::status_text`]; it is used as the error
/// message when a failed response has no usable body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request.
    async fn send(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    max_response_size: usize,
}

impl ReqwestTransport {
    /// Builds the underlying `reqwest` client from the configuration.
    ///
    /// No request timeout is set here; [`ApiClient`](super::ApiClient) owns
    /// the optional whole-call timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().gzip(true).user_agent(&config.user_agent);

        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_response_size: config.max_response_size,
        })
    }

    async fn read_body_with_limit(&self, response: Response, url: &str) -> Result<Bytes> {
        let max_size = self.max_response_size;

        if let Some(content_length) = response.content_length()
            && content_length > max_size as u64
        {
            warn!(
                url = %url,
                content_length = content_length,
                max_size = max_size,
                "Response exceeds size limit (Content-Length check)"
            );
            return Err(Error::invalid_request(format!(
                "Response size {content_length} bytes exceeds limit {max_size} bytes"
            )));
        }

        #[allow(clippy::cast_possible_truncation)]
        let initial_capacity = response
            .content_length()
            .map_or(8 * 1024, |len| std::cmp::min(len as usize, max_size));

        let mut stream = response.bytes_stream();
        let mut body = Vec::with_capacity(initial_capacity);

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                error!(error = %e, "Failed to read response chunk");
                Error::from(NetworkError::Body(e.to_string()))
            })?;

            if body.len().saturating_add(chunk.len()) > max_size {
                warn!(
                    url = %url,
                    max_size = max_size,
                    "Response exceeds size limit during streaming"
                );
                return Err(Error::invalid_request(format!(
                    "Response size exceeds limit {max_size} bytes (streaming)"
                )));
            }

            body.extend_from_slice(&chunk);
        }

        Ok(Bytes::from(body))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, url = %request.url, "HTTP request send failed");
            Error::from(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        // An oversized error body is unusable, not a failure of its own.
        let body = match self.read_body_with_limit(response, &request.url).await {
            Ok(body) => body,
            Err(Error::InvalidRequest(reason)) if !status.is_success() => {
                warn!(
                    url = %request.url,
                    status = status.as_u16(),
                    reason = %reason,
                    "Discarding oversized error response body"
                );
                Bytes::new()
            }
            Err(e) => return Err(e),
        };

        Ok(RawResponse {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}
