use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument, warn};

use super::builder::ApiClient;
use super::headers::build_headers;
use super::transport::HttpRequest;

/// HTTP methods the API client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl ApiMethod {
    /// Returns true if a 204 response short-circuits to `null`.
    pub fn allows_no_content(self) -> bool {
        matches!(self, ApiMethod::Put | ApiMethod::Delete)
    }

    fn as_method(self) -> Method {
        match self {
            ApiMethod::Get => Method::GET,
            ApiMethod::Post => Method::POST,
            ApiMethod::Put => Method::PUT,
            ApiMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_method().as_str())
    }
}

/// One call's worth of method, path and optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: ApiMethod,
    path: String,
    body: Option<Bytes>,
}

impl ApiRequest {
    /// GET `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::without_body(ApiMethod::Get, path)
    }

    /// DELETE `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::without_body(ApiMethod::Delete, path)
    }

    /// POST `body` as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `body` cannot be serialized.
    pub fn post<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::with_body(ApiMethod::Post, path, body)
    }

    /// PUT `body` as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `body` cannot be serialized.
    pub fn put<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::with_body(ApiMethod::Put, path, body)
    }

    fn without_body(method: ApiMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_body<B: Serialize + ?Sized>(
        method: ApiMethod,
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| Error::invalid_request(format!("JSON serialization failed: {e}")))?;
        Ok(Self {
            method,
            path: path.into(),
            body: Some(Bytes::from(bytes)),
        })
    }

    /// The request method.
    pub fn method(&self) -> ApiMethod {
        self.method
    }

    /// The path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The serialized JSON body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl ApiClient {
    /// Executes one request and returns the parsed JSON body.
    ///
    /// Exactly one network call is made and nothing is retried. PUT and
    /// DELETE answered with 204 yield `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] for an empty path (no call is made)
    /// - [`Error::Network`] when no response was received
    /// - [`Error::Api`] for a non-2xx status, with the normalized message
    /// - [`Error::Parse`] when a successful body is not valid JSON
    /// - [`Error::Timeout`] when the configured timeout elapses
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(method = %request.method(), path = %request.path())
    )]
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        if request.path.is_empty() {
            return Err(Error::invalid_request("Request path must not be empty"));
        }

        match self.config().timeout {
            Some(limit) => {
                let url = self.url_for(&request.path);
                tokio::time::timeout(limit, self.execute_once(request))
                    .await
                    .map_err(|_elapsed| {
                        warn!(url = %url, timeout_ms = %limit.as_millis(), "API request timed out");
                        Error::timeout(format!(
                            "Request to {url} timed out after {}ms",
                            limit.as_millis()
                        ))
                    })?
            }
            None => self.execute_once(request).await,
        }
    }

    async fn execute_once(&self, request: ApiRequest) -> Result<Value> {
        let headers = build_headers(self.session()).await;
        let url = self.url_for(&request.path);

        if self.config().verbose {
            match request.body() {
                Some(body) => debug!(
                    url = %url,
                    body = %String::from_utf8_lossy(body),
                    "Sending API request with body"
                ),
                None => debug!(url = %url, "Sending API request without body"),
            }
        }

        let response = self
            .transport()
            .send(HttpRequest {
                method: request.method.as_method(),
                url: url.clone(),
                headers,
                body: request.body,
            })
            .await?;

        Self::process_response(request.method, response, &url)
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(ApiRequest::get(path)).await
    }

    /// POST `data` as JSON to `path`.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, data: &B) -> Result<Value> {
        self.execute(ApiRequest::post(path, data)?).await
    }

    /// PUT `data` as JSON to `path`. Returns `Value::Null` on 204.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, data: &B) -> Result<Value> {
        self.execute(ApiRequest::put(path, data)?).await
    }

    /// DELETE `path`. Returns `Value::Null` on 204.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// GET `path` and deserialize the body into `T`.
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.get(path).await?)
    }

    /// POST `data` to `path` and deserialize the body into `T`.
    pub async fn post_as<B, T>(&self, path: &str, data: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode(self.post(path, data).await?)
    }

    /// PUT `data` to `path` and deserialize the body into `T`.
    ///
    /// A 204 arrives as `null`, so use `Option<T>` or `()` when the server
    /// may answer without content.
    pub async fn put_as<B, T>(&self, path: &str, data: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode(self.put(path, data).await?)
    }

    /// DELETE `path` and deserialize the body into `T`.
    pub async fn delete_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.delete(path).await?)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(Error::from)
}
