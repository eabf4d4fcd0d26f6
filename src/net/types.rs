//! Request and response shapes passed through the interceptor pipeline.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ClientError;

/// HTTP method of an outgoing request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

/// Outgoing request as seen by the request interceptor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: Method,
    /// Path relative to the configured base address, or an absolute URL.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestConfig {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_owned(),
            ..Self::default()
        }
    }

    /// JSON request with a `Content-Type` header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if `body` cannot be serialized.
    pub fn json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Self, ClientError> {
        let payload = serde_json::to_string(body).map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(Self {
            method,
            path: path.to_owned(),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: Some(payload),
        })
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value));
    }
}

/// Response as seen by the response interceptor. The body is kept raw so a
/// malformed payload still reaches the caller untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the HTTP status is 2xx.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Application-level `code` field of a JSON object body. Missing,
    /// malformed, or non-integer codes read as `None`.
    pub fn app_code(&self) -> Option<i64> {
        let body: Value = serde_json::from_str(&self.body).ok()?;
        body.get("code")?.as_i64()
    }
}
