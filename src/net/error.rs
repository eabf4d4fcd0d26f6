//! Transport error type shared by the HTTP client and interceptors.
//!
//! ERROR HANDLING
//! ==============
//! Interceptors never construct or swallow these; a transport failure passes
//! through the response error step unchanged and reaches the original caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::net::client::ApiClient::send`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The server could not be reached.
    #[error("unable to reach the server: {0}")]
    Network(String),
    /// The request was aborted after the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Http { status: u16 },
    /// The response body did not decode into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request could not be assembled (bad header, unencodable body).
    #[error("failed to build request: {0}")]
    Build(String),
    /// No browser transport is available in this build.
    #[error("not available outside the browser")]
    Unavailable,
    /// Client configuration is unusable.
    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Classify a raw transport failure message, detecting aborted requests.
    pub fn from_transport(message: &str, timeout_ms: u32) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("timeout") || lowered.contains("abort") {
            Self::Timeout(timeout_ms)
        } else {
            Self::Network(message.to_owned())
        }
    }
}
