//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` sends requests, `interceptor` holds the request/response steps
//! every call passes through, `types` defines the request/response shapes, and
//! `error` the transport failures.

pub mod client;
pub mod error;
pub mod interceptor;
pub mod types;

pub use client::ApiClient;
pub use error::ClientError;
pub use interceptor::{AuthInterceptor, SessionExpiryInterceptor};
pub use types::{ApiResponse, Method, RequestConfig};
