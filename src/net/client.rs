//! HTTP client wrapping every API call in the interceptor pair.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with an abort-based
//! timeout. Other builds: the transport reports [`ClientError::Unavailable`],
//! while the interceptor pipeline itself stays usable and testable.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses and transport failures surface as [`ClientError`] after
//! passing through the response error step. There are no retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;

use super::error::ClientError;
use super::interceptor::{AuthInterceptor, SessionExpiryInterceptor};
use super::types::{ApiResponse, Method, RequestConfig};
use crate::config::AppConfig;

/// API client with one request and one response interceptor.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: AppConfig,
    auth: AuthInterceptor,
    expiry: SessionExpiryInterceptor,
}

impl ApiClient {
    pub fn new(config: AppConfig, auth: AuthInterceptor, expiry: SessionExpiryInterceptor) -> Self {
        Self { config, auth, expiry }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Absolute URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        build_url(&self.config.api_base_url, path)
    }

    /// Run the request step, or the request error step if the request could
    /// not be built.
    ///
    /// # Errors
    ///
    /// Returns the upstream error unchanged.
    pub fn prepare(
        &self,
        request: Result<RequestConfig, ClientError>,
    ) -> Result<RequestConfig, ClientError> {
        match request {
            Ok(config) => Ok(self.auth.on_request(config)),
            Err(error) => self.auth.on_request_error(error),
        }
    }

    /// Run the response step on a transport outcome.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub fn complete(
        &self,
        outcome: Result<ApiResponse, ClientError>,
    ) -> Result<ApiResponse, ClientError> {
        match outcome {
            Ok(response) => Ok(self.expiry.on_response(response)),
            Err(error) => self.expiry.on_response_error(error),
        }
    }

    /// Send a request through the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ClientError::Http`] for a non-2xx status.
    pub async fn send(&self, request: RequestConfig) -> Result<ApiResponse, ClientError> {
        self.execute(Ok(request)).await
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(RequestConfig::get(path)).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the body cannot be serialized, otherwise
    /// see [`ApiClient::send`].
    pub async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        self.execute(RequestConfig::json(Method::Post, path, body))
            .await
    }

    async fn execute(
        &self,
        request: Result<RequestConfig, ClientError>,
    ) -> Result<ApiResponse, ClientError> {
        let request = self.prepare(request)?;
        let outcome = self.transport(&request).await;
        self.complete(outcome)
    }

    #[cfg(feature = "csr")]
    async fn transport(&self, request: &RequestConfig) -> Result<ApiResponse, ClientError> {
        use gloo_net::http::Request;
        use web_sys::{AbortController, RequestCredentials};

        let url = self.url_for(&request.path);
        let timeout_ms = self.config.timeout_ms;
        let controller = AbortController::new()
            .map_err(|_| ClientError::Config("failed to initialize request timeout".to_owned()))?;
        let signal = controller.signal();
        let _timeout =
            gloo_timers::callback::Timeout::new(timeout_ms, move || controller.abort());

        let credentials = if self.config.with_credentials {
            RequestCredentials::Include
        } else {
            RequestCredentials::SameOrigin
        };
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(credentials)
        .abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match &request.body {
            Some(body) => builder.body(body.as_str()),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Build(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ClientError::from_transport(&e.to_string(), timeout_ms))?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ClientError::Http { status });
        }
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::from_transport(&e.to_string(), timeout_ms))?;
        Ok(ApiResponse { status, body })
    }

    #[cfg(not(feature = "csr"))]
    async fn transport(&self, request: &RequestConfig) -> Result<ApiResponse, ClientError> {
        log::debug!("no browser transport for {}", self.url_for(&request.path));
        Err(ClientError::Unavailable)
    }
}

/// Join a base address and a request path. Absolute URLs pass through.
pub fn build_url(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
