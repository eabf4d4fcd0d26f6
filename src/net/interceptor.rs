//! Request/response interceptors wrapped around every API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthInterceptor`] runs on each outgoing request and attaches the stored
//! bearer token. [`SessionExpiryInterceptor`] runs on each response and, when
//! the backend reports the session invalid, schedules a forced logout after a
//! short grace period. Both receive the [`SessionContext`] explicitly.
//!
//! ERROR HANDLING
//! ==============
//! Neither interceptor fails on its own. Errors arriving on their error
//! channels are returned unchanged; a malformed response body simply carries
//! no session-invalid code.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::error::ClientError;
use super::types::{ApiResponse, RequestConfig};
use crate::config::DEFAULT_LOGOUT_DELAY_MS;
use crate::router::table::LOGIN_PATH;
use crate::state::session::SessionContext;
use crate::util::scheduler::{Scheduler, TaskHandle};

/// Application `code` the backend sends when the session is expired or invalid.
pub const SESSION_INVALID_CODE: i64 = 10006;

/// Request header carrying the credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Attaches `Authorization: Bearer <token>` when a token is stored.
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    session: SessionContext,
}

impl AuthInterceptor {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Request step. Requests without a stored token pass through untouched.
    pub fn on_request(&self, mut config: RequestConfig) -> RequestConfig {
        if let Some(token) = self.session.token() {
            config.set_header(AUTHORIZATION_HEADER, format!("Bearer {token}"));
        }
        config
    }

    /// Request error step: the upstream error is forwarded as-is.
    ///
    /// # Errors
    ///
    /// Always returns `error`.
    pub fn on_request_error(&self, error: ClientError) -> Result<RequestConfig, ClientError> {
        Err(error)
    }
}

/// Watches responses for [`SESSION_INVALID_CODE`] and logs the user out.
#[derive(Clone)]
pub struct SessionExpiryInterceptor {
    session: SessionContext,
    scheduler: Rc<dyn Scheduler>,
    navigate: Rc<dyn Fn(&str)>,
    delay_ms: u32,
    coalesce: bool,
    pending: Rc<RefCell<Option<TaskHandle>>>,
}

impl fmt::Debug for SessionExpiryInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionExpiryInterceptor")
            .field("delay_ms", &self.delay_ms)
            .field("coalesce", &self.coalesce)
            .finish_non_exhaustive()
    }
}

impl SessionExpiryInterceptor {
    pub fn new(
        session: SessionContext,
        scheduler: Rc<dyn Scheduler>,
        navigate: impl Fn(&str) + 'static,
    ) -> Self {
        Self {
            session,
            scheduler,
            navigate: Rc::new(navigate),
            delay_ms: DEFAULT_LOGOUT_DELAY_MS,
            coalesce: false,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// When enabled, a session-invalid response arriving while a logout is
    /// already pending does not schedule another one.
    #[must_use]
    pub fn with_coalescing(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Response step. The response is always returned unmodified, so callers
    /// may briefly see the rejected payload before the redirect fires.
    pub fn on_response(&self, response: ApiResponse) -> ApiResponse {
        if response.app_code() == Some(SESSION_INVALID_CODE) {
            log::warn!("session invalid (code {SESSION_INVALID_CODE}), logging out");
            self.schedule_logout();
        }
        response
    }

    /// Response error step: transport errors are forwarded as-is.
    ///
    /// # Errors
    ///
    /// Always returns `error`.
    pub fn on_response_error(&self, error: ClientError) -> Result<ApiResponse, ClientError> {
        Err(error)
    }

    /// Schedule the clear-and-redirect after the grace period.
    pub fn schedule_logout(&self) -> TaskHandle {
        if self.coalesce {
            if let Some(handle) = self.pending.borrow().as_ref().filter(|h| h.is_pending()) {
                log::debug!("session expiry: logout already pending");
                return handle.clone();
            }
        }

        let session = self.session.clone();
        let navigate = self.navigate.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || expire_session(&session, navigate.as_ref())),
        );
        log::debug!("session expiry: logout scheduled in {} ms", self.delay_ms);
        *self.pending.borrow_mut() = Some(handle.clone());
        handle
    }

    /// Cancel a pending logout, if any. Returns whether one was pending.
    pub fn cancel_pending(&self) -> bool {
        match self.pending.borrow_mut().take() {
            Some(handle) if handle.is_pending() => {
                handle.cancel();
                true
            }
            _ => false,
        }
    }

    /// Clear the expired session and navigate to login immediately.
    pub fn handle_session_invalid(&self) {
        expire_session(&self.session, self.navigate.as_ref());
    }
}

/// Drop the credential and cached profile, then go to the login page.
/// Repeating it leaves the same state.
fn expire_session(session: &SessionContext, navigate: &dyn Fn(&str)) {
    session.clear_expired();
    navigate(LOGIN_PATH);
}
