//! Session credential storage for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard reads the token and role before every transition, the
//! request interceptor reads the token for every outgoing call, and the
//! session-expiry handler clears it. All of them receive the same
//! [`SessionContext`] explicitly instead of reaching for `localStorage`
//! directly, so tests can swap in a [`MemoryStore`].
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a read failure (private mode, disabled
//! storage) reads as "absent" and a write failure is logged and dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the cached user profile.
pub const USER_INFO_KEY: &str = "userInfo";
/// Storage key for the user's role tag.
pub const USER_ROLE_KEY: &str = "userRole";
/// Role reported when none is stored.
pub const GUEST_ROLE: &str = "guest";

/// String key-value store backing the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`-backed store.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("session: localStorage unavailable, dropping write of {key}");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("session: failed to write {key}: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("session: failed to remove {key}: {err:?}");
            }
        }
    }
}

/// Shared handle over the session store.
///
/// Cloning is cheap; all clones observe the same underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("logged_in", &self.is_logged_in())
            .field("role", &self.role())
            .finish()
    }
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Context over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    /// Context over `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStore))
    }

    /// The stored bearer token. An empty string counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// The stored role, or [`GUEST_ROLE`] when none is stored.
    pub fn role(&self) -> String {
        self.store
            .get(USER_ROLE_KEY)
            .filter(|role| !role.is_empty())
            .unwrap_or_else(|| GUEST_ROLE.to_owned())
    }

    /// Raw cached user profile, as stored at login.
    pub fn user_info(&self) -> Option<String> {
        self.store.get(USER_INFO_KEY)
    }

    /// Record a successful login.
    pub fn sign_in(&self, token: &str, role: Option<&str>, user_info: Option<&str>) {
        self.store.set(TOKEN_KEY, token);
        match role {
            Some(role) => self.store.set(USER_ROLE_KEY, role),
            None => self.store.remove(USER_ROLE_KEY),
        }
        match user_info {
            Some(info) => self.store.set(USER_INFO_KEY, info),
            None => self.store.remove(USER_INFO_KEY),
        }
    }

    /// Explicit logout: forget everything the session stored.
    pub fn sign_out(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_INFO_KEY);
        self.store.remove(USER_ROLE_KEY);
    }

    /// Drop the credential and cached profile after the backend reported the
    /// session invalid. The role entry is left in place. Safe to repeat.
    pub fn clear_expired(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_INFO_KEY);
    }
}
