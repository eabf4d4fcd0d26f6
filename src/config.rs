//! Client configuration: API base address, request timeout, credential mode,
//! and the session-expiry grace period.
//!
//! Defaults are compiled in, build-time environment variables override them,
//! and a `window.PORTAL_CONFIG` object (browser builds only) overrides both so
//! static deployments can repoint the API without rebuilding. Values here are
//! public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// Default API base address.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;
/// Delay between a session-invalid response and the forced logout.
pub const DEFAULT_LOGOUT_DELAY_MS: u32 = 500;

/// Frontend configuration shared by the HTTP client and the interceptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_ms: u32,
    /// Send cookies on cross-origin requests.
    pub with_credentials: bool,
    pub logout_delay_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            with_credentials: false,
            logout_delay_ms: DEFAULT_LOGOUT_DELAY_MS,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Load defaults, then build-time overrides, then runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        apply_overrides(&mut config, build_time_overrides());
        if let Some(runtime) = runtime_overrides() {
            apply_overrides(&mut config, runtime);
        }
        config
    }
}

/// Partial configuration read from one override source.
#[derive(Debug, Default)]
struct Overrides {
    api_base_url: Option<String>,
    timeout_ms: Option<u32>,
    with_credentials: Option<bool>,
    logout_delay_ms: Option<u32>,
    log_level: Option<log::Level>,
}

fn apply_overrides(config: &mut AppConfig, overrides: Overrides) {
    if let Some(value) = overrides.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = overrides.timeout_ms {
        config.timeout_ms = value;
    }
    if let Some(value) = overrides.with_credentials {
        config.with_credentials = value;
    }
    if let Some(value) = overrides.logout_delay_ms {
        config.logout_delay_ms = value;
    }
    if let Some(value) = overrides.log_level {
        config.log_level = value;
    }
}

fn build_time_overrides() -> Overrides {
    overrides_from(|key| match key {
        "api_base_url" => option_env!("PORTAL_API_BASE_URL").map(str::to_owned),
        "timeout_ms" => option_env!("PORTAL_TIMEOUT_MS").map(str::to_owned),
        "with_credentials" => option_env!("PORTAL_WITH_CREDENTIALS").map(str::to_owned),
        "logout_delay_ms" => option_env!("PORTAL_LOGOUT_DELAY_MS").map(str::to_owned),
        "log_level" => option_env!("PORTAL_LOG_LEVEL").map(str::to_owned),
        _ => None,
    })
}

/// Build overrides from a key lookup, discarding blank or unparsable values.
fn overrides_from(lookup: impl Fn(&str) -> Option<String>) -> Overrides {
    Overrides {
        api_base_url: normalize(lookup("api_base_url")),
        timeout_ms: parse(lookup("timeout_ms")).filter(|ms| *ms > 0),
        with_credentials: parse(lookup("with_credentials")),
        logout_delay_ms: parse(lookup("logout_delay_ms")),
        log_level: parse(lookup("log_level")),
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    normalize(value).and_then(|raw| raw.parse::<T>().ok())
}

#[cfg(feature = "csr")]
fn runtime_overrides() -> Option<Overrides> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let object = js_sys::Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if object.is_null() || object.is_undefined() {
        return None;
    }
    Some(overrides_from(|key| {
        let value = js_sys::Reflect::get(&object, &JsValue::from_str(key)).ok()?;
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
            .or_else(|| value.as_bool().map(|b| b.to_string()))
    }))
}

#[cfg(not(feature = "csr"))]
fn runtime_overrides() -> Option<Overrides> {
    None
}
