//! # portal-client
//!
//! Leptos + WASM routing and request-interception layer for the portal
//! single-page app.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`router`] | Static route table and the navigation guard |
//! | [`net`] | HTTP client and the request/response interceptor pair |
//! | [`state`] | Injected session context over a key-value store |
//! | [`util`] | Deferred-task scheduler and document helpers |
//! | [`config`] | API base address, timeout, credential mode, logout delay |
//! | [`app`] / [`components`] / [`pages`] | Leptos shell, guarded outlet, placeholder pages |
//!
//! Browser-only code is gated behind the `csr` feature; everything else
//! builds and tests on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::AppConfig::load().log_level;
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
