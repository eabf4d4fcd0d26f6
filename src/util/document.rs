//! Document-level side effects (page title).
//!
//! Requires a browser environment; non-browser builds no-op.

/// Set `document.title`.
pub fn set_title(title: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("document title (no browser): {title}");
    }
}
