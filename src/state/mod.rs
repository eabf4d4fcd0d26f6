//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session lives here; route and request handling read it through an
//! injected [`session::SessionContext`].

pub mod session;
