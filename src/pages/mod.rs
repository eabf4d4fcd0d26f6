//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are placeholders; access control happens before any of them is
//! built (see `components::routed_view`).

pub mod about_me;
pub mod home;
pub mod login;
pub mod register;
pub mod status;
