//! Client-side routing: the static route table and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` maps locations to views, `guard` decides whether a transition may
//! proceed. The Leptos side (`components::routed_view`) consumes both.

pub mod guard;
pub mod table;

pub use guard::{Navigation, NavigationGuard};
pub use table::{ResolvedRoute, Route, RouteDescriptor, ViewId, resolve};
