//! Reusable UI components.

pub mod routed_view;
