//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, the document)
//! from routing and request logic to improve testability.

pub mod document;
pub mod scheduler;
