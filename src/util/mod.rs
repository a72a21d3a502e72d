//! Utility helpers shared across the widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser glue (`dom`) from pure formatting logic
//! (`price`) so the latter stays testable on the host.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod price;
