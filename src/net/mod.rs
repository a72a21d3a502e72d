//! Network-facing types and request helpers.

pub mod api;
pub mod types;
