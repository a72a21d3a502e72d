//! Page behaviors attached to server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget is independent: no widget calls another and none share state
//! beyond the installed [`crate::config::UiConfig`]. Decision logic is pure
//! and host-testable; the `web-sys` glue sits behind the `hydrate` feature.

pub mod enquiry;
pub mod filter_panel;
pub mod lazy_images;
pub mod price_label;
pub mod share;
pub mod upload_preview;
