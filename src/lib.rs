//! # exproperty-ui
//!
//! Browser-side helpers for the Exproperty listing site, compiled to
//! WebAssembly and loaded on every server-rendered page.
//!
//! - [`widgets::enquiry`] - WhatsApp/phone click beacons to `/api/enquiry`
//! - [`widgets::upload_preview`] - thumbnails for files picked in an upload form
//! - [`widgets::share`] - Web Share API with clipboard fallback
//! - [`widgets::lazy_images`] - `data-src` images loaded near the viewport
//! - [`widgets::price_label`] - slider price labels in lakhs/crores
//! - [`widgets::filter_panel`] - mobile filter sidebar toggle
//!
//! Build with `--features hydrate` for the browser; host builds keep only
//! the pure logic so it can be unit tested with `cargo test`.

pub mod config;
pub mod error;
pub mod net;
pub mod util;
pub mod widgets;

#[cfg(feature = "hydrate")]
mod exports;

#[cfg(feature = "hydrate")]
pub use exports::start;
