//! Page-level configuration for the browser helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates may embed a JSON object in
//! `<script type="application/json" id="exproperty-ui-config">` to override
//! any identifier, class, endpoint or timing below. Missing fields keep their
//! defaults, which match the markup the site ships today.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::cell::RefCell;

use serde::Deserialize;

use crate::error::UiError;

pub const CONFIG_ELEMENT_ID: &str = "exproperty-ui-config";

pub const DEFAULT_ENQUIRY_ENDPOINT: &str = "/api/enquiry";
pub const DEFAULT_COPIED_FEEDBACK_MS: u32 = 2000;
pub const DEFAULT_LAZY_ROOT_MARGIN_PX: u32 = 100;
/// Matches the server's 16 MiB request cap.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `log` level name used for the console logger.
    pub log_level: String,

    pub enquiry_endpoint: String,
    pub whatsapp_class: String,
    pub phone_class: String,
    pub property_id_attribute: String,

    pub preview_container_id: String,
    pub preview_wrapper_class: String,
    pub preview_image_class: String,
    pub preview_invalid_class: String,
    pub allowed_upload_extensions: Vec<String>,
    pub max_upload_bytes: u64,

    pub share_button_id: String,
    pub copied_markup: String,
    pub copied_feedback_ms: u32,

    pub deferred_source_attribute: String,
    pub lazy_root_margin_px: u32,

    pub filter_sidebar_id: String,
    pub hidden_class: String,
    pub visible_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            enquiry_endpoint: DEFAULT_ENQUIRY_ENDPOINT.to_owned(),
            whatsapp_class: "whatsapp-button".to_owned(),
            phone_class: "phone-button".to_owned(),
            property_id_attribute: "data-property-id".to_owned(),
            preview_container_id: "imagePreviewContainer".to_owned(),
            preview_wrapper_class: "d-inline-block position-relative me-2 mb-2".to_owned(),
            preview_image_class: "img-upload-preview".to_owned(),
            preview_invalid_class: "is-invalid".to_owned(),
            allowed_upload_extensions: [".jpg", ".jpeg", ".png", ".webp"].map(str::to_owned).to_vec(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            share_button_id: "shareBtn".to_owned(),
            copied_markup: r#"<i class="bi bi-check"></i> Link Copied!"#.to_owned(),
            copied_feedback_ms: DEFAULT_COPIED_FEEDBACK_MS,
            deferred_source_attribute: "data-src".to_owned(),
            lazy_root_margin_px: DEFAULT_LAZY_ROOT_MARGIN_PX,
            filter_sidebar_id: "filterSidebar".to_owned(),
            hidden_class: "d-none".to_owned(),
            visible_class: "d-block".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// `rootMargin` string for the lazy-image observer.
    pub fn lazy_root_margin(&self) -> String {
        format!("{}px", self.lazy_root_margin_px)
    }

    /// CSS selector for images still waiting on their deferred source.
    pub fn lazy_image_selector(&self) -> String {
        format!("img[{}]", self.deferred_source_attribute)
    }
}

thread_local! {
    static CURRENT: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

/// Replace the page configuration. Called once at boot.
pub fn install(config: UiConfig) {
    CURRENT.with(|current| *current.borrow_mut() = config);
}

/// Snapshot of the installed configuration.
pub fn current() -> UiConfig {
    CURRENT.with(|current| current.borrow().clone())
}

/// Read overrides from the page's config element.
///
/// Returns the defaults alongside the parse error when the element holds
/// malformed JSON, so boot can continue and report it once logging is up.
pub fn load() -> (UiConfig, Option<UiError>) {
    match embedded_json() {
        None => (UiConfig::default(), None),
        Some(raw) => match UiConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (UiConfig::default(), Some(err)),
        },
    }
}

fn embedded_json() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window().and_then(|w| w.document())?;
        let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
        if raw.trim().is_empty() { None } else { Some(raw) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
