//! JavaScript entry points.
//!
//! ARCHITECTURE
//! ============
//! `start` runs when the wasm module is instantiated: it installs the panic
//! hook, loads page configuration, brings up console logging and attaches the
//! page-wide listeners. The remaining exports keep the names the server
//! templates already call from inline handlers (`onchange="previewImages(this)"`
//! and friends), so templates need no changes.
//!
//! Every export is best-effort: failures are logged, never thrown to JS.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config;
use crate::util::dom::{self, ListenerHandle};
use crate::util::price::{PriceUnit, listing_price_label, parse_slider_value, slider_value_from_f64};
use crate::widgets::{enquiry, filter_panel, lazy_images, price_label, share, upload_preview};

thread_local! {
    /// Page-lifetime listeners registered at boot.
    static BOOT_LISTENERS: RefCell<Vec<ListenerHandle>> = const { RefCell::new(Vec::new()) };
}

fn keep(handle: ListenerHandle) {
    log::debug!("{} listener attached", handle.event());
    BOOT_LISTENERS.with(|listeners| listeners.borrow_mut().push(handle));
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, config_err) = config::load();
    if console_log::init_with_level(cfg.log_level()).is_err() {
        log::debug!("console logger already installed");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using default ui config");
    }
    config::install(cfg.clone());

    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("ui helpers not attached: {err}");
            return;
        }
    };
    match enquiry::attach(&doc, &cfg) {
        Ok(handle) => keep(handle),
        Err(err) => log::warn!("enquiry tracking disabled: {err}"),
    }
    match lazy_images::start_when_ready(&cfg) {
        Ok(Some(handle)) => keep(handle),
        Ok(None) => {}
        Err(err) => log::warn!("lazy images disabled: {err}"),
    }
    log::info!("exproperty ui ready");
}

#[wasm_bindgen(js_name = trackEnquiry)]
pub fn track_enquiry(property_id: &str, action: &str) {
    enquiry::track_raw(property_id, action);
}

#[wasm_bindgen(js_name = previewImages)]
pub fn preview_images(input: JsValue) {
    match input.dyn_into::<web_sys::HtmlInputElement>() {
        Ok(input) => upload_preview::preview(&input),
        Err(_) => log::warn!("previewImages expects an <input type=file> element"),
    }
}

#[wasm_bindgen(js_name = shareProperty)]
pub fn share_property(url: String, title: String) {
    share::share(share::ShareTarget { url, title });
}

#[wasm_bindgen(js_name = updatePriceLabel)]
pub fn update_price_label(value: &JsValue, target_id: &str) {
    let parsed = value
        .as_f64()
        .and_then(slider_value_from_f64)
        .or_else(|| value.as_string().and_then(|raw| parse_slider_value(&raw)));
    match parsed {
        Some(value) => {
            price_label::update(value, target_id);
        }
        None => log::warn!("price label {target_id}: ignoring non-numeric value {value:?}"),
    }
}

#[wasm_bindgen(js_name = toggleFilter)]
pub fn toggle_filter() {
    filter_panel::toggle();
}

#[wasm_bindgen(js_name = formatListingPrice)]
pub fn format_listing_price(amount: f64, unit: &str) -> String {
    listing_price_label(amount, PriceUnit::parse(unit))
}
