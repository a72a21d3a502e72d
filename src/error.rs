//! Error type shared by the browser glue.
//!
//! ERROR HANDLING
//! ==============
//! Internal steps return `Result<_, UiError>` and propagate with `?`. The
//! exported entry points are best-effort: they log the error and return
//! normally so a failed beacon or copy never reaches the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("enquiry request failed: {0}")]
    Request(String),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Best-effort human-readable text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
