//! Thin `web-sys` helpers shared by the widgets. Browser builds only.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every DOM lookup the widgets make may legitimately miss (a page without a
//! share button, a form without a preview container). Lookups therefore
//! return `Option` and callers skip silently; only "no window/document at
//! all" is an error.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use crate::error::{UiError, js_error_message};

/// The page document.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] / [`UiError::NoDocument`] outside a page.
pub fn document() -> Result<web_sys::Document, UiError> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

/// Look up an element by id, `None` when absent or outside a page.
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    match document() {
        Ok(doc) => doc.get_element_by_id(id),
        Err(err) => {
            log::debug!("lookup #{id} skipped: {err}");
            None
        }
    }
}

/// Whether `name` is a property of `target` (capability sniffing).
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// An event listener registered on one target.
///
/// The listener stays attached for as long as the handle lives; dropping the
/// handle removes it and frees the closure.
pub struct ListenerHandle {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerHandle {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Js`] if the browser refuses the registration.
    pub fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("remove {} listener failed: {}", self.event, js_error_message(&err));
        }
    }
}
