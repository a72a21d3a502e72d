//! Enquiry-click analytics beacons.
//!
//! ARCHITECTURE
//! ============
//! One delegated `click` listener sits on a rendering root. Each click is
//! turned into a [`ClickPath`] (target plus ancestors), classified by the
//! pure [`classify_click`], and every resulting event is handed to [`track`],
//! which fires a best-effort POST and forgets about it.
//!
//! The WhatsApp and phone markers are checked independently, so an element
//! carrying both classes produces two beacons.

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use crate::config::UiConfig;
use crate::net::types::{EnquiryAction, EnquiryEvent};

/// Class list and property id of one element on a click path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementInfo {
    pub classes: Vec<String>,
    pub property_id: Option<String>,
}

impl ElementInfo {
    pub fn new(class_attr: &str, property_id: Option<&str>) -> Self {
        Self {
            classes: class_attr.split_whitespace().map(str::to_owned).collect(),
            property_id: property_id.map(str::to_owned),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The clicked element followed by its ancestors, nearest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickPath(pub Vec<ElementInfo>);

impl ClickPath {
    /// Nearest element carrying `class`, like `Element.closest(".class")`.
    pub fn closest(&self, class: &str) -> Option<&ElementInfo> {
        self.0.iter().find(|el| el.has_class(class))
    }
}

/// Marker classes that identify contact buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnquiryMarkers {
    pub whatsapp_class: String,
    pub phone_class: String,
}

impl EnquiryMarkers {
    pub fn from_config(cfg: &UiConfig) -> Self {
        Self { whatsapp_class: cfg.whatsapp_class.clone(), phone_class: cfg.phone_class.clone() }
    }

    fn checks(&self) -> [(&str, EnquiryAction); 2] {
        [
            (self.whatsapp_class.as_str(), EnquiryAction::WhatsappClick),
            (self.phone_class.as_str(), EnquiryAction::PhoneClick),
        ]
    }
}

impl Default for EnquiryMarkers {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

/// Events a click on `path` should report, WhatsApp first.
///
/// Only the nearest matching element is consulted per marker; if it has no
/// property id the marker yields nothing.
pub fn classify_click(path: &ClickPath, markers: &EnquiryMarkers) -> Vec<EnquiryEvent> {
    markers
        .checks()
        .into_iter()
        .filter_map(|(class, action)| {
            let el = path.closest(class)?;
            EnquiryEvent::new(el.property_id.as_deref()?, action)
        })
        .collect()
}

/// Fire one enquiry beacon in the background. Failures are logged and dropped.
pub fn track(event: EnquiryEvent) {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = crate::config::current().enquiry_endpoint;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::net::api::post_enquiry(&endpoint, &event).await {
                log::debug!("enquiry beacon for {} dropped: {err}", event.property_id);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("enquiry {} for {} (no browser)", event.action, event.property_id);
    }
}

/// String-typed entry point used by inline template handlers.
///
/// Returns the event that was sent, or `None` when the input was rejected.
pub fn track_raw(property_id: &str, action: &str) -> Option<EnquiryEvent> {
    let action = match action.parse::<EnquiryAction>() {
        Ok(action) => action,
        Err(err) => {
            log::warn!("{err}");
            return None;
        }
    };
    let Some(event) = EnquiryEvent::new(property_id, action) else {
        log::warn!("enquiry {action} ignored: empty property id");
        return None;
    };
    track(event.clone());
    Some(event)
}

/// Build the click path for a DOM event's target.
#[cfg(feature = "hydrate")]
fn click_path(event: &web_sys::Event, property_id_attribute: &str) -> ClickPath {
    use wasm_bindgen::JsCast;

    let mut path = Vec::new();
    let mut node = event.target().and_then(|t| t.dyn_ref::<web_sys::Element>().cloned());
    while let Some(el) = node {
        let classes = el.get_attribute("class").unwrap_or_default();
        path.push(ElementInfo::new(&classes, el.get_attribute(property_id_attribute).as_deref()));
        node = el.parent_element();
    }
    ClickPath(path)
}

/// Register the delegated click listener on `root`.
///
/// # Errors
///
/// Returns [`crate::error::UiError::Js`] if the listener cannot be added.
#[cfg(feature = "hydrate")]
pub fn attach(
    root: &web_sys::EventTarget,
    cfg: &UiConfig,
) -> Result<crate::util::dom::ListenerHandle, crate::error::UiError> {
    let markers = EnquiryMarkers::from_config(cfg);
    let attribute = cfg.property_id_attribute.clone();
    crate::util::dom::ListenerHandle::attach(root, "click", move |event| {
        for enquiry in classify_click(&click_path(&event, &attribute), &markers) {
            track(enquiry);
        }
    })
}
