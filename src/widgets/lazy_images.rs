//! Deferred image loading.
//!
//! Images rendered as `<img data-src="...">` get their real `src` once they
//! come within the configured margin of the viewport. Each image is revealed
//! at most once and unobserved right after. Without `IntersectionObserver`
//! every image is revealed on the spot.
//!
//! Only images present at the initial scan are covered.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

/// An element whose source is held back in a deferred attribute.
pub trait DeferredImage {
    fn deferred_source(&self, attribute: &str) -> Option<String>;
    fn set_source(&self, src: &str);
    fn clear_deferred(&self, attribute: &str);
}

/// Move the deferred source into `src`. Returns `false` when there was
/// nothing to move, so a second call on the same element changes nothing.
pub fn reveal<I: DeferredImage + ?Sized>(image: &I, attribute: &str) -> bool {
    let Some(src) = image.deferred_source(attribute) else {
        return false;
    };
    image.set_source(&src);
    image.clear_deferred(attribute);
    true
}

/// Observer callback body: reveal intersecting images and stop watching them.
///
/// Returns how many images were revealed.
pub fn handle_intersections<'a, I, U>(
    entries: impl IntoIterator<Item = (bool, &'a I)>,
    attribute: &str,
    mut unobserve: U,
) -> usize
where
    I: DeferredImage + 'a,
    U: FnMut(&I),
{
    let mut revealed = 0;
    for (intersecting, image) in entries {
        if !intersecting {
            continue;
        }
        if reveal(image, attribute) {
            revealed += 1;
        }
        unobserve(image);
    }
    revealed
}

/// Fallback when the browser cannot observe intersections.
pub fn reveal_all<'a, I: DeferredImage + 'a>(images: impl IntoIterator<Item = &'a I>, attribute: &str) -> usize {
    images.into_iter().filter(|image| reveal(*image, attribute)).count()
}

#[cfg(feature = "hydrate")]
impl DeferredImage for web_sys::Element {
    fn deferred_source(&self, attribute: &str) -> Option<String> {
        self.get_attribute(attribute)
    }

    fn set_source(&self, src: &str) {
        if let Err(err) = self.set_attribute("src", src) {
            log::debug!("lazy image src rejected: {}", crate::error::js_error_message(&err));
        }
    }

    fn clear_deferred(&self, attribute: &str) {
        if let Err(err) = self.remove_attribute(attribute) {
            log::debug!("lazy image {attribute} not cleared: {}", crate::error::js_error_message(&err));
        }
    }
}

/// Run the initial scan once the document is ready.
///
/// # Errors
///
/// Returns an error when there is no document or the ready listener cannot be
/// registered.
#[cfg(feature = "hydrate")]
pub fn start_when_ready(
    cfg: &crate::config::UiConfig,
) -> Result<Option<crate::util::dom::ListenerHandle>, crate::error::UiError> {
    let doc = crate::util::dom::document()?;
    if doc.ready_state() != "loading" {
        scan(cfg)?;
        return Ok(None);
    }
    let cfg = cfg.clone();
    let handle = crate::util::dom::ListenerHandle::attach(&doc, "DOMContentLoaded", move |_event| {
        if let Err(err) = scan(&cfg) {
            log::warn!("lazy image scan failed: {err}");
        }
    })?;
    Ok(Some(handle))
}

/// Select every deferred image and either observe or reveal it.
///
/// Returns how many images were revealed immediately (zero when observing).
///
/// # Errors
///
/// Returns an error when the selector or observer construction fails.
#[cfg(feature = "hydrate")]
pub fn scan(cfg: &crate::config::UiConfig) -> Result<usize, crate::error::UiError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(crate::error::UiError::NoWindow)?;
    let doc = crate::util::dom::document()?;
    let nodes = doc.query_selector_all(&cfg.lazy_image_selector())?;
    let images: Vec<web_sys::Element> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
        .collect();

    if !crate::util::dom::has_property(&window, "IntersectionObserver") {
        let revealed = reveal_all(&images, &cfg.deferred_source_attribute);
        log::debug!("no IntersectionObserver; revealed {revealed} images eagerly");
        return Ok(revealed);
    }

    observe(&images, cfg)?;
    log::debug!("observing {} deferred images", images.len());
    Ok(0)
}

#[cfg(feature = "hydrate")]
fn observe(images: &[web_sys::Element], cfg: &crate::config::UiConfig) -> Result<(), crate::error::UiError> {
    use wasm_bindgen::{JsCast, closure::Closure};

    let attribute = cfg.deferred_source_attribute.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let entries: Vec<(bool, web_sys::Element)> = entries
            .iter()
            .filter_map(|entry| {
                let entry = entry.dyn_ref::<web_sys::IntersectionObserverEntry>()?;
                Some((entry.is_intersecting(), entry.target()))
            })
            .collect();
        handle_intersections(entries.iter().map(|(hit, el)| (*hit, el)), &attribute, |el| {
            observer.unobserve(el);
        });
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(&cfg.lazy_root_margin());
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Observed targets keep the observer alive for the page's lifetime.
    callback.forget();

    for image in images {
        observer.observe(image);
    }
    Ok(())
}
