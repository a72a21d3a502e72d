//! Thumbnail previews for files picked in an upload input.
//!
//! Each selected file is read independently with a `FileReader`; the preview
//! for a file is appended whenever its own read finishes, so thumbnails may
//! land out of input order. Alt text keeps the input position.
//!
//! A generation counter guards the container: a read started by an earlier
//! `preview` call that finishes after a later call cleared the container is
//! discarded instead of mixing two selections.

#[cfg(test)]
#[path = "upload_preview_test.rs"]
mod upload_preview_test;

#[cfg(any(test, feature = "hydrate"))]
use std::cell::RefCell;

use crate::config::UiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("{name}: only JPG, PNG and WebP images are accepted")]
    UnsupportedType { name: String },
    #[error("{name}: {size} bytes exceeds the {max} byte upload limit")]
    TooLarge { name: String, size: u64, max: u64 },
}

/// Client-side mirror of the server's upload acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub allowed_extensions: Vec<String>,
    pub max_bytes: u64,
}

impl UploadPolicy {
    pub fn from_config(cfg: &UiConfig) -> Self {
        Self {
            allowed_extensions: cfg.allowed_upload_extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            max_bytes: cfg.max_upload_bytes,
        }
    }

    /// # Errors
    ///
    /// Returns the first rule the file breaks: extension, then size.
    pub fn check(&self, name: &str, size: u64) -> Result<(), UploadRejection> {
        let extension = name.rfind('.').map(|dot| name[dot..].to_ascii_lowercase());
        let allowed = extension.is_some_and(|ext| self.allowed_extensions.iter().any(|a| *a == ext));
        if !allowed {
            return Err(UploadRejection::UnsupportedType { name: name.to_owned() });
        }
        if size > self.max_bytes {
            return Err(UploadRejection::TooLarge { name: name.to_owned(), size, max: self.max_bytes });
        }
        Ok(())
    }
}

/// Class names applied to preview nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMarkup {
    pub wrapper_class: String,
    pub image_class: String,
    pub invalid_class: String,
}

impl PreviewMarkup {
    pub fn from_config(cfg: &UiConfig) -> Self {
        Self {
            wrapper_class: cfg.preview_wrapper_class.clone(),
            image_class: cfg.preview_image_class.clone(),
            invalid_class: cfg.preview_invalid_class.clone(),
        }
    }
}

/// One file's place in a preview batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSlot {
    /// Zero-based position in the input's file list.
    pub index: usize,
    pub rejection: Option<UploadRejection>,
}

impl PreviewSlot {
    pub fn new(index: usize, name: &str, size: u64, policy: &UploadPolicy) -> Self {
        Self { index, rejection: policy.check(name, size).err() }
    }

    pub fn alt_text(&self) -> String {
        alt_text(self.index)
    }

    pub fn wrapper_classes(&self, markup: &PreviewMarkup) -> String {
        match self.rejection {
            Some(_) => format!("{} {}", markup.wrapper_class, markup.invalid_class),
            None => markup.wrapper_class.clone(),
        }
    }

    /// Tooltip explaining why the server will refuse this file.
    pub fn title(&self) -> Option<String> {
        self.rejection.as_ref().map(ToString::to_string)
    }
}

/// 1-based alt text for the file at zero-based `index`.
pub fn alt_text(index: usize) -> String {
    format!("Preview {}", index + 1)
}

/// Generation counter for the preview container.
#[derive(Debug, Default)]
pub struct PreviewBatches {
    current: u64,
}

impl PreviewBatches {
    /// Start a new batch; completions from older batches become stale.
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

#[cfg(any(test, feature = "hydrate"))]
thread_local! {
    static BATCHES: RefCell<PreviewBatches> = RefCell::new(PreviewBatches::default());
}

#[cfg(any(test, feature = "hydrate"))]
fn begin_batch() -> u64 {
    BATCHES.with(|b| b.borrow_mut().begin())
}

#[cfg(any(test, feature = "hydrate"))]
fn batch_is_current(generation: u64) -> bool {
    BATCHES.with(|b| b.borrow().is_current(generation))
}

/// A preview ready to be appended: `div.{classes}[title] > img[src][alt]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewNode {
    pub wrapper_classes: String,
    pub title: Option<String>,
    pub image_class: String,
    pub src: String,
    pub alt: String,
}

/// What a finished read should do to the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// A later `preview` call has cleared the container since this read began.
    Stale,
    /// The read produced no data URL.
    Failed,
    Append(PreviewNode),
}

/// Decide the outcome of one finished read from batch `generation`.
#[cfg(any(test, feature = "hydrate"))]
fn complete_read(
    generation: u64,
    slot: &PreviewSlot,
    markup: &PreviewMarkup,
    data_url: Option<String>,
) -> Completion {
    if !batch_is_current(generation) {
        return Completion::Stale;
    }
    let Some(src) = data_url else {
        return Completion::Failed;
    };
    Completion::Append(PreviewNode {
        wrapper_classes: slot.wrapper_classes(markup),
        title: slot.title(),
        image_class: markup.image_class.clone(),
        src,
        alt: slot.alt_text(),
    })
}

/// Render previews for every file selected in `input`.
///
/// No-op when the page has no preview container.
#[cfg(feature = "hydrate")]
pub fn preview(input: &web_sys::HtmlInputElement) {
    let cfg = crate::config::current();
    let Some(container) = crate::util::dom::element_by_id(&cfg.preview_container_id) else {
        return;
    };
    container.set_inner_html("");
    let generation = begin_batch();

    let Some(files) = input.files() else {
        return;
    };
    let policy = UploadPolicy::from_config(&cfg);
    let markup = PreviewMarkup::from_config(&cfg);
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        let slot = PreviewSlot::new(index as usize, &file.name(), file_size(&file), &policy);
        if let Some(reason) = &slot.rejection {
            log::warn!("upload will be refused: {reason}");
        }
        if let Err(err) = start_read(&container, &file, slot, generation, markup.clone()) {
            log::debug!("preview read for {} not started: {err}", file.name());
        }
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(file: &web_sys::File) -> u64 {
    file.size().max(0.0) as u64
}

#[cfg(feature = "hydrate")]
fn start_read(
    container: &web_sys::Element,
    file: &web_sys::File,
    slot: PreviewSlot,
    generation: u64,
    markup: PreviewMarkup,
) -> Result<(), crate::error::UiError> {
    use std::rc::Rc;
    use wasm_bindgen::{JsCast, closure::Closure};

    let reader = web_sys::FileReader::new()?;
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::ProgressEvent)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let reader_for_cb = reader.clone();
    let container = container.clone();

    let on_done = Closure::wrap(Box::new(move |_ev: web_sys::ProgressEvent| {
        let data_url = match reader_for_cb.result() {
            Ok(result) => result.as_string(),
            Err(_) => None,
        };
        match complete_read(generation, &slot, &markup, data_url) {
            Completion::Append(node) => {
                if let Err(err) = append_preview(&container, &node) {
                    log::debug!("{} not shown: {err}", node.alt);
                }
            }
            Completion::Failed => log::debug!("preview {} read failed", slot.index + 1),
            Completion::Stale => {}
        }
        reader_for_cb.set_onloadend(None);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);

    reader.set_onloadend(Some(on_done.as_ref().unchecked_ref()));
    *holder.borrow_mut() = Some(on_done);
    if let Err(err) = reader.read_as_data_url(file) {
        reader.set_onloadend(None);
        holder.borrow_mut().take();
        return Err(err.into());
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn append_preview(container: &web_sys::Element, node: &PreviewNode) -> Result<(), crate::error::UiError> {
    let doc = crate::util::dom::document()?;

    let wrapper = doc.create_element("div")?;
    wrapper.set_class_name(&node.wrapper_classes);
    if let Some(title) = &node.title {
        wrapper.set_attribute("title", title)?;
    }

    let img = doc.create_element("img")?;
    img.set_attribute("src", &node.src)?;
    img.set_class_name(&node.image_class);
    img.set_attribute("alt", &node.alt)?;

    wrapper.append_child(&img)?;
    container.append_child(&wrapper)?;
    Ok(())
}
