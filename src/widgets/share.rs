//! Share a listing via the Web Share API, falling back to the clipboard.
//!
//! TRADE-OFFS
//! ==========
//! Native share rejections (including the user dismissing the sheet) and
//! clipboard failures are logged and swallowed, the same best-effort policy
//! as the enquiry beacons.
//!
//! The "copied" confirmation restores the button after a fixed delay. The
//! restore timer is owned by [`CopyFeedback`]: copying again while it is
//! pending cancels it, keeps the markup saved by the first copy and re-arms.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareTarget {
    pub url: String,
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareRoute {
    /// `navigator.share` is available.
    Native,
    /// Copy the URL and show inline confirmation.
    Clipboard,
}

pub fn share_route(native_available: bool) -> ShareRoute {
    if native_available { ShareRoute::Native } else { ShareRoute::Clipboard }
}

/// Saved button markup plus the pending restore timer `T`.
#[derive(Debug)]
pub struct CopyFeedback<T> {
    saved_markup: Option<String>,
    pending: Option<T>,
}

impl<T> Default for CopyFeedback<T> {
    fn default() -> Self {
        Self { saved_markup: None, pending: None }
    }
}

impl<T> CopyFeedback<T> {
    /// Called right before the confirmation replaces the button markup.
    ///
    /// `current_markup` is only kept when nothing is saved yet, so a repeat
    /// copy never records the confirmation itself. Returns the timer from
    /// the previous copy, which the caller cancels.
    pub fn begin(&mut self, current_markup: String) -> Option<T> {
        if self.saved_markup.is_none() {
            self.saved_markup = Some(current_markup);
        }
        self.pending.take()
    }

    pub fn arm(&mut self, timer: T) {
        self.pending = Some(timer);
    }

    /// Timer fired: hand back the markup to restore and reset.
    pub fn finish(&mut self) -> (Option<String>, Option<T>) {
        (self.saved_markup.take(), self.pending.take())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static FEEDBACK: std::cell::RefCell<CopyFeedback<gloo_timers::callback::Timeout>> =
        std::cell::RefCell::new(CopyFeedback::default());
}

/// Share `target` natively when possible, otherwise copy its URL.
pub fn share(target: ShareTarget) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        match share_route(crate::util::dom::has_property(&navigator, "share")) {
            ShareRoute::Native => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = native_share(&navigator, &target).await {
                    log::debug!("native share not completed: {err}");
                }
            }),
            ShareRoute::Clipboard => wasm_bindgen_futures::spawn_local(async move {
                match copy_to_clipboard(&navigator, &target.url).await {
                    Ok(()) => show_copied_feedback(),
                    Err(err) => log::debug!("clipboard write failed: {err}"),
                }
            }),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("share {} (no browser)", target.url);
    }
}

#[cfg(feature = "hydrate")]
async fn native_share(navigator: &web_sys::Navigator, target: &ShareTarget) -> Result<(), crate::error::UiError> {
    let data = web_sys::ShareData::new();
    data.set_title(&target.title);
    data.set_url(&target.url);
    wasm_bindgen_futures::JsFuture::from(navigator.share_with_data(&data)).await?;
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn copy_to_clipboard(navigator: &web_sys::Navigator, url: &str) -> Result<(), crate::error::UiError> {
    use wasm_bindgen::JsCast;

    let clipboard = js_sys::Reflect::get(navigator, &wasm_bindgen::JsValue::from_str("clipboard"))?
        .dyn_into::<web_sys::Clipboard>()?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(url)).await?;
    Ok(())
}

/// Swap the share button to the confirmation and schedule the restore.
#[cfg(feature = "hydrate")]
fn show_copied_feedback() {
    let cfg = crate::config::current();
    let Some(button) = crate::util::dom::element_by_id(&cfg.share_button_id) else {
        return;
    };

    let stale = FEEDBACK.with(|f| {
        let mut feedback = f.borrow_mut();
        if feedback.is_pending() {
            log::debug!("copied feedback restarted");
        }
        feedback.begin(button.inner_html())
    });
    // Dropping the previous Timeout cancels its pending restore.
    drop(stale);
    button.set_inner_html(&cfg.copied_markup);

    let timer = gloo_timers::callback::Timeout::new(cfg.copied_feedback_ms, move || {
        let (markup, _fired) = FEEDBACK.with(|f| f.borrow_mut().finish());
        if let Some(markup) = markup {
            button.set_inner_html(&markup);
        }
    });
    FEEDBACK.with(|f| f.borrow_mut().arm(timer));
}
