//! Mobile filter sidebar show/hide.
//!
//! The sidebar carries exactly one of two visibility classes (`d-none` or
//! `d-block` by default). Toggling both at once flips between them; the
//! initial state comes from the markup.

#[cfg(test)]
#[path = "filter_panel_test.rs"]
mod filter_panel_test;

/// Class-list operations the toggle needs.
pub trait ClassList {
    fn contains_class(&self, class: &str) -> bool;
    fn toggle_class(&self, class: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVisibility {
    Hidden,
    Visible,
}

/// Current state, or `None` when the markup has neither or both classes.
pub fn visibility<C: ClassList + ?Sized>(el: &C, hidden_class: &str, visible_class: &str) -> Option<PanelVisibility> {
    match (el.contains_class(hidden_class), el.contains_class(visible_class)) {
        (true, false) => Some(PanelVisibility::Hidden),
        (false, true) => Some(PanelVisibility::Visible),
        _ => None,
    }
}

/// Toggle both visibility classes and report the resulting state.
pub fn flip<C: ClassList + ?Sized>(el: &C, hidden_class: &str, visible_class: &str) -> Option<PanelVisibility> {
    el.toggle_class(hidden_class);
    el.toggle_class(visible_class);
    visibility(el, hidden_class, visible_class)
}

#[cfg(feature = "hydrate")]
impl ClassList for web_sys::Element {
    fn contains_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) {
        if let Err(err) = self.class_list().toggle(class) {
            log::debug!("toggle {class} failed: {}", crate::error::js_error_message(&err));
        }
    }
}

/// Show or hide the filter sidebar. No-op when the page has none.
pub fn toggle() -> Option<PanelVisibility> {
    #[cfg(feature = "hydrate")]
    {
        let cfg = crate::config::current();
        let sidebar = crate::util::dom::element_by_id(&cfg.filter_sidebar_id)?;
        let state = flip(&sidebar, &cfg.hidden_class, &cfg.visible_class);
        log::debug!("filter sidebar now {state:?}");
        state
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
