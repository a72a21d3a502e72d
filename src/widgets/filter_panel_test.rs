use std::cell::RefCell;
use std::collections::BTreeSet;

use super::*;

struct FakeSidebar(RefCell<BTreeSet<String>>);

impl FakeSidebar {
    fn with(classes: &[&str]) -> Self {
        Self(RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()))
    }

    fn classes(&self) -> BTreeSet<String> {
        self.0.borrow().clone()
    }
}

impl ClassList for FakeSidebar {
    fn contains_class(&self, class: &str) -> bool {
        self.0.borrow().contains(class)
    }

    fn toggle_class(&self, class: &str) {
        let mut set = self.0.borrow_mut();
        if !set.remove(class) {
            set.insert(class.to_owned());
        }
    }
}

#[test]
fn flip_moves_hidden_panel_to_visible() {
    let sidebar = FakeSidebar::with(&["col-lg-3", "d-none"]);
    assert_eq!(visibility(&sidebar, "d-none", "d-block"), Some(PanelVisibility::Hidden));
    assert_eq!(flip(&sidebar, "d-none", "d-block"), Some(PanelVisibility::Visible));
    assert!(sidebar.contains_class("col-lg-3"));
}

#[test]
fn flipping_twice_restores_original_classes() {
    for start in [&["d-none"][..], &["d-block", "shadow"][..]] {
        let sidebar = FakeSidebar::with(start);
        let before = sidebar.classes();
        flip(&sidebar, "d-none", "d-block");
        assert_ne!(sidebar.classes(), before);
        flip(&sidebar, "d-none", "d-block");
        assert_eq!(sidebar.classes(), before);
    }
}

#[test]
fn visibility_is_unknown_for_inconsistent_markup() {
    assert_eq!(visibility(&FakeSidebar::with(&[]), "d-none", "d-block"), None);
    assert_eq!(visibility(&FakeSidebar::with(&["d-none", "d-block"]), "d-none", "d-block"), None);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn toggle_without_sidebar_is_noop() {
    assert_eq!(toggle(), None);
}
