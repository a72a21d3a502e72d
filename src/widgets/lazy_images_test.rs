use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::*;

const ATTR: &str = "data-src";

#[derive(Debug, Default)]
struct FakeImage {
    id: u32,
    attrs: RefCell<BTreeMap<String, String>>,
    writes: RefCell<u32>,
}

impl FakeImage {
    fn deferred(id: u32, url: &str) -> Self {
        let image = Self { id, ..Self::default() };
        image.attrs.borrow_mut().insert(ATTR.to_owned(), url.to_owned());
        image
    }

    fn src(&self) -> Option<String> {
        self.attrs.borrow().get("src").cloned()
    }
}

impl DeferredImage for FakeImage {
    fn deferred_source(&self, attribute: &str) -> Option<String> {
        self.attrs.borrow().get(attribute).cloned()
    }

    fn set_source(&self, src: &str) {
        *self.writes.borrow_mut() += 1;
        self.attrs.borrow_mut().insert("src".to_owned(), src.to_owned());
    }

    fn clear_deferred(&self, attribute: &str) {
        self.attrs.borrow_mut().remove(attribute);
    }
}

/// Minimal observer: only delivers entries for images still observed.
struct FakeObserver {
    observed: BTreeSet<u32>,
}

impl FakeObserver {
    fn watching(images: &[FakeImage]) -> Self {
        Self { observed: images.iter().map(|i| i.id).collect() }
    }

    fn deliver<'a>(&mut self, entries: Vec<(bool, &'a FakeImage)>) -> usize {
        let live: Vec<_> = entries.into_iter().filter(|(_, img)| self.observed.contains(&img.id)).collect();
        let observed = &mut self.observed;
        handle_intersections(live, ATTR, |img| {
            observed.remove(&img.id);
        })
    }
}

#[test]
fn reveal_moves_deferred_source_once() {
    let img = FakeImage::deferred(1, "/uploads/a.jpg");
    assert!(reveal(&img, ATTR));
    assert_eq!(img.src().as_deref(), Some("/uploads/a.jpg"));
    assert_eq!(img.deferred_source(ATTR), None);

    assert!(!reveal(&img, ATTR));
    assert_eq!(*img.writes.borrow(), 1);
}

#[test]
fn fallback_reveals_every_image_immediately() {
    let images = vec![FakeImage::deferred(1, "/a.jpg"), FakeImage::deferred(2, "/b.jpg")];
    assert_eq!(reveal_all(&images, ATTR), 2);
    for img in &images {
        assert!(img.src().is_some());
        assert_eq!(img.deferred_source(ATTR), None);
    }
}

#[test]
fn source_is_set_only_after_intersection() {
    let images = vec![FakeImage::deferred(1, "/a.jpg"), FakeImage::deferred(2, "/b.jpg")];
    let mut observer = FakeObserver::watching(&images);

    assert_eq!(observer.deliver(vec![(false, &images[0]), (false, &images[1])]), 0);
    assert!(images.iter().all(|img| img.src().is_none()));

    assert_eq!(observer.deliver(vec![(true, &images[1])]), 1);
    assert_eq!(images[1].src().as_deref(), Some("/b.jpg"));
    assert!(images[0].src().is_none());
    assert!(observer.observed.contains(&1));
    assert!(!observer.observed.contains(&2));
}

#[test]
fn second_intersection_for_same_image_is_noop() {
    let images = vec![FakeImage::deferred(7, "/c.jpg")];
    let mut observer = FakeObserver::watching(&images);

    assert_eq!(observer.deliver(vec![(true, &images[0])]), 1);
    assert_eq!(observer.deliver(vec![(true, &images[0])]), 0);
    assert_eq!(*images[0].writes.borrow(), 1);
}

#[test]
fn intersecting_image_without_deferred_source_is_still_unobserved() {
    let plain = FakeImage { id: 3, ..FakeImage::default() };
    let mut unobserved = Vec::new();
    let revealed = handle_intersections([(true, &plain)], ATTR, |img| unobserved.push(img.id));
    assert_eq!(revealed, 0);
    assert_eq!(unobserved, vec![3]);
    assert!(plain.src().is_none());
}
