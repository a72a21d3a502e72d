use super::*;

const ORIGINAL: &str = r#"<i class="bi bi-share"></i> Share"#;
const COPIED: &str = r#"<i class="bi bi-check"></i> Link Copied!"#;

#[test]
fn route_prefers_native_share() {
    assert_eq!(share_route(true), ShareRoute::Native);
    assert_eq!(share_route(false), ShareRoute::Clipboard);
}

#[test]
fn single_copy_restores_original_markup() {
    let mut feedback = CopyFeedback::<u32>::default();
    assert_eq!(feedback.begin(ORIGINAL.to_owned()), None);
    feedback.arm(1);
    assert!(feedback.is_pending());

    let (markup, fired) = feedback.finish();
    assert_eq!(markup.as_deref(), Some(ORIGINAL));
    assert_eq!(fired, Some(1));
    assert!(!feedback.is_pending());
}

#[test]
fn repeat_copy_cancels_pending_timer_and_keeps_first_markup() {
    let mut feedback = CopyFeedback::<u32>::default();
    feedback.begin(ORIGINAL.to_owned());
    feedback.arm(1);

    // Button now shows the confirmation; a second copy must not save it.
    let cancelled = feedback.begin(COPIED.to_owned());
    assert_eq!(cancelled, Some(1));
    feedback.arm(2);

    let (markup, fired) = feedback.finish();
    assert_eq!(markup.as_deref(), Some(ORIGINAL));
    assert_eq!(fired, Some(2));
}

#[test]
fn feedback_cycle_resets_after_restore() {
    let mut feedback = CopyFeedback::<u32>::default();
    feedback.begin("first".to_owned());
    feedback.arm(1);
    feedback.finish();

    feedback.begin("second".to_owned());
    feedback.arm(2);
    assert_eq!(feedback.finish().0.as_deref(), Some("second"));
}

#[test]
fn finish_without_copy_restores_nothing() {
    let mut feedback = CopyFeedback::<u32>::default();
    assert_eq!(feedback.finish(), (None, None));
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn share_is_inert_without_browser() {
    share(ShareTarget { url: "https://example.com/p/1".to_owned(), title: "3BHK".to_owned() });
}
