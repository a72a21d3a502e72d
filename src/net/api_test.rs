use super::*;
#[cfg(not(feature = "hydrate"))]
use crate::net::types::EnquiryAction;

#[test]
fn enquiry_failed_message_formats_status() {
    assert_eq!(enquiry_failed_message(400), "status 400");
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn post_enquiry_is_inert_without_browser() {
    let event = EnquiryEvent::new("12", EnquiryAction::PhoneClick).unwrap();
    let fut = post_enquiry("/api/enquiry", &event);
    let result = block_on(fut);
    assert!(result.is_ok());
}

/// Minimal executor for futures that never pend on the host build.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
