//! HTTP helpers for the listing site's JSON endpoints.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Host builds: no network; callers see the same signatures.
//!
//! ERROR HANDLING
//! ==============
//! `post_enquiry` reports failures as `UiError` so callers decide how loud to
//! be. The enquiry tracker treats every failure as ignorable telemetry loss.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::EnquiryEvent;
use crate::error::UiError;

#[cfg(any(test, feature = "hydrate"))]
fn enquiry_failed_message(status: u16) -> String {
    format!("status {status}")
}

/// Send one enquiry beacon as `POST {endpoint}` with a JSON body.
///
/// The response body is never read.
///
/// # Errors
///
/// Returns [`UiError::Request`] on transport failure or a non-2xx status.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn post_enquiry(endpoint: &str, event: &EnquiryEvent) -> Result<(), UiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(event)
            .map_err(|e| UiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| UiError::Request(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(UiError::Request(enquiry_failed_message(status)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}
