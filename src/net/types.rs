//! Wire DTOs for the analytics endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which contact channel a visitor clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryAction {
    WhatsappClick,
    PhoneClick,
}

impl EnquiryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WhatsappClick => "whatsapp_click",
            Self::PhoneClick => "phone_click",
        }
    }
}

impl fmt::Display for EnquiryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enquiry action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for EnquiryAction {
    type Err = UnknownAction;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "whatsapp_click" => Ok(Self::WhatsappClick),
            "phone_click" => Ok(Self::PhoneClick),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

/// One enquiry beacon; serializes to the `POST /api/enquiry` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryEvent {
    pub property_id: String,
    pub action: EnquiryAction,
}

impl EnquiryEvent {
    /// Build an event; an empty property id yields nothing. Any other id is
    /// sent exactly as the markup carries it.
    pub fn new(property_id: &str, action: EnquiryAction) -> Option<Self> {
        if property_id.is_empty() {
            return None;
        }
        Some(Self { property_id: property_id.to_owned(), action })
    }
}
