//! API Response types
//!
//! Wire bodies for the RSVP submission endpoint. The content endpoints
//! return their models directly.

use serde::{Deserialize, Serialize};

use crate::models::Rsvp;
use crate::validation::FieldError;

/// Successful submission body (HTTP 201)
///
/// ```json
/// { "success": true, "rsvp": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpCreated {
    pub success: bool,
    pub rsvp: Rsvp,
}

impl RsvpCreated {
    pub fn new(rsvp: Rsvp) -> Self {
        Self {
            success: true,
            rsvp,
        }
    }
}

/// Failed submission body (HTTP 400 / 500)
///
/// ```json
/// { "error": "Invalid RSVP data", "details": [ { "field": "...", "message": "..." } ] }
/// ```
///
/// `details` is present only for validation failures; storage failures
/// carry a generic message and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpRejected {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl RsvpRejected {
    /// Validation failure with field-level detail
    pub fn invalid(details: Vec<FieldError>) -> Self {
        Self {
            error: "Invalid RSVP data".to_string(),
            details: Some(details),
        }
    }

    /// Opaque server-side failure
    pub fn server_error() -> Self {
        Self {
            error: "Failed to submit RSVP".to_string(),
            details: None,
        }
    }
}
