//! Shared types for the debut invitation site
//!
//! Common types used by both the server and the client: the RSVP
//! validation schema, wire response structures and the static content
//! models. Client and server validate against the same schema so both
//! reject the same malformed inputs.

pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    DebutData, EventDetails, FaqItem, Participant, ProgramEntry, Rsvp, RsvpCreate, TransportTip,
    Traditions,
};
pub use response::{RsvpCreated, RsvpRejected};
pub use validation::{FieldError, parse_submission, validate_submission};
