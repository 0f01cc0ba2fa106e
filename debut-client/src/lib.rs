//! Debut Client - HTTP client for the invitation site API
//!
//! Provides typed network calls for the static content endpoints and the
//! RSVP submission form state machine. Validation mirrors the server's
//! shared schema so malformed submissions are caught before any network
//! round-trip.

pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FormState, RsvpForm, SubmitOutcome};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{
    DebutData, EventDetails, FaqItem, ProgramEntry, Rsvp, RsvpCreate, TransportTip, Traditions,
};
pub use shared::validation::FieldError;
