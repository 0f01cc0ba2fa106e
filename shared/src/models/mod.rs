//! Wire models

pub mod event;
pub mod rsvp;

// Re-exports
pub use event::{DebutData, EventDetails, FaqItem, Participant, ProgramEntry, TransportTip, Traditions};
pub use rsvp::{Rsvp, RsvpCreate};
