//! Database Models

pub mod rsvp;

// Re-exports
pub use rsvp::RsvpRecord;
