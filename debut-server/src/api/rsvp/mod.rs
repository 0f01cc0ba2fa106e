//! RSVP API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// RSVP submission router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/rsvp", post(handler::submit))
}
