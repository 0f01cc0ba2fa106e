//! Static Content API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Static content router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/event", get(handler::event))
        .route("/api/traditions", get(handler::traditions))
        .route("/api/faq", get(handler::faq))
        .route("/api/transport", get(handler::transport))
        .route("/api/program", get(handler::program))
        .route("/api/debut-data", get(handler::debut_data))
}
