//! Static Content API Handlers
//!
//! Every endpoint serves a fixed fixture; nothing here touches storage.

use axum::Json;

use crate::content;
use shared::models::{DebutData, EventDetails, FaqItem, ProgramEntry, TransportTip, Traditions};

/// Get event details
pub async fn event() -> Json<EventDetails> {
    Json(content::event_details())
}

/// Get the three traditions with their participant lists
pub async fn traditions() -> Json<Traditions> {
    Json(content::traditions())
}

/// Get FAQ entries
pub async fn faq() -> Json<Vec<FaqItem>> {
    Json(content::faq_items())
}

/// Get transportation tips
pub async fn transport() -> Json<Vec<TransportTip>> {
    Json(content::transport_tips())
}

/// Get the program timeline
pub async fn program() -> Json<Vec<ProgramEntry>> {
    Json(content::program_timeline())
}

/// Get the aggregate of all static content
pub async fn debut_data() -> Json<DebutData> {
    Json(content::debut_data())
}
