//! Static Event Content Models
//!
//! Read-only fixtures served by the content API. None of these have a
//! lifecycle; the only entity with one is [`super::Rsvp`].

use serde::{Deserialize, Serialize};

/// Event details (date, venue, theme, dress code)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub debutante_name: String,
    pub event_date: String,
    pub event_time: String,
    pub venue_name: String,
    pub venue_address: String,
    pub map_embed_url: String,
    pub theme: String,
    pub dress_code: String,
    pub dress_code_details: String,
}

/// A participant in one of the debut traditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The three traditional ceremonies, each an ordered participant list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traditions {
    pub treasures: Vec<Participant>,
    pub roses: Vec<Participant>,
    pub candles: Vec<Participant>,
}

/// Frequently asked question entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// Transportation tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportTip {
    pub id: u32,
    pub mode: String,
    pub icon: String,
    pub description: String,
}

/// Program timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub id: u32,
    pub time: String,
    pub title: String,
    pub description: String,
}

/// Aggregate of all static content, served by `/api/debut-data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebutData {
    pub event: EventDetails,
    pub traditions: Traditions,
    pub faq: Vec<FaqItem>,
    pub transport: Vec<TransportTip>,
    pub program: Vec<ProgramEntry>,
}
