//! RSVP Storage Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{Rsvp, RsvpCreate};

/// RSVP row as stored in SurrealDB
///
/// `id` is None before insert; SurrealDB assigns the record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub guest_name: String,
    pub email: String,
    pub attending: String,
    pub guest_count: i64,
    pub meal_preference: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RsvpRecord {
    /// Build the row to insert from a validated submission
    ///
    /// `created_at` is assigned here, at insertion time.
    pub fn from_submission(data: RsvpCreate) -> Self {
        Self {
            id: None,
            guest_name: data.guest_name,
            email: data.email,
            attending: data.attending,
            guest_count: data.guest_count,
            meal_preference: data.meal_preference,
            dietary_restrictions: data.dietary_restrictions,
            message: data.message,
            created_at: Utc::now(),
        }
    }
}

// ID convention: 全栈统一使用 "table:id" 格式
impl From<RsvpRecord> for Rsvp {
    fn from(record: RsvpRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()).unwrap_or_default(),
            guest_name: record.guest_name,
            email: record.email,
            attending: record.attending,
            guest_count: record.guest_count,
            meal_preference: record.meal_preference,
            dietary_restrictions: record.dietary_restrictions,
            message: record.message,
            created_at: record.created_at,
        }
    }
}
