//! RSVP Models
//!
//! `Rsvp` 是持久化记录，`RsvpCreate` 是提交候选（无 id/createdAt）。
//! 字段约束是客户端与服务端共用的唯一事实来源。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Persisted RSVP record
///
/// `id` and `created_at` are assigned by storage on insert and never
/// change afterwards. Records are created once per form submission and
/// never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    /// Storage-assigned record id ("rsvp:<key>")
    pub id: String,
    pub guest_name: String,
    pub email: String,
    /// One of "yes" | "no" | "maybe"
    pub attending: String,
    pub guest_count: i64,
    pub meal_preference: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
    /// Insertion timestamp, immutable
    pub created_at: DateTime<Utc>,
}

/// RSVP submission candidate (without id / createdAt)
///
/// Required string fields default to empty so that a missing field
/// surfaces as a validation error attributed to that field rather than
/// a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RsvpCreate {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub guest_name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    /// Checked against the fixed enumeration in [`crate::validation`]
    #[serde(default)]
    pub attending: String,

    #[serde(default = "default_guest_count")]
    #[validate(range(min = 1, max = 10, message = "Guest count must be between 1 and 10"))]
    pub guest_count: i64,

    #[serde(default)]
    pub meal_preference: Option<String>,

    #[serde(default)]
    pub dietary_restrictions: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

fn default_guest_count() -> i64 {
    1
}

impl Default for RsvpCreate {
    fn default() -> Self {
        Self {
            guest_name: String::new(),
            email: String::new(),
            attending: String::new(),
            guest_count: default_guest_count(),
            meal_preference: None,
            dietary_restrictions: None,
            message: None,
        }
    }
}
