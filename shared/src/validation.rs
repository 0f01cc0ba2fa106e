//! RSVP Validation Schema
//!
//! Single source of truth for submission constraints, evaluated
//! identically on client and server. Violations come back as a list of
//! (field, message) pairs so callers can attribute failures to specific
//! inputs instead of one opaque error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::models::RsvpCreate;

/// Accepted values for the `attending` field
pub const ATTENDING_VALUES: [&str; 3] = ["yes", "no", "maybe"];

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    /// Wire (camelCase) field name
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a submission candidate against the schema
///
/// Returns every violation at once, sorted by field name so the list is
/// deterministic. An empty `attending` reads as "not answered".
pub fn validate_submission(submission: &RsvpCreate) -> Result<(), Vec<FieldError>> {
    let mut errors = match submission.validate() {
        Ok(()) => Vec::new(),
        Err(e) => field_errors(&e),
    };

    if !ATTENDING_VALUES.contains(&submission.attending.as_str()) {
        let message = if submission.attending.is_empty() {
            "Please let us know if you're attending"
        } else {
            "Attending must be one of yes, no or maybe"
        };
        errors.push(FieldError::new("attending", message));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(errors)
    }
}

/// Parse and validate an untyped payload into a submission candidate
///
/// Fields are decoded independently so a wrong-typed value (e.g. a
/// string `guestCount`) is attributed to that field, like any other
/// violation. A payload that is not a JSON object at all is reported
/// under the pseudo-field "body".
pub fn parse_submission(payload: Value) -> Result<RsvpCreate, Vec<FieldError>> {
    let submission = decode_fields(payload)?;
    validate_submission(&submission)?;
    Ok(submission)
}

fn decode_fields(payload: Value) -> Result<RsvpCreate, Vec<FieldError>> {
    let mut map = match payload {
        Value::Object(map) => map,
        _ => return Err(vec![FieldError::new("body", "Expected a JSON object")]),
    };

    let mut errors = Vec::new();
    let submission = RsvpCreate {
        guest_name: decode(&mut map, "guestName", String::new(), &mut errors),
        email: decode(&mut map, "email", String::new(), &mut errors),
        attending: decode(&mut map, "attending", String::new(), &mut errors),
        guest_count: decode(&mut map, "guestCount", 1, &mut errors),
        meal_preference: decode(&mut map, "mealPreference", None, &mut errors),
        dietary_restrictions: decode(&mut map, "dietaryRestrictions", None, &mut errors),
        message: decode(&mut map, "message", None, &mut errors),
    };

    if errors.is_empty() {
        Ok(submission)
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(errors)
    }
}

/// Decode one field; absent fields fall back to `default`
fn decode<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    field: &str,
    default: T,
    errors: &mut Vec<FieldError>,
) -> T {
    match map.remove(field) {
        None => default,
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            errors.push(FieldError::new(field, e.to_string()));
            default
        }),
    }
}

/// Flatten [`ValidationErrors`] into wire-named field errors
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            let field = wire_name(field.as_ref());
            violations.iter().map(move |v| {
                let message = v
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                FieldError::new(field.clone(), message)
            })
        })
        .collect()
}

/// snake_case rust field name -> camelCase wire name
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
