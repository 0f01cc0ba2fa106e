//! RSVP Submission Form
//!
//! Client-side mirror of the shared validation schema with the form
//! state machine: `Idle → Submitting → {Success, Failure}`. Failure
//! returns to Idle on the next interaction; Success resets to a fresh
//! Idle form. At most one submission is in flight at a time — a UX
//! rule, not a correctness one.

use crate::{ClientError, HttpClient};
use shared::models::{Rsvp, RsvpCreate};
use shared::validation::{FieldError, validate_submission};

/// Form lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Local validation failed; field errors are shown inline and
    /// nothing was sent over the network
    Invalid(Vec<FieldError>),
    /// A submission is already in flight; this attempt was ignored
    InFlight,
    /// The server accepted and persisted the submission
    Accepted(Rsvp),
    /// Network or server failure; the guest may retry
    Failed,
}

const CONFIRMATION: &str =
    "Thank you for responding. We look forward to celebrating with you!";
const RETRY_PROMPT: &str =
    "There was an error submitting your RSVP. Please try again.";

/// The RSVP submission form
#[derive(Debug)]
pub struct RsvpForm {
    client: HttpClient,
    state: FormState,
    draft: RsvpCreate,
    field_errors: Vec<FieldError>,
    status_message: Option<String>,
}

impl RsvpForm {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: FormState::Idle,
            draft: RsvpCreate::default(),
            field_errors: Vec::new(),
            status_message: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &RsvpCreate {
        &self.draft
    }

    /// Inline field errors from the last local validation
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Confirmation or retry prompt from the last submit attempt
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Register an interaction: Failure and Success both return to Idle
    fn touch(&mut self) {
        if matches!(self.state, FormState::Failure | FormState::Success) {
            self.state = FormState::Idle;
            self.status_message = None;
        }
    }

    // ========== Field setters ==========

    pub fn set_guest_name(&mut self, value: impl Into<String>) {
        self.touch();
        self.draft.guest_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.touch();
        self.draft.email = value.into();
    }

    pub fn set_attending(&mut self, value: impl Into<String>) {
        self.touch();
        self.draft.attending = value.into();
    }

    pub fn set_guest_count(&mut self, value: i64) {
        self.touch();
        self.draft.guest_count = value;
    }

    pub fn set_meal_preference(&mut self, value: Option<String>) {
        self.touch();
        self.draft.meal_preference = value;
    }

    pub fn set_dietary_restrictions(&mut self, value: Option<String>) {
        self.touch();
        self.draft.dietary_restrictions = value;
    }

    pub fn set_message(&mut self, value: Option<String>) {
        self.touch();
        self.draft.message = value;
    }

    // ========== Submission ==========

    /// Validate locally, then submit the draft
    ///
    /// Invalid drafts never reach the network. On success the form is
    /// cleared for the next guest; on failure the draft is kept so the
    /// guest can retry.
    ///
    /// One submission in flight: re-entry is impossible while the
    /// returned future is alive (exclusive borrow). A future dropped
    /// mid-flight leaves the form in [`FormState::Submitting`]; the
    /// request may already have reached the server, so later attempts
    /// return [`SubmitOutcome::InFlight`] instead of resubmitting.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state == FormState::Submitting {
            return SubmitOutcome::InFlight;
        }
        self.touch();

        if let Err(errors) = validate_submission(&self.draft) {
            self.field_errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.field_errors.clear();

        self.state = FormState::Submitting;

        match self.client.submit_rsvp(&self.draft).await {
            Ok(rsvp) => {
                self.state = FormState::Success;
                self.draft = RsvpCreate::default();
                self.status_message = Some(CONFIRMATION.to_string());
                SubmitOutcome::Accepted(rsvp)
            }
            Err(err) => {
                if let ClientError::Validation(details) = &err {
                    // 共享 schema 下不应出现：本地已通过、服务端拒绝
                    tracing::warn!(details = ?details, "Server rejected a locally valid submission");
                } else {
                    tracing::warn!(error = %err, "RSVP submission failed");
                }
                self.state = FormState::Failure;
                self.status_message = Some(RETRY_PROMPT.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    fn form() -> RsvpForm {
        // Port 9 (discard) is never listened on; any dial fails fast
        let client = ClientConfig::new("http://127.0.0.1:9")
            .with_timeout(1)
            .build_http_client();
        RsvpForm::new(client)
    }

    fn fill_valid(form: &mut RsvpForm) {
        form.set_guest_name("Maria Clara");
        form.set_email("maria@example.com");
        form.set_attending("yes");
        form.set_guest_count(3);
    }

    #[test]
    fn fresh_form_is_idle_with_default_draft() {
        let form = form();
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.draft().guest_count, 1);
        assert!(form.field_errors().is_empty());
        assert!(form.status_message().is_none());
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_locally_without_network() {
        let mut form = form();
        form.set_guest_name("M");
        form.set_email("not-an-email");

        let outcome = form.submit().await;

        // Still Idle: nothing was sent, the guest fixes fields inline
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(form.state(), FormState::Idle);
        let fields: Vec<&str> = form.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["attending", "email", "guestName"]);
    }

    #[tokio::test]
    async fn unreachable_server_moves_form_to_failure() {
        let mut form = form();
        fill_valid(&mut form);

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed));
        assert_eq!(form.state(), FormState::Failure);
        assert_eq!(
            form.status_message(),
            Some("There was an error submitting your RSVP. Please try again.")
        );
        // Draft is kept for retry
        assert_eq!(form.draft().guest_name, "Maria Clara");
    }

    #[tokio::test]
    async fn dropped_submit_future_still_counts_as_in_flight() {
        let mut form = form();
        fill_valid(&mut form);

        // Cancel the submission at its first await point
        let cancelled =
            tokio::time::timeout(std::time::Duration::ZERO, form.submit()).await;
        assert!(cancelled.is_err());
        assert_eq!(form.state(), FormState::Submitting);

        // The request may have reached the server; do not resubmit
        assert!(matches!(form.submit().await, SubmitOutcome::InFlight));
    }

    #[tokio::test]
    async fn failure_returns_to_idle_on_next_interaction() {
        let mut form = form();
        fill_valid(&mut form);
        form.submit().await;
        assert_eq!(form.state(), FormState::Failure);

        form.set_message(Some("See you there!".to_string()));
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.status_message().is_none());
    }
}
