//! Submit lifecycle for the contact form
//!
//! A submission attempt moves through three phases:
//!
//! - **Validating** (same tick): every field is marked touched and the error
//!   set is recomputed. Any error ends the attempt locally.
//! - **Submitting**: credentials are resolved and the payload is handed to the
//!   caller for dispatch to the mail relay. `submitting` stays true until
//!   [`SubmissionController::finish`] runs.
//! - **Idle**: the outcome is recorded in [`SubmissionStatus`].
//!
//! `begin` and `finish` are split so the relay call can run on another task
//! while the UI keeps drawing. The tests drive whole attempts through
//! `submit`, which awaits the relay inline.

use super::forms::{compute_errors, ContactForm, FieldName, FieldSet};
use crate::config::{ConfigError, RelayConfig, RelayCredentials};
use crate::relay::RelayError;

pub const FIX_FIELDS_MESSAGE: &str = "Please fix the highlighted fields.";
pub const SENT_MESSAGE: &str = "Thanks! Your message was sent successfully.";
pub const SEND_FAILED_MESSAGE: &str =
    "Something went wrong sending your message. Please try again.";

/// Result of the most recent submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(msg) | Self::Failure(msg) => Some(msg),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Everything the relay call needs, captured when the attempt started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub credentials: RelayCredentials,
    pub payload: FieldSet,
}

/// What the caller should do after [`SubmissionController::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already in flight; nothing changed
    Busy,
    /// Validation failed; the form shows its errors
    Invalid,
    /// Relay credentials are missing; the attempt failed without a call
    Misconfigured(ConfigError),
    /// Send this to the relay, then report back through `finish`
    Dispatch(Dispatch),
}

/// Owns the `submitting` flag and the submission status of one form
#[derive(Debug, Default)]
pub struct SubmissionController {
    submitting: bool,
    status: SubmissionStatus,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submission attempt.
    ///
    /// Returns [`SubmitStep::Dispatch`] only when the form is valid and the
    /// relay is configured; the controller is then in Submitting until
    /// [`finish`](Self::finish) is called.
    pub fn begin(&mut self, form: &mut ContactForm, relay_config: &RelayConfig) -> SubmitStep {
        if self.submitting {
            tracing::debug!("Ignoring submit while a message is already sending");
            return SubmitStep::Busy;
        }

        form.touch_all();
        let errors = compute_errors(form.fields());
        if !errors.is_valid() {
            let invalid: Vec<&str> = errors.invalid_fields().iter().map(FieldName::key).collect();
            tracing::debug!("Contact form invalid: {}", invalid.join(", "));
            self.status = SubmissionStatus::Failure(FIX_FIELDS_MESSAGE.to_string());
            return SubmitStep::Invalid;
        }

        self.submitting = true;
        self.status = SubmissionStatus::None;

        match relay_config.credentials() {
            Ok(credentials) => SubmitStep::Dispatch(Dispatch {
                credentials,
                payload: form.fields().clone(),
            }),
            Err(err) => {
                tracing::error!("Cannot send contact message: {err}");
                self.status = SubmissionStatus::Failure(SEND_FAILED_MESSAGE.to_string());
                self.submitting = false;
                SubmitStep::Misconfigured(err)
            }
        }
    }

    /// Record the relay outcome and leave Submitting
    pub fn finish(&mut self, form: &mut ContactForm, outcome: Result<(), RelayError>) {
        if !self.submitting {
            tracing::warn!("Relay outcome arrived with no submission in flight");
            return;
        }

        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success(SENT_MESSAGE.to_string());
                form.reset();
            }
            Err(err) => {
                tracing::warn!("Contact message was not sent: {err}");
                self.status = SubmissionStatus::Failure(SEND_FAILED_MESSAGE.to_string());
            }
        }
        self.submitting = false;
    }

    /// Run a whole attempt inline, awaiting the relay
    #[cfg(test)]
    pub async fn submit<R: crate::relay::MailRelay + ?Sized>(
        &mut self,
        form: &mut ContactForm,
        relay_config: &RelayConfig,
        relay: &R,
    ) -> &SubmissionStatus {
        if let SubmitStep::Dispatch(dispatch) = self.begin(form, relay_config) {
            let outcome = relay.send(&dispatch.credentials, &dispatch.payload).await;
            self.finish(form, outcome);
        }
        &self.status
    }
}
