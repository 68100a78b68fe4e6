//! Contact modal state around the hosted form service
//!
//! The service is an external collaborator behind [`FormSubmitter`]. The modal
//! only tracks which of idle / submitting / succeeded / failed it is in, and
//! renders whatever field errors come back.

use super::form::{ContactForm, ContactSubmission, FieldErrors, FormField};
use crate::error::{EstimatorError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Modal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Identifier of the form on the hosted service
    #[serde(default = "default_form_id")]
    pub form_id: String,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_form_id() -> String { "xldgzdaa".to_string() }
fn default_title() -> String { "Let's Talk".to_string() }

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            title: default_title(),
        }
    }
}

/// What the hosted service reported for a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Succeeded,
    Rejected(FieldErrors),
}

/// The hosted form-submission service
pub trait FormSubmitter {
    fn submit(&mut self, form_id: &str, submission: &ContactSubmission) -> SubmissionOutcome;
}

/// Submission state observed by the UI
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FieldErrors),
}

/// One input of the form with its label
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub required: bool,
}

/// What the modal should currently draw
#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Hidden,
    Form {
        title: String,
        intro: &'static str,
        button_label: &'static str,
        submit_disabled: bool,
        /// Inputs in form order
        fields: Vec<FieldView>,
        /// Rendered errors per field, in form order
        errors: Vec<(FormField, Vec<String>)>,
    },
    Confirmation {
        heading: &'static str,
        body: &'static str,
    },
}

const INTRO: &str = "Tell us about your business and how AI could help you grow.";
const CONFIRMATION_HEADING: &str = "Message Sent!";
const CONFIRMATION_BODY: &str = "Thank you for reaching out. We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Default)]
pub struct ContactModal {
    config: ContactConfig,
    open: bool,
    state: SubmissionState,
}

impl ContactModal {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            open: false,
            state: SubmissionState::Idle,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the modal; submission state is kept
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn submit_disabled(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Start a submission
    ///
    /// Fails while another submission is in flight, or when the form does not
    /// pass client-side validation (the errors are stored for display).
    pub fn begin_submit(&mut self, form: &ContactForm) -> Result<ContactSubmission> {
        if self.submit_disabled() {
            return Err(EstimatorError::SubmissionPending);
        }

        let errors = form.validate();
        if !errors.is_empty() {
            let count = errors.len();
            log::debug!("contact form rejected client-side: {} field(s)", count);
            self.state = SubmissionState::Failed(errors);
            return Err(EstimatorError::ContactInvalid(count));
        }

        self.state = SubmissionState::Submitting;
        Ok(ContactSubmission::from_form(form, Utc::now()))
    }

    /// Record the service's answer for the in-flight submission
    pub fn complete(&mut self, outcome: SubmissionOutcome) {
        if !matches!(self.state, SubmissionState::Submitting) {
            log::warn!("ignoring submission outcome with nothing in flight");
            return;
        }
        self.state = match outcome {
            SubmissionOutcome::Succeeded => {
                log::info!("contact form submitted");
                SubmissionState::Succeeded
            }
            SubmissionOutcome::Rejected(errors) => {
                log::info!("contact form rejected by service: {} field(s)", errors.len());
                SubmissionState::Failed(errors)
            }
        };
    }

    /// Validate, hand the form to the service and record the outcome
    pub fn submit_with<S: FormSubmitter + ?Sized>(
        &mut self,
        form: &ContactForm,
        submitter: &mut S,
    ) -> Result<&SubmissionState> {
        let submission = self.begin_submit(form)?;
        let outcome = submitter.submit(&self.config.form_id, &submission);
        self.complete(outcome);
        Ok(&self.state)
    }

    /// Rendered errors for one field, empty unless the last submission failed
    pub fn field_errors(&self, field: FormField) -> Vec<String> {
        match &self.state {
            SubmissionState::Failed(errors) => errors.rendered(field),
            _ => Vec::new(),
        }
    }

    /// Return to a blank form
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    pub fn view(&self) -> ModalView {
        if !self.open {
            return ModalView::Hidden;
        }
        if self.state == SubmissionState::Succeeded {
            return ModalView::Confirmation {
                heading: CONFIRMATION_HEADING,
                body: CONFIRMATION_BODY,
            };
        }

        let submitting = self.submit_disabled();
        ModalView::Form {
            title: self.config.title.clone(),
            intro: INTRO,
            button_label: if submitting { "Sending..." } else { "Send Message" },
            submit_disabled: submitting,
            fields: FormField::ALL
                .iter()
                .map(|field| FieldView {
                    field: *field,
                    label: field.label(),
                    required: field.is_required(),
                })
                .collect(),
            errors: FormField::ALL
                .iter()
                .map(|field| (*field, self.field_errors(*field)))
                .filter(|(_, msgs)| !msgs.is_empty())
                .collect(),
        }
    }
}
