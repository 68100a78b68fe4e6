//! Contact form modal and the hosted form-service seam

mod form;
mod modal;

pub use form::{ContactForm, ContactSubmission, FieldErrors, FormField};
pub use modal::{ContactConfig, ContactModal, FieldView, FormSubmitter, ModalView, SubmissionOutcome, SubmissionState};
