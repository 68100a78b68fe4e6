//! Contact form fields and client-side validation
//!
//! Validation mirrors the browser's `required` and `type=email` checks. Anything
//! deeper belongs to the hosted form service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [FormField::Name, FormField::Email, FormField::Company, FormField::Message];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Message => "How can we help?",
        }
    }

    /// Prefix placed in front of each error message for this field
    pub fn error_prefix(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Company)
    }
}

/// Field-level error messages keyed by field name
///
/// Keys are kept as strings so messages for fields the form does not know about
/// survive verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Raw messages for a field name
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Messages for a form field, each prefixed with the field's display prefix
    pub fn rendered(&self, field: FormField) -> Vec<String> {
        self.messages(field.name())
            .iter()
            .map(|msg| format!("{} {}", field.error_prefix(), msg))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Number of fields carrying at least one message
    pub fn len(&self) -> usize {
        self.0.values().filter(|msgs| !msgs.is_empty()).count()
    }
}

/// Values entered in the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    /// Check required fields and the email shape
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FormField::ALL {
            let value = self.get(field).trim();
            if field.is_required() && value.is_empty() {
                errors.push(field.name(), "is required");
            } else if field == FormField::Email && !value.is_empty() && !looks_like_email(value) {
                errors.push(field.name(), "should be an email");
            }
        }
        errors
    }
}

/// local@domain with no whitespace and exactly one `@`
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// A validated form handed to the form service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Empty company is sent as absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Build a submission from a form that passed validation
    pub(crate) fn from_form(form: &ContactForm, submitted_at: DateTime<Utc>) -> Self {
        let company = form.company.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: form.message.trim().to_string(),
            submitted_at,
        }
    }
}
