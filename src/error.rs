//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the estimator itself.
///
/// The estimator is total and never fails; these cover configuration loading,
/// request parsing, CSV output and the contact form.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("failed to read assumptions from {path}: {source}")]
    AssumptionsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid assumptions file {path}: {source}")]
    AssumptionsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request body: {0}")]
    RequestBody(#[from] serde_json::Error),

    #[error("request body must be a JSON object, got {0}")]
    RequestShape(&'static str),

    #[error("query parameter `{name}` is not a number: {value:?}")]
    QueryParam { name: String, value: String },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("sweep step for {field} must be positive, got {step}")]
    InvalidStep { field: &'static str, step: f64 },

    #[error("sweep grid has {points} points, more than the limit of {limit}")]
    GridTooLarge { points: f64, limit: u64 },

    #[error("contact form is incomplete: {0} field(s) need attention")]
    ContactInvalid(usize),

    #[error("a submission is already in flight")]
    SubmissionPending,
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
