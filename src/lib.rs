//! ROI Calculator - savings estimator and contact form core for an AI-automation consultancy site
//!
//! This library provides:
//! - The savings estimator (three slider inputs to derived savings metrics)
//! - Per-page-view calculator session state with slider clamping
//! - Display formatting and the metric cards of the calculator page
//! - Contact modal state around an external form-submission service
//! - A JSON request surface and a grid sweep for batch evaluation

pub mod estimator;
pub mod calculator;
pub mod contact;
pub mod api;
pub mod error;

// Re-export commonly used types
pub use estimator::{compute, CalculatorInputs, CalculatorOutputs, SavingsAssumptions, SavingsEstimator};
pub use calculator::{CalculatorSession, SavingsReport};
pub use contact::{ContactForm, ContactModal, FormSubmitter, SubmissionState};
pub use error::{EstimatorError, Result};
