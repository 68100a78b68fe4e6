//! Per-page-view calculator state
//!
//! Inputs are clamped by the slider layer, then the outputs are recomputed
//! explicitly on every change. Nothing here outlives the page view.

use super::SavingsReport;
use crate::estimator::{CalculatorInputs, CalculatorOutputs, InputField, SavingsEstimator, SliderBounds};
use serde::Serialize;
use std::fmt;

/// One slider of the input panel as the page draws it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    pub field: InputField,
    pub label: &'static str,
    pub value: f64,
    pub bounds: SliderBounds,
    pub tooltip: &'static str,
}

impl fmt::Display for SliderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}-{}]",
            self.label, self.value, self.bounds.min, self.bounds.max
        )
    }
}

/// Transient calculator state for one page view
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    estimator: SavingsEstimator,
    inputs: CalculatorInputs,
    outputs: CalculatorOutputs,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(SavingsEstimator::default())
    }
}

impl CalculatorSession {
    /// Start a session at the page's default slider positions
    pub fn new(estimator: SavingsEstimator) -> Self {
        Self::with_inputs(estimator, CalculatorInputs::default())
    }

    /// Start a session at the given inputs, clamped to the slider domains
    pub fn with_inputs(estimator: SavingsEstimator, inputs: CalculatorInputs) -> Self {
        let inputs = inputs.clamped();
        let outputs = estimator.compute(&inputs);
        Self {
            estimator,
            inputs,
            outputs,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn outputs(&self) -> &CalculatorOutputs {
        &self.outputs
    }

    /// Move one slider and recompute
    ///
    /// Returns the value actually stored after clamping and snapping.
    pub fn set(&mut self, field: InputField, raw: f64) -> f64 {
        let value = field.bounds().snap(raw);
        if value != raw {
            log::debug!("{:?} slider clamped {} -> {}", field, raw, value);
        }
        self.inputs.set(field, value);
        self.recompute();
        value
    }

    pub fn set_employees(&mut self, raw: f64) -> f64 {
        self.set(InputField::Employees, raw)
    }

    pub fn set_hours_per_week(&mut self, raw: f64) -> f64 {
        self.set(InputField::HoursPerWeek, raw)
    }

    pub fn set_hourly_rate(&mut self, raw: f64) -> f64 {
        self.set(InputField::HourlyRate, raw)
    }

    /// Input panel: every slider with its label, current value and range
    pub fn sliders(&self) -> Vec<SliderView> {
        InputField::ALL
            .iter()
            .map(|field| SliderView {
                field: *field,
                label: field.label(),
                value: self.inputs.get(*field),
                bounds: field.bounds(),
                tooltip: field.tooltip(),
            })
            .collect()
    }

    /// Display model for the current outputs
    pub fn report(&self) -> SavingsReport {
        SavingsReport::from_outputs(&self.outputs)
    }

    fn recompute(&mut self) {
        self.outputs = self.estimator.compute(&self.inputs);
    }
}
