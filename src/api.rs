//! JSON request/response surface for the estimator endpoint
//!
//! Inputs come either as a JSON body or as `employees`, `hours` and `rate`
//! query parameters. Missing values take the page defaults. Ranges are not
//! checked; the estimator is total.

use crate::calculator::SavingsReport;
use crate::error::{EstimatorError, Result};
use crate::estimator::{CalculatorInputs, CalculatorOutputs, InputField, SavingsEstimator};
use serde::Serialize;

/// Estimator response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResponse {
    pub inputs: CalculatorInputs,
    pub outputs: CalculatorOutputs,
    pub report: SavingsReport,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Query parameter name for each input
fn query_name(field: InputField) -> &'static str {
    match field {
        InputField::Employees => "employees",
        InputField::HoursPerWeek => "hours",
        InputField::HourlyRate => "rate",
    }
}

/// Parse inputs from query parameters; unknown keys are ignored
pub fn inputs_from_query<'a, I>(params: I) -> Result<CalculatorInputs>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut inputs = CalculatorInputs::default();
    for (key, raw) in params {
        let Some(field) = InputField::ALL.into_iter().find(|f| query_name(*f) == key) else {
            continue;
        };
        let value: f64 = raw.trim().parse().map_err(|_| EstimatorError::QueryParam {
            name: key.to_string(),
            value: raw.to_string(),
        })?;
        inputs.set(field, value);
    }
    Ok(inputs)
}

/// Parse inputs from a JSON object body; an empty body means all defaults
///
/// Arrays are refused even though serde would read them positionally.
pub fn inputs_from_body(body: &[u8]) -> Result<CalculatorInputs> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CalculatorInputs::default());
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let kind = match &value {
        serde_json::Value::Object(_) => return Ok(serde_json::from_value(value)?),
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Null => "null",
    };
    Err(EstimatorError::RequestShape(kind))
}

/// Compute the full response for a set of inputs
pub fn estimate(estimator: &SavingsEstimator, inputs: CalculatorInputs) -> EstimateResponse {
    let outputs = estimator.compute(&inputs);
    EstimateResponse {
        inputs,
        outputs,
        report: SavingsReport::from_outputs(&outputs),
    }
}
