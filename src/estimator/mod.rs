//! Savings estimator: three slider inputs to derived savings metrics

mod assumptions;
mod inputs;
mod engine;

pub use assumptions::SavingsAssumptions;
pub use inputs::{CalculatorInputs, InputField, SliderBounds};
pub use engine::{compute, CalculatorOutputs, SavingsEstimator};

// ============================================================================
// Model Constants
// ============================================================================
// Fixed assumptions behind the illustrative savings figures.
// - Implementation cost is the ROI denominator
// - Automated cost is expressed as a share of the current annual cost

/// Assumed one-off implementation cost in USD
pub const IMPLEMENTATION_COST_USD: f64 = 6000.0;

/// Annual cost of the automated process as a fraction of the current cost (28%)
pub const AUTOMATION_COST_RATIO: f64 = 0.28;

/// Weeks per year used to annualize weekly cost
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Multiplier from annual savings to the 3-year growth value
pub const GROWTH_MULTIPLIER: f64 = 3.0;

/// Hours in one full-time-equivalent week
pub const FTE_HOURS_PER_WEEK: f64 = 40.0;

/// Months per year used for the monthly savings figure
pub const MONTHS_PER_YEAR: f64 = 12.0;
