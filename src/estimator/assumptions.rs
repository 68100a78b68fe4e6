//! Model assumptions behind the savings figures
//!
//! Every field defaults to the fixed constant used on the calculator page, so an
//! empty JSON object (or no file at all) reproduces the published numbers.

use super::{
    AUTOMATION_COST_RATIO, FTE_HOURS_PER_WEEK, GROWTH_MULTIPLIER, IMPLEMENTATION_COST_USD,
    MONTHS_PER_YEAR, WEEKS_PER_YEAR,
};
use crate::error::{EstimatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Constants used by the savings estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAssumptions {
    /// One-off implementation cost, the ROI denominator (USD)
    #[serde(default = "default_implementation_cost")]
    pub implementation_cost: f64,

    /// Automated annual cost as a fraction of the current annual cost
    /// 0.28 means automation costs 28% of what the manual process costs
    #[serde(default = "default_automation_cost_ratio")]
    pub automation_cost_ratio: f64,

    #[serde(default = "default_weeks_per_year")]
    pub weeks_per_year: f64,

    /// Multiplier applied to annual savings for the 3-year growth value
    #[serde(default = "default_growth_multiplier")]
    pub growth_multiplier: f64,

    /// Hours per full-time-equivalent week
    #[serde(default = "default_fte_hours")]
    pub fte_hours_per_week: f64,

    #[serde(default = "default_months_per_year")]
    pub months_per_year: f64,
}

fn default_implementation_cost() -> f64 { IMPLEMENTATION_COST_USD }
fn default_automation_cost_ratio() -> f64 { AUTOMATION_COST_RATIO }
fn default_weeks_per_year() -> f64 { WEEKS_PER_YEAR }
fn default_growth_multiplier() -> f64 { GROWTH_MULTIPLIER }
fn default_fte_hours() -> f64 { FTE_HOURS_PER_WEEK }
fn default_months_per_year() -> f64 { MONTHS_PER_YEAR }

impl Default for SavingsAssumptions {
    fn default() -> Self {
        Self {
            implementation_cost: IMPLEMENTATION_COST_USD,
            automation_cost_ratio: AUTOMATION_COST_RATIO,
            weeks_per_year: WEEKS_PER_YEAR,
            growth_multiplier: GROWTH_MULTIPLIER,
            fte_hours_per_week: FTE_HOURS_PER_WEEK,
            months_per_year: MONTHS_PER_YEAR,
        }
    }
}

impl SavingsAssumptions {
    /// Parse assumptions from a JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load assumptions from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| EstimatorError::AssumptionsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let assumptions = Self::from_json(&raw).map_err(|source| EstimatorError::AssumptionsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded assumptions from {}: {:?}", path.display(), assumptions);
        Ok(assumptions)
    }

    /// Check whether these are the published page constants
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
