//! Savings computation
//!
//! Pure and total: every real-valued input produces outputs, nothing is logged
//! and no state is kept between calls.

use super::{CalculatorInputs, SavingsAssumptions};
use serde::{Deserialize, Serialize};

/// Derived savings metrics for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorOutputs {
    /// employees × hours × rate
    pub weekly_cost: f64,
    /// Weekly cost annualized over 52 weeks
    pub annual_savings: f64,
    /// 3-year value of reinvesting the savings
    pub growth_value: f64,
    /// Same figure as growth value, shown as the 3-year opportunity cost
    pub cost_of_inaction: f64,
    /// First-year return on the implementation cost, whole percent
    pub roi_percent: f64,
    /// Task hours expressed in full-time employees, whole number
    pub fte_hours_freed: f64,
    /// Annual cost of the manual process (equal to annual savings)
    pub current_annual_cost: f64,
    /// Annual cost once automated
    pub automated_annual_cost: f64,
    /// (current - automated) / 12
    pub monthly_savings: f64,
}

/// Savings estimator over a fixed set of assumptions
#[derive(Debug, Clone, Default)]
pub struct SavingsEstimator {
    assumptions: SavingsAssumptions,
}

impl SavingsEstimator {
    pub fn new(assumptions: SavingsAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &SavingsAssumptions {
        &self.assumptions
    }

    /// Compute every output from the inputs
    ///
    /// No range checking is done here; sliders clamp before calling. ROI and FTE
    /// round half away from zero.
    pub fn compute(&self, inputs: &CalculatorInputs) -> CalculatorOutputs {
        let a = &self.assumptions;

        let weekly_cost =
            inputs.employee_count * inputs.weekly_hours_per_employee * inputs.hourly_rate_usd;
        let annual_savings = weekly_cost * a.weeks_per_year;
        let growth_value = annual_savings * a.growth_multiplier;

        let roi_percent = (annual_savings / a.implementation_cost * 100.0).round();
        let fte_hours_freed =
            (inputs.employee_count * inputs.weekly_hours_per_employee / a.fte_hours_per_week).round();

        let current_annual_cost = annual_savings;
        let automated_annual_cost = current_annual_cost * a.automation_cost_ratio;
        let monthly_savings = (current_annual_cost - automated_annual_cost) / a.months_per_year;

        CalculatorOutputs {
            weekly_cost,
            annual_savings,
            growth_value,
            cost_of_inaction: growth_value,
            roi_percent,
            fte_hours_freed,
            current_annual_cost,
            automated_annual_cost,
            monthly_savings,
        }
    }
}

/// Compute outputs with the published page assumptions
pub fn compute(inputs: &CalculatorInputs) -> CalculatorOutputs {
    SavingsEstimator::default().compute(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_page_defaults() {
        // e=5, h=11, r=25
        let out = compute(&CalculatorInputs::new(5.0, 11.0, 25.0));

        assert_eq!(out.weekly_cost, 1375.0);
        assert_eq!(out.annual_savings, 71_500.0);
        assert_eq!(out.growth_value, 214_500.0);
        assert_eq!(out.cost_of_inaction, 214_500.0);
        assert_eq!(out.roi_percent, 1192.0); // 71500 / 6000 = 11.9167
        assert_eq!(out.fte_hours_freed, 1.0); // 55 / 40 = 1.375
        assert_eq!(out.current_annual_cost, 71_500.0);
        assert_relative_eq!(out.automated_annual_cost, 20_020.0, max_relative = 1e-12);
        assert_relative_eq!(out.monthly_savings, 4290.0, max_relative = 1e-12);
    }

    #[test]
    fn test_minimum_domain() {
        let out = compute(&CalculatorInputs::new(1.0, 1.0, 15.0));

        assert_eq!(out.weekly_cost, 15.0);
        assert_eq!(out.annual_savings, 780.0);
        assert_eq!(out.growth_value, 2340.0);
        assert_eq!(out.roi_percent, 13.0);
        assert_eq!(out.fte_hours_freed, 0.0); // 1/40 rounds down
        assert_relative_eq!(out.automated_annual_cost, 218.4, max_relative = 1e-12);
        assert_relative_eq!(out.monthly_savings, 46.8, max_relative = 1e-12);
    }

    #[test]
    fn test_maximum_domain() {
        let out = compute(&CalculatorInputs::new(100.0, 40.0, 200.0));

        assert_eq!(out.weekly_cost, 800_000.0);
        assert_eq!(out.annual_savings, 41_600_000.0);
        assert_eq!(out.growth_value, 124_800_000.0);
        assert_eq!(out.roi_percent, 693_333.0);
        assert_eq!(out.fte_hours_freed, 100.0);
    }

    #[test]
    fn test_formula_properties_over_domain() {
        let estimator = SavingsEstimator::default();

        // Coarse walk across all three slider domains
        for e in (1..=100).step_by(9) {
            for h in (1..=40).step_by(3) {
                for r in (15..=200).step_by(17) {
                    let inputs = CalculatorInputs::new(e as f64, h as f64, r as f64);
                    let out = estimator.compute(&inputs);

                    let weekly = (e * h * r) as f64;
                    assert_eq!(out.weekly_cost, weekly);
                    assert_eq!(out.annual_savings, weekly * 52.0);
                    assert_eq!(out.growth_value, out.annual_savings * 3.0);
                    assert_eq!(out.cost_of_inaction, out.growth_value);
                    assert_eq!(out.current_annual_cost, out.annual_savings);
                    assert_eq!(out.automated_annual_cost, out.annual_savings * 0.28);
                    assert_eq!(
                        out.monthly_savings,
                        (out.annual_savings - out.automated_annual_cost) / 12.0
                    );
                    assert_eq!(out.roi_percent, (out.annual_savings / 6000.0 * 100.0).round());
                    assert!(out.roi_percent >= 0.0);
                    assert_eq!(out.fte_hours_freed, ((e * h) as f64 / 40.0).round());
                    assert_eq!(out.roi_percent.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let estimator = SavingsEstimator::default();
        let inputs = CalculatorInputs::new(37.0, 19.0, 88.0);
        assert_eq!(estimator.compute(&inputs), estimator.compute(&inputs));
    }

    #[test]
    fn test_fte_rounds_half_away_from_zero() {
        // 1 × 20 / 40 = 0.5 exactly
        let out = compute(&CalculatorInputs::new(1.0, 20.0, 15.0));
        assert_eq!(out.fte_hours_freed, 1.0);

        let out = compute(&CalculatorInputs::new(-1.0, 20.0, 15.0));
        assert_eq!(out.fte_hours_freed, -1.0);
    }

    #[test]
    fn test_out_of_domain_inputs_do_not_panic() {
        let out = compute(&CalculatorInputs::new(-4.0, 10.0, 20.0));
        assert_eq!(out.weekly_cost, -800.0);
        assert!(out.roi_percent < 0.0);

        let out = compute(&CalculatorInputs::new(0.0, 0.0, 0.0));
        assert_eq!(out, CalculatorOutputs::default());

        let out = compute(&CalculatorInputs::new(2.5, 7.25, 31.5));
        assert_relative_eq!(out.weekly_cost, 2.5 * 7.25 * 31.5);
    }

    #[test]
    fn test_custom_assumptions() {
        let estimator = SavingsEstimator::new(SavingsAssumptions {
            implementation_cost: 12_000.0,
            automation_cost_ratio: 0.5,
            ..SavingsAssumptions::default()
        });
        assert!(!estimator.assumptions().is_default());
        assert!(SavingsEstimator::default().assumptions().is_default());
        let out = estimator.compute(&CalculatorInputs::new(5.0, 11.0, 25.0));

        assert_eq!(out.roi_percent, 596.0); // 71500 / 12000 = 5.958
        assert_eq!(out.automated_annual_cost, 35_750.0);
        assert_relative_eq!(out.monthly_savings, 35_750.0 / 12.0);
    }
}
