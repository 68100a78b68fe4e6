//! Evaluate the estimator across a grid of slider positions
//!
//! Grid points are independent, so they are computed in parallel and written
//! out as one CSV row each.

use crate::error::{EstimatorError, Result};
use crate::estimator::{CalculatorInputs, InputField, SavingsEstimator};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Largest grid a sweep will build; the full step-1 grid is 744,000 points
pub const MAX_SWEEP_POINTS: u64 = 10_000_000;

/// Step sizes for walking each slider from its minimum to its maximum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    #[serde(default = "default_step")]
    pub employees_step: f64,
    #[serde(default = "default_step")]
    pub hours_step: f64,
    #[serde(default = "default_step")]
    pub rate_step: f64,
}

fn default_step() -> f64 { 1.0 }

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            employees_step: 1.0,
            hours_step: 1.0,
            rate_step: 1.0,
        }
    }
}

impl SweepGrid {
    pub fn new(employees_step: f64, hours_step: f64, rate_step: f64) -> Result<Self> {
        let grid = Self {
            employees_step,
            hours_step,
            rate_step,
        };
        grid.validate()?;
        Ok(grid)
    }

    fn validate(&self) -> Result<()> {
        for (field, step) in [
            ("employees", self.employees_step),
            ("hours", self.hours_step),
            ("rate", self.rate_step),
        ] {
            if !step.is_finite() || step <= 0.0 {
                return Err(EstimatorError::InvalidStep { field, step });
            }
        }

        // Counted in f64 so tiny steps cannot overflow before the check
        let points = self.point_count();
        if points > MAX_SWEEP_POINTS as f64 {
            return Err(EstimatorError::GridTooLarge {
                points,
                limit: MAX_SWEEP_POINTS,
            });
        }
        Ok(())
    }

    /// Number of grid points, computed without building the grid
    pub fn point_count(&self) -> f64 {
        axis_len(InputField::Employees, self.employees_step)
            * axis_len(InputField::HoursPerWeek, self.hours_step)
            * axis_len(InputField::HourlyRate, self.rate_step)
    }

    /// Every grid point, employees outermost
    pub fn points(&self) -> Vec<CalculatorInputs> {
        let employees = axis(InputField::Employees, self.employees_step);
        let hours = axis(InputField::HoursPerWeek, self.hours_step);
        let rates = axis(InputField::HourlyRate, self.rate_step);

        let mut points = Vec::with_capacity(employees.len() * hours.len() * rates.len());
        for &e in &employees {
            for &h in &hours {
                for &r in &rates {
                    points.push(CalculatorInputs::new(e, h, r));
                }
            }
        }
        points
    }
}

/// Length of `axis(field, step)`
fn axis_len(field: InputField, step: f64) -> f64 {
    let bounds = field.bounds();
    ((bounds.max - bounds.min) / step).ceil() + 1.0
}

/// Slider values from min to max inclusive; max is always included
fn axis(field: InputField, step: f64) -> Vec<f64> {
    let bounds = field.bounds();
    let mut values = Vec::with_capacity(axis_len(field, step) as usize);
    let mut i = 0u64;
    loop {
        let v = bounds.min + step * i as f64;
        if v >= bounds.max {
            break;
        }
        values.push(v);
        i += 1;
    }
    values.push(bounds.max);
    values
}

/// One evaluated grid point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub employees: f64,
    pub hours_per_week: f64,
    pub hourly_rate: f64,
    pub weekly_cost: f64,
    pub annual_savings: f64,
    pub growth_value: f64,
    pub cost_of_inaction: f64,
    pub roi_percent: f64,
    pub fte_hours_freed: f64,
    pub current_annual_cost: f64,
    pub automated_annual_cost: f64,
    pub monthly_savings: f64,
}

/// Compute every grid point in parallel, preserving grid order
pub fn run_sweep(estimator: &SavingsEstimator, grid: &SweepGrid) -> Result<Vec<SweepRow>> {
    grid.validate()?;
    let points = grid.points();
    log::info!("sweeping {} grid points", points.len());

    let rows = points
        .par_iter()
        .map(|inputs| {
            let out = estimator.compute(inputs);
            SweepRow {
                employees: inputs.employee_count,
                hours_per_week: inputs.weekly_hours_per_employee,
                hourly_rate: inputs.hourly_rate_usd,
                weekly_cost: out.weekly_cost,
                annual_savings: out.annual_savings,
                growth_value: out.growth_value,
                cost_of_inaction: out.cost_of_inaction,
                roi_percent: out.roi_percent,
                fte_hours_freed: out.fte_hours_freed,
                current_annual_cost: out.current_annual_cost,
                automated_annual_cost: out.automated_annual_cost,
                monthly_savings: out.monthly_savings,
            }
        })
        .collect();
    Ok(rows)
}

/// Write rows as CSV with a header line
pub fn write_csv<W: Write>(rows: &[SweepRow], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_size() {
        let points = SweepGrid::default().points();
        assert_eq!(points.len(), 100 * 40 * 186);
        assert_eq!(points[0], CalculatorInputs::new(1.0, 1.0, 15.0));
        assert_eq!(points[points.len() - 1], CalculatorInputs::new(100.0, 40.0, 200.0));
    }

    #[test]
    fn test_axis_includes_max() {
        // 1, 50, 99, then 100
        assert_eq!(axis(InputField::Employees, 49.0), vec![1.0, 50.0, 99.0, 100.0]);
        // 15, 115, then 200
        assert_eq!(axis(InputField::HourlyRate, 100.0), vec![15.0, 115.0, 200.0]);
        assert_eq!(axis(InputField::HoursPerWeek, 39.0), vec![1.0, 40.0]);
    }

    #[test]
    fn test_invalid_step() {
        assert!(matches!(
            SweepGrid::new(0.0, 1.0, 1.0),
            Err(EstimatorError::InvalidStep { field: "employees", .. })
        ));
        assert!(SweepGrid::new(1.0, f64::NAN, 1.0).is_err());
        assert!(SweepGrid::new(1.0, 1.0, -5.0).is_err());
    }

    #[test]
    fn test_point_count_matches_grid() {
        for grid in [
            SweepGrid::default(),
            SweepGrid::new(49.0, 39.0, 100.0).expect("valid grid"),
            SweepGrid::new(3.0, 7.0, 0.5).expect("valid grid"),
        ] {
            assert_eq!(grid.point_count(), grid.points().len() as f64);
        }
        assert_eq!(axis_len(InputField::Employees, 49.0), 4.0);
    }

    #[test]
    fn test_tiny_step_rejected_before_allocating() {
        let err = SweepGrid::new(1e-9, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::GridTooLarge { limit: MAX_SWEEP_POINTS, points } if points > 7e14
        ));

        let grid = SweepGrid {
            employees_step: 1.0,
            hours_step: 1.0,
            rate_step: 1e-12,
        };
        assert!(matches!(
            run_sweep(&SavingsEstimator::default(), &grid),
            Err(EstimatorError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_run_sweep_matches_estimator() {
        let estimator = SavingsEstimator::default();
        let grid = SweepGrid::new(99.0, 39.0, 185.0).expect("valid grid");
        let rows = run_sweep(&estimator, &grid).expect("sweep");

        assert_eq!(rows.len(), 8);
        let first = &rows[0];
        assert_eq!(first.annual_savings, 780.0);
        assert_eq!(first.roi_percent, 13.0);
        let last = &rows[7];
        assert_eq!(last.annual_savings, 41_600_000.0);
        assert_eq!(last.roi_percent, 693_333.0);
        assert_eq!(last.fte_hours_freed, 100.0);
    }

    #[test]
    fn test_write_csv() {
        let estimator = SavingsEstimator::default();
        let grid = SweepGrid::new(99.0, 39.0, 185.0).expect("valid grid");
        let rows = run_sweep(&estimator, &grid).expect("sweep");

        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("employees,hours_per_week,hourly_rate,weekly_cost,annual_savings,growth_value,cost_of_inaction,roi_percent,fte_hours_freed,current_annual_cost,automated_annual_cost,monthly_savings")
        );
        assert_eq!(lines.count(), 8);
    }
}
