//! Calculator inputs and the slider domains that bound them

use serde::{Deserialize, Serialize};

/// The three user-adjustable inputs of the calculator
///
/// Values are `f64` so the estimator accepts any real number. The sliders
/// only ever produce whole numbers inside their domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Number of employees who would benefit from automation, domain [1, 100]
    #[serde(default = "default_employees", alias = "employeeCount", alias = "employees")]
    pub employee_count: f64,

    /// Hours per week each employee spends on automatable tasks, domain [1, 40]
    #[serde(default = "default_hours", alias = "weeklyHoursPerEmployee", alias = "hours")]
    pub weekly_hours_per_employee: f64,

    /// Average fully loaded hourly cost per employee, domain [15, 200]
    #[serde(default = "default_rate", alias = "hourlyRateUsd", alias = "rate")]
    pub hourly_rate_usd: f64,
}

fn default_employees() -> f64 { 5.0 }
fn default_hours() -> f64 { 11.0 }
fn default_rate() -> f64 { 25.0 }

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            employee_count: 5.0,
            weekly_hours_per_employee: 11.0,
            hourly_rate_usd: 25.0,
        }
    }
}

impl CalculatorInputs {
    pub fn new(employee_count: f64, weekly_hours_per_employee: f64, hourly_rate_usd: f64) -> Self {
        Self {
            employee_count,
            weekly_hours_per_employee,
            hourly_rate_usd,
        }
    }

    /// Read one input by field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Employees => self.employee_count,
            InputField::HoursPerWeek => self.weekly_hours_per_employee,
            InputField::HourlyRate => self.hourly_rate_usd,
        }
    }

    /// Overwrite one input by field
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::Employees => self.employee_count = value,
            InputField::HoursPerWeek => self.weekly_hours_per_employee = value,
            InputField::HourlyRate => self.hourly_rate_usd = value,
        }
    }

    /// Copy of these inputs with every field clamped into its slider domain
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for field in InputField::ALL {
            out.set(field, field.bounds().snap(self.get(field)));
        }
        out
    }

    /// True when every field sits inside its slider domain
    pub fn in_domain(&self) -> bool {
        InputField::ALL
            .iter()
            .all(|field| field.bounds().contains(self.get(*field)))
    }
}

/// Identifies one of the three sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Employees,
    HoursPerWeek,
    HourlyRate,
}

impl InputField {
    pub const ALL: [InputField; 3] = [
        InputField::Employees,
        InputField::HoursPerWeek,
        InputField::HourlyRate,
    ];

    /// Slider domain for this field
    pub fn bounds(&self) -> SliderBounds {
        match self {
            InputField::Employees => SliderBounds::new(1.0, 100.0),
            InputField::HoursPerWeek => SliderBounds::new(1.0, 40.0),
            InputField::HourlyRate => SliderBounds::new(15.0, 200.0),
        }
    }

    /// Label shown above the slider (the current value is appended by the UI)
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Employees => "Number of Employees",
            InputField::HoursPerWeek => "Hours Spent on Tasks (per week, per employee)",
            InputField::HourlyRate => "Average Hourly Rate ($)",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            InputField::Employees => "Total number of employees who will benefit from AI automation",
            InputField::HoursPerWeek => "Average hours each employee spends on tasks that could be automated",
            InputField::HourlyRate => "Average hourly cost per employee including benefits",
        }
    }
}

/// Inclusive range of a slider with a step of 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
}

impl SliderBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range and snap to the nearest whole step, as a range widget does
    /// NaN and inverted bounds snap to the minimum
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() || self.is_empty() {
            return self.min;
        }
        value.round().clamp(self.min, self.max)
    }

    /// Number of whole values the slider can take
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max - self.min).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
}
