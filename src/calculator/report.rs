//! Display model of the calculator page results

use super::format::{format_count, format_percent, format_usd};
use crate::estimator::CalculatorOutputs;
use serde::Serialize;
use std::fmt;

/// One result card: a label, its formatted value and the help text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    /// Caption printed under the value, if the card has one
    pub caption: Option<&'static str>,
    pub tooltip: &'static str,
}

/// Row of the cost comparison block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub value: String,
}

/// All displayed results, in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsReport {
    /// Annual Cost Savings, Potential Growth Value
    pub headline: Vec<MetricCard>,
    /// ROI, Cost of Inaction, FTE Hours Freed
    pub secondary: Vec<MetricCard>,
    /// Current Process, With AI Automation, Monthly Savings
    pub cost_comparison: Vec<ComparisonRow>,
}

impl SavingsReport {
    pub fn from_outputs(out: &CalculatorOutputs) -> Self {
        let headline = vec![
            MetricCard {
                title: "Annual Cost Savings",
                value: format_usd(out.annual_savings),
                caption: None,
                tooltip: "Estimated yearly savings from implementing AI automation",
            },
            MetricCard {
                title: "Potential Growth Value",
                value: format_usd(out.growth_value),
                caption: None,
                tooltip: "Potential 3-year value from reinvesting savings",
            },
        ];

        let secondary = vec![
            MetricCard {
                title: "ROI",
                value: format_percent(out.roi_percent),
                caption: Some("Return on Investment"),
                tooltip: "Return on investment in the first year",
            },
            MetricCard {
                title: "Cost of Inaction",
                value: format_usd(out.cost_of_inaction),
                caption: Some("3-Year Opportunity Cost"),
                tooltip: "Potential 3-year opportunity cost",
            },
            MetricCard {
                title: "FTE Hours Freed",
                value: format_count(out.fte_hours_freed),
                caption: Some("Full Time Equivalent"),
                tooltip: "Full-time equivalent hours saved",
            },
        ];

        let cost_comparison = vec![
            ComparisonRow { label: "Current Process", value: format_usd(out.current_annual_cost) },
            ComparisonRow { label: "With AI Automation", value: format_usd(out.automated_annual_cost) },
            ComparisonRow { label: "Monthly Savings", value: format_usd(out.monthly_savings) },
        ];

        Self {
            headline,
            secondary,
            cost_comparison,
        }
    }

    /// Find a card by its title
    pub fn card(&self, title: &str) -> Option<&MetricCard> {
        self.headline
            .iter()
            .chain(self.secondary.iter())
            .find(|card| card.title == title)
    }
}

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.headline.iter().chain(self.secondary.iter()) {
            writeln!(f, "{:<24} {:>16}", card.title, card.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Cost Comparison")?;
        for row in &self.cost_comparison {
            writeln!(f, "  {:<22} {:>16}", row.label, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{compute, CalculatorInputs};

    #[test]
    fn test_report_for_page_defaults() {
        let report = SavingsReport::from_outputs(&compute(&CalculatorInputs::default()));

        assert_eq!(report.card("Annual Cost Savings").map(|c| c.value.as_str()), Some("$71,500"));
        assert_eq!(report.card("Potential Growth Value").map(|c| c.value.as_str()), Some("$214,500"));
        assert_eq!(report.card("ROI").map(|c| c.value.as_str()), Some("1192%"));
        assert_eq!(report.card("Cost of Inaction").map(|c| c.value.as_str()), Some("$214,500"));
        assert_eq!(report.card("FTE Hours Freed").map(|c| c.value.as_str()), Some("1"));

        let comparison: Vec<&str> = report.cost_comparison.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(comparison, vec!["$71,500", "$20,020", "$4,290"]);
    }

    #[test]
    fn test_report_order_and_captions() {
        let report = SavingsReport::from_outputs(&compute(&CalculatorInputs::default()));

        let titles: Vec<&str> = report.headline.iter().chain(report.secondary.iter()).map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Annual Cost Savings", "Potential Growth Value", "ROI", "Cost of Inaction", "FTE Hours Freed"]
        );
        assert!(report.headline.iter().all(|c| c.caption.is_none()));
        assert!(report.secondary.iter().all(|c| c.caption.is_some()));
        assert!(report.card("Missing").is_none());
    }

    #[test]
    fn test_report_text_rendering() {
        let text = SavingsReport::from_outputs(&compute(&CalculatorInputs::new(1.0, 1.0, 15.0))).to_string();
        assert!(text.contains("Annual Cost Savings"));
        assert!(text.contains("$780"));
        assert!(text.contains("$2,340"));
        assert!(text.contains("13%"));
        assert!(text.contains("Monthly Savings"));
        assert!(text.contains("$47"));
    }
}
