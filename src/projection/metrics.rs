//! Yield metrics against the initial investment
//!
//! Yield is a revenue total divided by the investment. Cumulative figures
//! only count projected years, never the historical boundary row.

use super::rows::{AnnualAggregate, ProjectionResult};
use crate::assumptions::Scenario;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time resolution of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    #[default]
    Yearly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Monthly => f.write_str("monthly"),
            Granularity::Yearly => f.write_str("yearly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Granularity::Monthly),
            "yearly" | "annual" => Ok(Granularity::Yearly),
            other => Err(format!("unknown granularity '{}' (expected monthly or yearly)", other)),
        }
    }
}

/// Last historical year's total over the investment
pub fn current_yield(last_historical_year_total: f64, initial_investment: f64) -> f64 {
    last_historical_year_total / initial_investment
}

/// Sum of a scenario's annual values over years after `last_historical_year`
pub fn cumulative_projected_revenue(
    annual: &[AnnualAggregate],
    last_historical_year: i32,
    scenario: Scenario,
) -> f64 {
    annual
        .iter()
        .filter(|row| row.is_projected_after(last_historical_year))
        .map(|row| row.value(scenario))
        .sum()
}

pub fn cumulative_yield(
    annual: &[AnnualAggregate],
    last_historical_year: i32,
    scenario: Scenario,
    initial_investment: f64,
) -> f64 {
    cumulative_projected_revenue(annual, last_historical_year, scenario) / initial_investment
}

/// Year and value of the last annual row for a scenario
pub fn final_year_projection(annual: &[AnnualAggregate], scenario: Scenario) -> Option<(i32, f64)> {
    annual.last().map(|row| (row.year, row.value(scenario)))
}

/// Express a value as a yield on the investment
///
/// Monthly values are measured against a twelfth of the investment so they
/// read on the same scale as annual yields.
pub fn value_as_yield(value: f64, granularity: Granularity, initial_investment: f64) -> f64 {
    match granularity {
        Granularity::Yearly => value / initial_investment,
        Granularity::Monthly => value / (initial_investment / 12.0),
    }
}

/// Headline numbers for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSummary {
    pub scenario: Scenario,
    pub last_historical_year: i32,
    pub last_historical_total: f64,
    pub current_yield: f64,
    pub final_year: i32,
    pub final_year_value: f64,
    pub cumulative_revenue: f64,
    pub cumulative_yield: f64,
}

impl YieldSummary {
    pub fn compute(
        result: &ProjectionResult,
        last_historical_year: i32,
        last_historical_total: f64,
        scenario: Scenario,
        initial_investment: f64,
    ) -> Self {
        let cumulative_revenue =
            cumulative_projected_revenue(&result.annual, last_historical_year, scenario);
        let (final_year, final_year_value) = final_year_projection(&result.annual, scenario)
            .unwrap_or((last_historical_year, last_historical_total));

        Self {
            scenario,
            last_historical_year,
            last_historical_total,
            current_yield: current_yield(last_historical_total, initial_investment),
            final_year,
            final_year_value,
            cumulative_revenue,
            cumulative_yield: cumulative_revenue / initial_investment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ScenarioParameters;
    use crate::history::{Baseline, HistoryParams, HistoryTemplate};
    use crate::projection::ProjectionEngine;
    use approx::assert_relative_eq;

    fn annual() -> Vec<AnnualAggregate> {
        vec![
            AnnualAggregate::boundary(2025, 100.0),
            AnnualAggregate { year: 2026, pessimistic: 85.0, moderate: 100.0, optimistic: 120.0, historical: false },
            AnnualAggregate { year: 2027, pessimistic: 170.0, moderate: 200.0, optimistic: 240.0, historical: false },
        ]
    }

    #[test]
    fn test_current_yield() {
        assert_relative_eq!(current_yield(250.0, 1000.0), 0.25);
    }

    #[test]
    fn test_cumulative_excludes_boundary() {
        let rows = annual();
        assert_relative_eq!(cumulative_projected_revenue(&rows, 2025, Scenario::Moderate), 300.0);
        assert_relative_eq!(cumulative_projected_revenue(&rows, 2025, Scenario::Optimistic), 360.0);
        assert_relative_eq!(cumulative_yield(&rows, 2025, Scenario::Pessimistic, 1000.0), 0.255);
    }

    #[test]
    fn test_final_year() {
        assert_eq!(final_year_projection(&annual(), Scenario::Optimistic), Some((2027, 240.0)));
        assert_eq!(final_year_projection(&[], Scenario::Moderate), None);
    }

    #[test]
    fn test_value_as_yield() {
        assert_relative_eq!(value_as_yield(120.0, Granularity::Yearly, 1200.0), 0.1);
        assert_relative_eq!(value_as_yield(10.0, Granularity::Monthly, 1200.0), 0.1);
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!("Monthly".parse::<Granularity>().unwrap(), Granularity::Monthly);
        assert_eq!("annual".parse::<Granularity>().unwrap(), Granularity::Yearly);
        assert!("weekly".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_summary_from_engine() {
        let history = HistoryTemplate::new().generate(&HistoryParams::default()).unwrap();
        let baseline = Baseline::from_history(&history).unwrap();
        let params = ScenarioParameters { horizon_years: 3, ..Default::default() };
        let result = ProjectionEngine::new(baseline).run(&params).unwrap();

        let investment = 2_500_000_000.0;
        let summary = YieldSummary::compute(
            &result,
            baseline.last_year,
            baseline.last_year_total,
            Scenario::Optimistic,
            investment,
        );

        assert_eq!(summary.final_year, 2028);
        // Cumulative metric and projected_years count the same rows
        let expected: f64 = result.projected_years().map(|r| r.optimistic).sum();
        assert_relative_eq!(summary.cumulative_revenue, expected);
        assert_relative_eq!(summary.cumulative_yield, expected / investment);
        assert_relative_eq!(summary.current_yield, baseline.last_year_total / investment);
    }
}
