//! Monthly scenario projection

use super::rows::{aggregate_projection, ProjectionPoint, ProjectionResult};
use crate::assumptions::{ScenarioParameters, SeasonalCurve};
use crate::error::{ProjectionError, Result};
use crate::history::{Baseline, Month};

/// Project the three scenarios month by month from `first_month`
///
/// The running base compounds at `monthly_inflation + monthly_growth` each
/// month, starting from `start_value`. The moderate value is the base times
/// the calendar month's seasonal multiplier; the other bands are fixed
/// multiples of it. Returns exactly `horizon_years * 12` points.
pub fn project(
    start_value: f64,
    first_month: Month,
    params: &ScenarioParameters,
) -> Result<Vec<ProjectionPoint>> {
    if !start_value.is_finite() || start_value <= 0.0 {
        return Err(ProjectionError::InvalidParameter(format!(
            "start value must be positive, got {}",
            start_value
        )));
    }
    params.validate()?;

    let growth_factor = 1.0 + params.combined_monthly_rate();
    let seasonality = SeasonalCurve::default();
    let months = params.horizon_months()?;

    let mut points = Vec::with_capacity(months as usize);
    let mut base = start_value;
    let mut timestamp = first_month;
    for _ in 0..months {
        base *= growth_factor;
        let moderate = base * seasonality.multiplier(timestamp.month());
        points.push(ProjectionPoint::from_moderate(timestamp, moderate));
        timestamp = timestamp.next();
    }

    Ok(points)
}

/// Projection engine bound to one historical baseline
///
/// The baseline is computed once per history; each call to [`run`](Self::run)
/// recomputes the whole projection from scratch for the given parameters.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    baseline: Baseline,
}

impl ProjectionEngine {
    pub fn new(baseline: Baseline) -> Self {
        Self { baseline }
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Monthly points plus the annual rollup, boundary row first
    pub fn run(&self, params: &ScenarioParameters) -> Result<ProjectionResult> {
        let first_month = self.baseline.first_projected_month();
        let monthly = project(self.baseline.monthly_average, first_month, params)?;
        let annual = aggregate_projection(
            &monthly,
            Some((self.baseline.last_year, self.baseline.last_year_total)),
        );

        log::debug!(
            "projected {} months from {} (ipc {}%, growth {}%, start {:.2})",
            monthly.len(),
            first_month,
            params.annual_inflation_rate_percent,
            params.annual_organic_growth_percent,
            self.baseline.monthly_average
        );

        Ok(ProjectionResult {
            params: *params,
            last_historical_year: self.baseline.last_year,
            monthly,
            annual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Scenario;
    use crate::history::{HistoryParams, HistoryTemplate};
    use approx::assert_relative_eq;

    fn jan_2026() -> Month {
        Month::new(2026, 1).unwrap()
    }

    fn params(inflation: f64, growth: f64, years: u32) -> ScenarioParameters {
        ScenarioParameters {
            annual_inflation_rate_percent: inflation,
            annual_organic_growth_percent: growth,
            horizon_years: years,
        }
    }

    #[test]
    fn test_reference_first_month() {
        let points = project(100_000_000.0, jan_2026(), &params(4.5, 2.0, 1)).unwrap();
        assert_eq!(points.len(), 12);

        let first = &points[0];
        assert_eq!(first.timestamp, jan_2026());
        assert_relative_eq!(first.moderate, 108_072_652.0, max_relative = 1e-4);
        assert_relative_eq!(first.pessimistic, 91_861_754.0, max_relative = 1e-4);
        assert_relative_eq!(first.optimistic, 129_687_182.0, max_relative = 1e-4);
    }

    #[test]
    fn test_point_count_and_continuity() {
        for years in [1, 2, 10, 25] {
            let points = project(1000.0, Month::new(2025, 7).unwrap(), &params(3.0, 1.0, years)).unwrap();
            assert_eq!(points.len() as u32, years * 12);
            assert_eq!(points[0].timestamp, Month::new(2025, 7).unwrap());
            for pair in points.windows(2) {
                assert_eq!(pair[1].timestamp, pair[0].timestamp.next());
            }
        }
    }

    #[test]
    fn test_band_ratios_and_ordering() {
        let points = project(5_000.0, jan_2026(), &params(7.0, -5.0, 5)).unwrap();
        for p in &points {
            assert_relative_eq!(p.pessimistic, p.moderate * 0.85, max_relative = 1e-9);
            assert_relative_eq!(p.optimistic, p.moderate * 1.20, max_relative = 1e-9);
            assert!(p.optimistic >= p.moderate && p.moderate >= p.pessimistic);
        }
    }

    #[test]
    fn test_zero_rates_only_seasonal() {
        let start = 250_000.0;
        let points = project(start, jan_2026(), &params(0.0, 0.0, 3)).unwrap();
        let curve = SeasonalCurve::default();
        for p in &points {
            let expected = start * (1.0 + curve.factor(p.timestamp.month()));
            assert_relative_eq!(p.moderate, expected, max_relative = 1e-12);
        }
        // Same calendar month, different years: identical without growth
        assert_relative_eq!(points[2].moderate, points[26].moderate, max_relative = 1e-12);
    }

    #[test]
    fn test_same_month_compounds_across_years() {
        let p = params(4.5, 2.0, 2);
        let points = project(1000.0, jan_2026(), &p).unwrap();
        let yearly_growth = (1.0 + p.combined_monthly_rate()).powi(12);
        assert_relative_eq!(points[12].moderate / points[0].moderate, yearly_growth, max_relative = 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let p = params(4.5, 2.0, 10);
        let a = project(123_456.0, jan_2026(), &p).unwrap();
        let b = project(123_456.0, jan_2026(), &p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs() {
        let p = params(4.5, 2.0, 1);
        assert!(matches!(project(0.0, jan_2026(), &p), Err(ProjectionError::InvalidParameter(_))));
        assert!(matches!(project(-1.0, jan_2026(), &p), Err(ProjectionError::InvalidParameter(_))));
        assert!(project(f64::INFINITY, jan_2026(), &p).is_err());
        assert!(matches!(
            project(1.0, jan_2026(), &params(4.5, 2.0, 0)),
            Err(ProjectionError::InvalidParameter(_))
        ));
        assert!(matches!(
            project(1.0, jan_2026(), &params(4.5, 2.0, 400_000_000)),
            Err(ProjectionError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_engine_run() {
        let history = HistoryTemplate::new().generate(&HistoryParams::default()).unwrap();
        let baseline = Baseline::from_history(&history).unwrap();
        let engine = ProjectionEngine::new(baseline);

        let result = engine.run(&params(4.5, 2.0, 2)).unwrap();
        assert_eq!(result.monthly.len(), 24);
        assert_eq!(result.monthly[0].timestamp, Month::new(2026, 1).unwrap());

        // Boundary row plus two projected years
        assert_eq!(result.annual.len(), 3);
        assert!(result.annual[0].historical);
        assert_eq!(result.annual[0].year, 2025);
        assert_relative_eq!(result.annual[0].moderate, baseline.last_year_total);
        assert_eq!(result.annual[0].pessimistic, result.annual[0].optimistic);

        for (row, months) in result.annual[1..].iter().zip(result.monthly.chunks(12)) {
            for scenario in Scenario::ALL {
                let expected: f64 = months.iter().map(|p| p.value(scenario)).sum();
                assert_relative_eq!(row.value(scenario), expected, max_relative = 1e-12);
            }
        }

        assert_eq!(result.last_historical_year, 2025);
        assert_eq!(result.final_year().map(|r| r.year), Some(2027));
        assert_eq!(result.projected_years().count(), 2);
    }
}
