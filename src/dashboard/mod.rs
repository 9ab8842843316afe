//! Dashboard session: cached history, per-request projections, cards, chart and table

mod chart;

pub use chart::{ChartPoint, build_chart};

use crate::assumptions::{DashboardConfig, Scenario, ScenarioParameters};
use crate::error::{ProjectionError, Result};
use crate::format::{format_currency, format_percentage};
use crate::history::{aggregate_annual, validate_series, Baseline, HistoricalPoint, HistoryTemplate};
use crate::projection::metrics::value_as_yield;
use crate::projection::{Granularity, ProjectionEngine, ProjectionResult, YieldSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Unit of table values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Revenue in currency
    #[default]
    Value,
    /// Revenue as a yield on the investment
    Percent,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Value => f.write_str("value"),
            ViewMode::Percent => f.write_str("percent"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" => Ok(ViewMode::Value),
            "percent" | "roi" => Ok(ViewMode::Percent),
            other => Err(format!("unknown view mode '{}' (expected value or percent)", other)),
        }
    }
}

/// Everything the user can tune for one recomputation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardRequest {
    pub params: ScenarioParameters,
    pub scenario: Scenario,
    pub granularity: Granularity,
    pub view: ViewMode,
}

/// A headline card: title, formatted value, subtitle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

/// One row of the detail table, in currency or yield depending on the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub label: String,
    pub pessimistic: f64,
    pub moderate: f64,
    pub optimistic: f64,
    pub historical: bool,
}

/// Complete dashboard output for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub request: DashboardRequest,
    pub initial_investment: f64,
    pub summary: YieldSummary,
    pub cards: Vec<SummaryCard>,
    pub chart: Vec<ChartPoint>,
    pub table: Vec<TableRow>,
}

/// A dashboard session over one immutable historical series
///
/// The annual aggregate and the baseline are computed once here; every
/// request recomputes only the projection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    history: Vec<HistoricalPoint>,
    historical_annual: BTreeMap<i32, f64>,
    engine: ProjectionEngine,
}

impl Dashboard {
    pub fn new(history: Vec<HistoricalPoint>, config: DashboardConfig) -> Result<Self> {
        if !config.initial_investment.is_finite() || config.initial_investment <= 0.0 {
            return Err(ProjectionError::InvalidParameter(format!(
                "initial investment must be positive, got {}",
                config.initial_investment
            )));
        }
        validate_series(&history)?;

        let historical_annual = aggregate_annual(&history)?;
        let baseline = Baseline::from_history(&history)?;
        log::info!(
            "dashboard ready: {} months through {}, {} total {:.0}",
            history.len(),
            baseline.last_month,
            baseline.last_year,
            baseline.last_year_total
        );

        Ok(Self {
            config,
            history,
            historical_annual,
            engine: ProjectionEngine::new(baseline),
        })
    }

    /// Session over the synthetic history described by the config
    pub fn synthetic(config: DashboardConfig) -> Result<Self> {
        let history = HistoryTemplate::new().generate(&config.history)?;
        Self::new(history, config)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn history(&self) -> &[HistoricalPoint] {
        &self.history
    }

    pub fn historical_annual(&self) -> &BTreeMap<i32, f64> {
        &self.historical_annual
    }

    pub fn baseline(&self) -> &Baseline {
        self.engine.baseline()
    }

    pub fn project(&self, params: &ScenarioParameters) -> Result<ProjectionResult> {
        self.engine.run(params)
    }

    /// Recompute projections and assemble cards, chart and table
    pub fn view(&self, request: &DashboardRequest) -> Result<DashboardView> {
        let projection = self.project(&request.params)?;
        let baseline = *self.baseline();
        let investment = self.config.initial_investment;

        let summary = YieldSummary::compute(
            &projection,
            baseline.last_year,
            baseline.last_year_total,
            request.scenario,
            investment,
        );
        let cards = summary_cards(&summary);
        let chart = build_chart(
            &self.history,
            &self.historical_annual,
            &baseline,
            &projection,
            request.granularity,
        );
        let table = table_rows(&projection, request.granularity, request.view, investment);

        Ok(DashboardView {
            request: *request,
            initial_investment: investment,
            summary,
            cards,
            chart,
            table,
        })
    }
}

fn summary_cards(summary: &YieldSummary) -> Vec<SummaryCard> {
    let label = summary.scenario.label();
    vec![
        SummaryCard {
            title: format!("Actual revenue ({})", summary.last_historical_year),
            value: format_currency(summary.last_historical_total),
            subtitle: "Close of last historical year".to_string(),
        },
        SummaryCard {
            title: "Current yield".to_string(),
            value: format_percentage(summary.current_yield),
            subtitle: "Current ROI vs investment".to_string(),
        },
        SummaryCard {
            title: format!("Final projection ({})", summary.final_year),
            value: format_currency(summary.final_year_value),
            subtitle: label.to_string(),
        },
        SummaryCard {
            title: format!(
                "Cumulative total ({}-{})",
                summary.last_historical_year + 1,
                summary.final_year
            ),
            value: format_currency(summary.cumulative_revenue),
            subtitle: format!("{} (yield: {})", label, format_percentage(summary.cumulative_yield)),
        },
    ]
}

fn table_rows(
    projection: &ProjectionResult,
    granularity: Granularity,
    view: ViewMode,
    investment: f64,
) -> Vec<TableRow> {
    let convert = |v: f64| match view {
        ViewMode::Value => v,
        ViewMode::Percent => value_as_yield(v, granularity, investment),
    };

    match granularity {
        Granularity::Yearly => projection
            .annual
            .iter()
            .map(|row| TableRow {
                label: row.year.to_string(),
                pessimistic: convert(row.pessimistic),
                moderate: convert(row.moderate),
                optimistic: convert(row.optimistic),
                historical: row.historical,
            })
            .collect(),
        Granularity::Monthly => projection
            .monthly
            .iter()
            .map(|p| TableRow {
                label: p.timestamp.to_string(),
                pessimistic: convert(p.pessimistic),
                moderate: convert(p.moderate),
                optimistic: convert(p.optimistic),
                historical: false,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Month;
    use approx::assert_relative_eq;

    fn dashboard() -> Dashboard {
        Dashboard::synthetic(DashboardConfig::default()).expect("Failed to build dashboard")
    }

    #[test]
    fn test_session_caches_history() {
        let d = dashboard();
        assert_eq!(d.history().len(), 60);
        assert_eq!(d.historical_annual().len(), 5);
        assert_eq!(d.baseline().last_month, Month::new(2025, 12).unwrap());
        assert_relative_eq!(d.historical_annual()[&2025], d.baseline().last_year_total);
    }

    #[test]
    fn test_default_view() {
        let d = dashboard();
        let view = d.view(&DashboardRequest::default()).unwrap();

        // Defaults: 10 years, moderate, yearly, value
        assert_eq!(view.summary.final_year, 2035);
        assert_eq!(view.table.len(), 11);
        assert!(view.table[0].historical);
        assert_eq!(view.table[0].label, "2025");
        assert_eq!(view.chart.len(), 15);
        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.cards[0].title, "Actual revenue (2025)");
        assert_eq!(view.cards[3].title, "Cumulative total (2026-2035)");
    }

    #[test]
    fn test_percent_view() {
        let d = dashboard();
        let investment = d.config().initial_investment;

        let value = d.view(&DashboardRequest { view: ViewMode::Value, ..Default::default() }).unwrap();
        let pct = d.view(&DashboardRequest { view: ViewMode::Percent, ..Default::default() }).unwrap();
        assert_relative_eq!(pct.table[1].moderate, value.table[1].moderate / investment);

        let monthly = DashboardRequest {
            granularity: Granularity::Monthly,
            view: ViewMode::Percent,
            ..Default::default()
        };
        let view = d.view(&monthly).unwrap();
        assert_eq!(view.table.len(), 120);
        let first = d.project(&monthly.params).unwrap().monthly[0];
        assert_relative_eq!(view.table[0].optimistic, first.optimistic * 12.0 / investment);
    }

    #[test]
    fn test_invalid_request() {
        let d = dashboard();
        let request = DashboardRequest {
            params: ScenarioParameters { horizon_years: 0, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(d.view(&request), Err(ProjectionError::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_session() {
        let config = DashboardConfig { initial_investment: 0.0, ..Default::default() };
        assert!(Dashboard::synthetic(config).is_err());
        assert!(matches!(
            Dashboard::new(Vec::new(), DashboardConfig::default()),
            Err(ProjectionError::EmptyInput)
        ));
    }

    #[test]
    fn test_partial_last_year_rejected() {
        // Jan..Jun 2025 would put the boundary year and a projected 2025 side by side
        let first = Month::new(2025, 1).unwrap();
        let history = (0..6).map(|i| HistoricalPoint::new(first.advance(i), 1000.0)).collect();
        assert!(matches!(
            Dashboard::new(history, DashboardConfig::default()),
            Err(ProjectionError::InvalidHistory(_))
        ));
    }

    #[test]
    fn test_yearly_labels_unique() {
        let view = dashboard().view(&DashboardRequest::default()).unwrap();
        let mut labels: Vec<&str> = view.table.iter().map(|r| r.label.as_str()).collect();
        labels.dedup();
        assert_eq!(labels.len(), view.table.len());

        let projected: f64 = view.table.iter().filter(|r| !r.historical).map(|r| r.moderate).sum();
        assert_relative_eq!(view.summary.cumulative_revenue, projected, max_relative = 1e-12);
    }

    #[test]
    fn test_request_json_defaults() {
        let request: DashboardRequest =
            serde_json::from_str(r#"{"scenario": "optimistic", "params": {"horizon_years": 2}}"#).unwrap();
        assert_eq!(request.scenario, Scenario::Optimistic);
        assert_eq!(request.params.horizon_years, 2);
        assert_eq!(request.params.annual_inflation_rate_percent, 4.5);
        assert_eq!(request.granularity, Granularity::Yearly);
        assert_eq!(request.view, ViewMode::Value);
    }
}
