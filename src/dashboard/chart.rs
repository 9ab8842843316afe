//! Combined historical and projected chart series
//!
//! The historical series fills `actual`; projections fill the three scenario
//! columns. The last historical point carries its realised value in every
//! scenario column as well, so the projected lines start where history ends.

use crate::history::{Baseline, HistoricalPoint};
use crate::projection::{Granularity, ProjectionResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One x-axis position of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub actual: Option<f64>,
    pub pessimistic: Option<f64>,
    pub moderate: Option<f64>,
    pub optimistic: Option<f64>,
}

impl ChartPoint {
    fn historical(label: String, value: f64, is_join: bool) -> Self {
        let join = is_join.then_some(value);
        Self { label, actual: Some(value), pessimistic: join, moderate: join, optimistic: join }
    }

    fn projected(label: String, pessimistic: f64, moderate: f64, optimistic: f64) -> Self {
        Self {
            label,
            actual: None,
            pessimistic: Some(pessimistic),
            moderate: Some(moderate),
            optimistic: Some(optimistic),
        }
    }
}

/// Build the chart series at the requested granularity
pub fn build_chart(
    history: &[HistoricalPoint],
    historical_annual: &BTreeMap<i32, f64>,
    baseline: &Baseline,
    projection: &ProjectionResult,
    granularity: Granularity,
) -> Vec<ChartPoint> {
    match granularity {
        Granularity::Yearly => {
            let past = historical_annual.iter().map(|(&year, &total)| {
                ChartPoint::historical(year.to_string(), total, year == baseline.last_year)
            });
            let future = projection.projected_years().map(|row| {
                ChartPoint::projected(row.year.to_string(), row.pessimistic, row.moderate, row.optimistic)
            });
            past.chain(future).collect()
        }
        Granularity::Monthly => {
            let past = history.iter().map(|p| {
                ChartPoint::historical(p.timestamp.to_string(), p.revenue, p.timestamp == baseline.last_month)
            });
            let future = projection.monthly.iter().map(|p| {
                ChartPoint::projected(p.timestamp.to_string(), p.pessimistic, p.moderate, p.optimistic)
            });
            past.chain(future).collect()
        }
    }
}
