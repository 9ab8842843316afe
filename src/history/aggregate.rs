//! Annual aggregation of the historical series

use super::{HistoricalPoint, Month};
use crate::error::{ProjectionError, Result};
use std::collections::BTreeMap;

/// Total revenue per calendar year, one entry per distinct year present
pub fn aggregate_annual(history: &[HistoricalPoint]) -> Result<BTreeMap<i32, f64>> {
    if history.is_empty() {
        return Err(ProjectionError::EmptyInput);
    }
    let mut totals = BTreeMap::new();
    for point in history {
        *totals.entry(point.timestamp.year()).or_insert(0.0) += point.revenue;
    }
    Ok(totals)
}

/// Mean monthly revenue over the latest year present in the series
pub fn last_year_monthly_average(history: &[HistoricalPoint]) -> Result<f64> {
    let last_year = history
        .iter()
        .map(|p| p.timestamp.year())
        .max()
        .ok_or(ProjectionError::EmptyInput)?;

    let (sum, count) = history
        .iter()
        .filter(|p| p.timestamp.year() == last_year)
        .fold((0.0, 0usize), |(sum, count), p| (sum + p.revenue, count + 1));

    Ok(sum / count as f64)
}

/// Starting state for a projection, derived once from the historical series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Latest month in the series; the projection starts the month after
    pub last_month: Month,
    /// Calendar year of `last_month`
    pub last_year: i32,
    /// Total revenue of `last_year`
    pub last_year_total: f64,
    /// Mean monthly revenue of `last_year`
    pub monthly_average: f64,
}

impl Baseline {
    /// The series must end in December so the last historical year is
    /// complete and projected years never share a year with it.
    pub fn from_history(history: &[HistoricalPoint]) -> Result<Self> {
        let last_month = history
            .iter()
            .map(|p| p.timestamp)
            .max()
            .ok_or(ProjectionError::EmptyInput)?;
        if last_month.month() != 12 {
            return Err(ProjectionError::InvalidHistory(format!(
                "history must end in December, last month is {}",
                last_month
            )));
        }
        let last_year = last_month.year();

        let mut last_year_total = 0.0;
        let mut months = 0usize;
        for point in history.iter().filter(|p| p.timestamp.year() == last_year) {
            last_year_total += point.revenue;
            months += 1;
        }

        Ok(Self {
            last_month,
            last_year,
            last_year_total,
            monthly_average: last_year_total / months as f64,
        })
    }

    /// First projected month
    pub fn first_projected_month(&self) -> Month {
        self.last_month.next()
    }
}
