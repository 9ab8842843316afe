//! Synthetic historical revenue generator
//!
//! Builds a deterministic monthly series from configurable parameters:
//! - First year and number of years covered
//! - Base monthly revenue in the first month
//! - Annual growth, applied as monthly compounding
//! - Seasonal amplitude around the growth trend

use super::{HistoricalPoint, Month};
use crate::assumptions::SeasonalCurve;
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Parameters for generating the historical series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryParams {
    /// First calendar year of the series (starts in January)
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Number of full years to generate
    #[serde(default = "default_years")]
    pub years: u32,

    /// Trend revenue of the first month, before seasonality
    #[serde(default = "default_base_monthly_revenue")]
    pub base_monthly_revenue: f64,

    /// Annual trend growth as a fraction (0.08 = 8%)
    #[serde(default = "default_annual_growth")]
    pub annual_growth: f64,

    /// Peak seasonal deviation from trend as a fraction (0.15 = ±15%)
    #[serde(default = "default_seasonal_amplitude")]
    pub seasonal_amplitude: f64,
}

fn default_start_year() -> i32 { 2021 }
fn default_years() -> u32 { 5 }
fn default_base_monthly_revenue() -> f64 { 18_000_000.0 }
fn default_annual_growth() -> f64 { 0.08 }
fn default_seasonal_amplitude() -> f64 { 0.15 }

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            years: default_years(),
            base_monthly_revenue: default_base_monthly_revenue(),
            annual_growth: default_annual_growth(),
            seasonal_amplitude: default_seasonal_amplitude(),
        }
    }
}

/// Pre-computed unit seasonal shape, scaled per generation
pub struct HistoryTemplate {
    /// Seasonal shape by calendar month (index 0 = January) at unit amplitude
    unit_season: [f64; 12],
}

impl HistoryTemplate {
    pub fn new() -> Self {
        let unit = SeasonalCurve::new(1.0);
        let mut unit_season = [0.0; 12];
        for (idx, slot) in unit_season.iter_mut().enumerate() {
            *slot = unit.factor(idx as u32 + 1);
        }
        Self { unit_season }
    }

    /// Generate the series: one point per month, January of `start_year` onwards
    pub fn generate(&self, params: &HistoryParams) -> Result<Vec<HistoricalPoint>> {
        let months = params.years.checked_mul(12).ok_or_else(|| {
            ProjectionError::InvalidParameter(format!("history years {} overflows", params.years))
        })?;
        let first = Month::new(params.start_year, 1)?;
        let mut points = Vec::with_capacity(months as usize);
        let monthly_growth = (1.0 + params.annual_growth).powf(1.0 / 12.0);

        let mut trend = params.base_monthly_revenue;
        for t in 0..months {
            let timestamp = first.advance(t);
            let season = self.unit_season[(timestamp.month() - 1) as usize] * params.seasonal_amplitude;
            points.push(HistoricalPoint::new(timestamp, trend * (1.0 + season)));
            trend *= monthly_growth;
        }

        log::debug!(
            "generated {} synthetic months from {} (base {:.0})",
            points.len(),
            first,
            params.base_monthly_revenue
        );
        Ok(points)
    }
}

impl Default for HistoryTemplate {
    fn default() -> Self {
        Self::new()
    }
}
