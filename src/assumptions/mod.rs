//! Projection assumptions: scenario parameters and bands, seasonality, configuration

mod scenario;
mod seasonality;
mod config;

pub use scenario::{ScenarioParameters, Scenario, monthly_compound_rate};
pub use seasonality::SeasonalCurve;
pub use config::DashboardConfig;

// ============================================================================
// Scenario Bands
// ============================================================================
// Every scenario is a fixed multiple of the same moderate projection, so
// optimistic >= moderate >= pessimistic holds for any positive base value.

/// Multiplier applied to the moderate value for the pessimistic scenario
pub const PESSIMISTIC_MULTIPLIER: f64 = 0.85;

/// Multiplier applied to the moderate value for the optimistic scenario
pub const OPTIMISTIC_MULTIPLIER: f64 = 1.20;

/// Peak seasonal deviation applied to projected months (±15%)
pub const PROJECTION_SEASONAL_AMPLITUDE: f64 = 0.15;

/// Longest accepted projection horizon in years
pub const MAX_HORIZON_YEARS: u32 = 25;
