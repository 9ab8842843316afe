//! Hotel Projection - Revenue scenario engine for a single hotel investment
//!
//! This library provides:
//! - Historical revenue aggregation (annual totals, last-year monthly average)
//! - Synthetic and CSV-backed historical series
//! - Monthly scenario projections (pessimistic, moderate, optimistic) with seasonality
//! - Yield metrics against the initial investment
//! - Dashboard assembly (summary cards, chart series, detail table)

pub mod error;
pub mod history;
pub mod assumptions;
pub mod projection;
pub mod dashboard;
pub mod format;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use history::{HistoricalPoint, Month, Baseline, aggregate_annual, last_year_monthly_average};
pub use assumptions::{ScenarioParameters, Scenario, DashboardConfig};
pub use projection::{ProjectionEngine, ProjectionPoint, AnnualAggregate, ProjectionResult, project};
pub use dashboard::{Dashboard, DashboardRequest, DashboardView};
