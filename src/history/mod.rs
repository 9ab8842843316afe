//! Historical revenue series: data types, sources and annual aggregation

mod data;
mod aggregate;
pub mod loader;
pub mod generator;

pub use data::{Month, HistoricalPoint, validate_series};
pub use aggregate::{aggregate_annual, last_year_monthly_average, Baseline};
pub use loader::{load_history, load_history_from_reader, write_history};
pub use generator::{HistoryParams, HistoryTemplate};
