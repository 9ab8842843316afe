//! Scenario projection engine: monthly compounding with seasonality, annual rollup, yields

mod engine;
mod rows;
pub mod metrics;

pub use engine::{ProjectionEngine, project};
pub use rows::{ProjectionPoint, AnnualAggregate, ProjectionResult, aggregate_projection};
pub use metrics::{Granularity, YieldSummary};
