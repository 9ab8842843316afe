//! Error types shared by the aggregator, projector and loaders

use thiserror::Error;

/// Errors raised by the projection engine and its data sources
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The historical series has no points
    #[error("historical series is empty")]
    EmptyInput,

    /// A scenario parameter or start value violates the projector's preconditions
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A historical series is malformed (bad month, out of order, duplicate)
    #[error("invalid history: {0}")]
    InvalidHistory(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
