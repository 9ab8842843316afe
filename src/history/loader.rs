//! CSV loading and writing of the historical series
//!
//! Files carry a `date,value` header, one row per month (`2025-12,31250000`).

use super::{validate_series, HistoricalPoint};
use crate::error::Result;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Load a historical series from a CSV file
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalPoint>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let history = load_history_from_reader(file)?;
    log::info!("loaded {} historical months from {}", history.len(), path.display());
    Ok(history)
}

/// Load a historical series from any reader
///
/// Rows must cover consecutive months in order; an empty body is rejected.
pub fn load_history_from_reader<R: Read>(reader: R) -> Result<Vec<HistoricalPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut history = Vec::new();
    for record in rdr.deserialize() {
        let point: HistoricalPoint = record?;
        history.push(point);
    }

    validate_series(&history)?;
    Ok(history)
}

/// Write a historical series as `date,value` CSV
pub fn write_history<W: Write>(writer: W, history: &[HistoricalPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in history {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}
