//! Dashboard configuration
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "initial_investment": 3000000000, "history": { "years": 4 } }
//! ```

use crate::error::Result;
use crate::history::HistoryParams;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Static configuration of a dashboard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Initial investment that all yields are measured against
    #[serde(default = "default_initial_investment")]
    pub initial_investment: f64,

    /// Settings for the synthetic history, used when no history file is given
    #[serde(default)]
    pub history: HistoryParams,
}

fn default_initial_investment() -> f64 { 2_500_000_000.0 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_investment: default_initial_investment(),
            history: HistoryParams::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config = Self::from_reader(BufReader::new(file))?;
        log::info!("loaded dashboard config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
