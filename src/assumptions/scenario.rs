use super::{MAX_HORIZON_YEARS, OPTIMISTIC_MULTIPLIER, PESSIMISTIC_MULTIPLIER};
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro parameters tuned by the user for each recomputation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Expected annual inflation (IPC) in percent (4.5 = 4.5%)
    #[serde(default = "default_inflation")]
    pub annual_inflation_rate_percent: f64,

    /// Annual organic growth in percent; negative means contraction
    #[serde(default = "default_growth")]
    pub annual_organic_growth_percent: f64,

    /// Number of years to project, 1 to 25
    #[serde(default = "default_horizon")]
    pub horizon_years: u32,
}

fn default_inflation() -> f64 { 4.5 }
fn default_growth() -> f64 { 2.0 }
fn default_horizon() -> u32 { 10 }

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            annual_inflation_rate_percent: default_inflation(),
            annual_organic_growth_percent: default_growth(),
            horizon_years: default_horizon(),
        }
    }
}

/// Equivalent monthly compounding rate of an annual percentage rate
///
/// `(1 + annual/100)^(1/12) - 1`
pub fn monthly_compound_rate(annual_rate_percent: f64) -> f64 {
    (1.0 + annual_rate_percent / 100.0).powf(1.0 / 12.0) - 1.0
}

impl ScenarioParameters {
    /// Check the projector's preconditions on the parameters
    ///
    /// Negative rates are valid (deflation, contraction). Rates at or below
    /// -100% have no monthly equivalent and are rejected.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            return Err(ProjectionError::InvalidParameter(format!(
                "horizon_years must be between 1 and {}, got {}",
                MAX_HORIZON_YEARS, self.horizon_years
            )));
        }
        for (name, rate) in [
            ("annual_inflation_rate_percent", self.annual_inflation_rate_percent),
            ("annual_organic_growth_percent", self.annual_organic_growth_percent),
        ] {
            if !rate.is_finite() || rate <= -100.0 {
                return Err(ProjectionError::InvalidParameter(format!(
                    "{} must be finite and above -100, got {}",
                    name, rate
                )));
            }
        }
        if self.annual_inflation_rate_percent < 0.0 {
            log::warn!(
                "negative inflation rate {}% applied as deflation",
                self.annual_inflation_rate_percent
            );
        }
        Ok(())
    }

    pub fn monthly_inflation_rate(&self) -> f64 {
        monthly_compound_rate(self.annual_inflation_rate_percent)
    }

    pub fn monthly_growth_rate(&self) -> f64 {
        monthly_compound_rate(self.annual_organic_growth_percent)
    }

    /// Monthly rate applied to the running base
    ///
    /// The two monthly rates are added, not compounded with each other.
    pub fn combined_monthly_rate(&self) -> f64 {
        self.monthly_inflation_rate() + self.monthly_growth_rate()
    }

    pub fn horizon_months(&self) -> Result<u32> {
        self.horizon_years.checked_mul(12).ok_or_else(|| {
            ProjectionError::InvalidParameter(format!(
                "horizon_years {} overflows the month count",
                self.horizon_years
            ))
        })
    }
}

/// One of the three projection bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Pessimistic,
    #[default]
    Moderate,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Pessimistic, Scenario::Moderate, Scenario::Optimistic];

    /// Factor applied to the moderate value
    pub fn multiplier(&self) -> f64 {
        match self {
            Scenario::Pessimistic => PESSIMISTIC_MULTIPLIER,
            Scenario::Moderate => 1.0,
            Scenario::Optimistic => OPTIMISTIC_MULTIPLIER,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Pessimistic => "Pessimistic scenario",
            Scenario::Moderate => "Moderate scenario",
            Scenario::Optimistic => "Optimistic scenario",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Pessimistic => "pessimistic",
            Scenario::Moderate => "moderate",
            Scenario::Optimistic => "optimistic",
        };
        f.write_str(name)
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pessimistic" => Ok(Scenario::Pessimistic),
            "moderate" => Ok(Scenario::Moderate),
            "optimistic" => Ok(Scenario::Optimistic),
            other => Err(format!(
                "unknown scenario '{}' (expected pessimistic, moderate or optimistic)",
                other
            )),
        }
    }
}
