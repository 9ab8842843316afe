use crate::assumptions::{Scenario, ScenarioParameters, OPTIMISTIC_MULTIPLIER, PESSIMISTIC_MULTIPLIER};
use crate::history::Month;
use serde::{Deserialize, Serialize};

/// Projected revenue for one month under the three scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    #[serde(rename = "date")]
    pub timestamp: Month,
    pub pessimistic: f64,
    pub moderate: f64,
    pub optimistic: f64,
}

impl ProjectionPoint {
    /// Build the three bands from the moderate value
    pub fn from_moderate(timestamp: Month, moderate: f64) -> Self {
        Self {
            timestamp,
            pessimistic: moderate * PESSIMISTIC_MULTIPLIER,
            moderate,
            optimistic: moderate * OPTIMISTIC_MULTIPLIER,
        }
    }

    pub fn value(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Moderate => self.moderate,
            Scenario::Optimistic => self.optimistic,
        }
    }
}

/// Annual totals of the three scenarios
///
/// The historical boundary row carries the realised total in every column
/// so charts can join the historical and projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualAggregate {
    pub year: i32,
    pub pessimistic: f64,
    pub moderate: f64,
    pub optimistic: f64,
    /// True for the boundary row built from realised revenue
    #[serde(default)]
    pub historical: bool,
}

impl AnnualAggregate {
    fn empty(year: i32) -> Self {
        Self { year, pessimistic: 0.0, moderate: 0.0, optimistic: 0.0, historical: false }
    }

    /// Boundary row: the same realised total under every scenario
    pub fn boundary(year: i32, total: f64) -> Self {
        Self { year, pessimistic: total, moderate: total, optimistic: total, historical: true }
    }

    pub fn value(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Moderate => self.moderate,
            Scenario::Optimistic => self.optimistic,
        }
    }

    /// A projected row for a year strictly after the last historical year
    pub fn is_projected_after(&self, last_historical_year: i32) -> bool {
        !self.historical && self.year > last_historical_year
    }
}

/// Group monthly points by calendar year, summing each scenario independently
///
/// `boundary` is `(last_historical_year, historical_total)`; when given, its
/// row comes first. Points are expected in timestamp order.
pub fn aggregate_projection(
    points: &[ProjectionPoint],
    boundary: Option<(i32, f64)>,
) -> Vec<AnnualAggregate> {
    let mut annual: Vec<AnnualAggregate> = Vec::new();
    if let Some((year, total)) = boundary {
        annual.push(AnnualAggregate::boundary(year, total));
    }

    for point in points {
        let year = point.timestamp.year();
        let needs_row = match annual.last() {
            Some(row) => row.historical || row.year != year,
            None => true,
        };
        if needs_row {
            annual.push(AnnualAggregate::empty(year));
        }
        if let Some(row) = annual.last_mut() {
            row.pessimistic += point.pessimistic;
            row.moderate += point.moderate;
            row.optimistic += point.optimistic;
        }
    }

    annual
}

/// Output of one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub params: ScenarioParameters,
    /// Year of the boundary row
    pub last_historical_year: i32,
    /// One point per projected month, in order
    pub monthly: Vec<ProjectionPoint>,
    /// Boundary row followed by one row per projected year
    pub annual: Vec<AnnualAggregate>,
}

impl ProjectionResult {
    /// Annual rows strictly after the historical boundary
    pub fn projected_years(&self) -> impl Iterator<Item = &AnnualAggregate> {
        let last_historical_year = self.last_historical_year;
        self.annual
            .iter()
            .filter(move |row| row.is_projected_after(last_historical_year))
    }

    /// The last projected year's row
    pub fn final_year(&self) -> Option<&AnnualAggregate> {
        self.projected_years().last()
    }
}
