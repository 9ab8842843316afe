use crate::error::{ProjectionError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month, ordered chronologically
///
/// Text form is `YYYY-MM`, which is also how it (de)serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ProjectionError::InvalidHistory(format!(
                "month {} out of range 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month number, 1 (January) to 12 (December)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month; December rolls into January
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Month `n` steps after this one
    pub fn advance(&self, n: u32) -> Self {
        let zero_based = self.month as i64 - 1 + n as i64;
        Self {
            year: self.year + (zero_based / 12) as i32,
            month: (zero_based % 12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|e| ProjectionError::InvalidHistory(format!("bad month '{}': {}", s, e)))?;
        Ok(Self::from_date(date))
    }
}

impl TryFrom<String> for Month {
    type Error = ProjectionError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(m: Month) -> Self {
        m.to_string()
    }
}

/// One month of realised revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    #[serde(rename = "date")]
    pub timestamp: Month,
    #[serde(rename = "value")]
    pub revenue: f64,
}

impl HistoricalPoint {
    pub fn new(timestamp: Month, revenue: f64) -> Self {
        Self { timestamp, revenue }
    }
}

/// Check that a series is non-empty, finite and has exactly one point per consecutive month
pub fn validate_series(history: &[HistoricalPoint]) -> Result<()> {
    if history.is_empty() {
        return Err(ProjectionError::EmptyInput);
    }
    for point in history {
        if !point.revenue.is_finite() {
            return Err(ProjectionError::InvalidHistory(format!(
                "non-finite revenue at {}",
                point.timestamp
            )));
        }
    }
    for pair in history.windows(2) {
        if pair[1].timestamp != pair[0].timestamp.next() {
            return Err(ProjectionError::InvalidHistory(format!(
                "{} does not follow {}",
                pair[1].timestamp, pair[0].timestamp
            )));
        }
    }
    Ok(())
}
