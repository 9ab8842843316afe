use super::PROJECTION_SEASONAL_AMPLITUDE;
use std::f64::consts::PI;

/// Sinusoidal month-of-year adjustment
///
/// `factor(m) = sin(m / 12 * 2π) * amplitude` for calendar month `m` in 1..=12.
/// The factor depends on the calendar month only, never on the year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalCurve {
    amplitude: f64,
}

impl Default for SeasonalCurve {
    fn default() -> Self {
        Self::new(PROJECTION_SEASONAL_AMPLITUDE)
    }
}

impl SeasonalCurve {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Seasonal factor for a calendar month (1 = January)
    pub fn factor(&self, month: u32) -> f64 {
        (month as f64 / 12.0 * 2.0 * PI).sin() * self.amplitude
    }

    /// Multiplier applied to a trend value: `1 + factor(month)`
    pub fn multiplier(&self, month: u32) -> f64 {
        1.0 + self.factor(month)
    }
}
