use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel reported in place of an ET0 value the estimator could not produce.
pub const INVALID_ET0: f64 = -1.0;

/// Upper bound of a physically plausible daily reference evapotranspiration, mm/day.
pub const MAX_ET0: f64 = 15.0;

/// Why the estimator refused to produce a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidEt0 {
    #[error("temperature outside [-10, 50] °C")]
    TemperatureOutOfRange,

    #[error("relative humidity outside [0, 100] %")]
    HumidityOutOfRange,

    #[error("solar radiation is negative")]
    NegativeRadiation,

    #[error("degenerate formula denominator")]
    ZeroDenominator,

    #[error("result outside [0, 15] mm/day")]
    OutOfPhysicalRange,
}

/// Outcome of one ET0 estimation: a value in [0, 15] mm/day or a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Et0Estimate {
    Valid(f64),
    Invalid(InvalidEt0),
}

impl Et0Estimate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Et0Estimate::Valid(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Et0Estimate::Valid(v) => Some(*v),
            Et0Estimate::Invalid(_) => None,
        }
    }

    pub fn reason(&self) -> Option<InvalidEt0> {
        match self {
            Et0Estimate::Valid(_) => None,
            Et0Estimate::Invalid(reason) => Some(*reason),
        }
    }

    /// Scalar form used at the boundary with callers that expect a bare number:
    /// the value itself, or [`INVALID_ET0`].
    pub fn sentinel(&self) -> f64 {
        self.value().unwrap_or(INVALID_ET0)
    }
}

impl std::fmt::Display for Et0Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Et0Estimate::Valid(v) => write!(f, "{:.2} mm/day", v),
            Et0Estimate::Invalid(reason) => write!(f, "invalid ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_estimate_accessors() {
        let est = Et0Estimate::Valid(3.75);
        assert!(est.is_valid());
        assert_eq!(est.value(), Some(3.75));
        assert_eq!(est.reason(), None);
        assert_eq!(est.sentinel(), 3.75);
    }

    #[test]
    fn invalid_estimate_reports_sentinel() {
        let est = Et0Estimate::Invalid(InvalidEt0::TemperatureOutOfRange);
        assert!(!est.is_valid());
        assert_eq!(est.value(), None);
        assert_eq!(est.reason(), Some(InvalidEt0::TemperatureOutOfRange));
        assert_eq!(est.sentinel(), INVALID_ET0);
    }

    #[test]
    fn estimate_display() {
        assert_eq!(Et0Estimate::Valid(3.7474).to_string(), "3.75 mm/day");
        assert!(Et0Estimate::Invalid(InvalidEt0::NegativeRadiation)
            .to_string()
            .contains("negative"));
    }
}
