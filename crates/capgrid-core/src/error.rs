//! Error types for capgrid analytics inputs and configuration.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised at the analytics boundary.
///
/// The transforms themselves are total; everything here is an input or
/// configuration contract violation caught before a pass starts.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("negative {field} load for region {region}: {value}")]
    NegativeLoad {
        region: String,
        field: &'static str,
        value: f64,
    },

    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: String, value: f64 },

    #[error("score for {name} outside [0, 100]: {score}")]
    InvalidScore { name: String, score: f64 },

    #[error("negative savings for {name}: {savings}")]
    NegativeSavings { name: String, savings: f64 },

    #[error("invalid target: {0} (must be finite and > 0)")]
    InvalidTarget(f64),

    #[error("invalid risk thresholds: low={low}, high={high}")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("invalid value for {field}: {value}")]
    InvalidParameter { field: String, value: f64 },

    #[error("invalid confidence margin: {0} (must be finite and >= 0)")]
    InvalidMargin(f64),

    #[error("feature catalog is empty")]
    EmptyCatalog,

    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Reject NaN and infinities for a named field.
pub fn ensure_finite(field: &str, value: f64) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_passes_through() {
        assert_eq!(ensure_finite("x", 1.5).unwrap(), 1.5);
    }

    #[test]
    fn ensure_finite_rejects_nan_and_inf() {
        assert!(matches!(
            ensure_finite("compute", f64::NAN),
            Err(AnalyticsError::NonFinite { ref field, .. }) if field == "compute"
        ));
        assert!(ensure_finite("storage", f64::INFINITY).is_err());
    }

    #[test]
    fn messages_name_the_offender() {
        let err = AnalyticsError::NegativeLoad {
            region: "East US".to_string(),
            field: "storage",
            value: -3.0,
        };
        assert_eq!(err.to_string(), "negative storage load for region East US: -3");
    }
}
