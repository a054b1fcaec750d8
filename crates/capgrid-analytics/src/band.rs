//! Confidence band calculator.
//!
//! The band is a relative margin around the forecast. The margin is taken
//! on `|f|`, so negative forecasts are still bracketed:
//!
//! ```text
//! upper = round(f + margin * |f|)
//! lower = round(f - margin * |f|)
//! ```
//!
//! For non-negative `f` this is `round(f * 1.1)` / `round(f * 0.9)` with the
//! default margin.

use capgrid_core::error::{AnalyticsError, AnalyticsResult};
use capgrid_core::{BandedPoint, ConfidenceInterval, ForecastPoint};

pub const DEFAULT_MARGIN: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    margin: f64,
}

impl Default for ConfidenceBand {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ConfidenceBand {
    /// Build a band with a custom relative margin.
    pub fn new(margin: f64) -> AnalyticsResult<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(AnalyticsError::InvalidMargin(margin));
        }
        Ok(Self { margin })
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn interval(&self, forecast: i64) -> ConfidenceInterval {
        let f = forecast as f64;
        let spread = self.margin * f.abs();
        ConfidenceInterval {
            upper: (f + spread).round() as i64,
            lower: (f - spread).round() as i64,
        }
    }

    /// Attach a band to every point of a series.
    pub fn apply(&self, series: &[ForecastPoint]) -> Vec<BandedPoint> {
        series
            .iter()
            .map(|p| {
                let ci = self.interval(p.forecast);
                BandedPoint {
                    point: p.clone(),
                    upper: ci.upper,
                    lower: ci.lower,
                }
            })
            .collect()
    }
}

/// Interval with the default ±10% margin.
pub fn confidence_interval(forecast: i64) -> ConfidenceInterval {
    ConfidenceBand::default().interval(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn ten_percent_each_side() {
        let ci = confidence_interval(1000);
        assert_eq!(ci, ConfidenceInterval { upper: 1100, lower: 900 });
    }

    #[test]
    fn rounds_to_nearest() {
        // 1047 * 1.1 = 1151.7, 1047 * 0.9 = 942.3
        let ci = confidence_interval(1047);
        assert_eq!(ci.upper, 1152);
        assert_eq!(ci.lower, 942);
    }

    #[test]
    fn zero_forecast_collapses() {
        assert_eq!(confidence_interval(0), ConfidenceInterval { upper: 0, lower: 0 });
    }

    // Negative forecasts keep upper >= f >= lower because the margin is
    // taken on |f|. A plain f * 1.1 would invert the interval here.
    #[test]
    fn negative_forecast_still_bracketed() {
        let ci = confidence_interval(-200);
        assert_eq!(ci, ConfidenceInterval { upper: -180, lower: -220 });
        assert!(ci.upper >= -200 && -200 >= ci.lower);
    }

    #[test]
    fn small_values_round_back_onto_forecast() {
        let ci = confidence_interval(3);
        assert_eq!(ci, ConfidenceInterval { upper: 3, lower: 3 });
    }

    #[test]
    fn custom_margin() {
        let band = ConfidenceBand::new(0.25).unwrap();
        assert_eq!(band.interval(400), ConfidenceInterval { upper: 500, lower: 300 });
    }

    #[test]
    fn rejects_bad_margin() {
        assert!(matches!(ConfidenceBand::new(-0.1), Err(AnalyticsError::InvalidMargin(_))));
        assert!(ConfidenceBand::new(f64::NAN).is_err());
        assert!(ConfidenceBand::new(0.0).is_ok());
    }

    #[test]
    fn apply_keeps_series_order() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let series = vec![
            ForecastPoint::new(d, 1000, 1000),
            ForecastPoint::new(d.succ_opt().unwrap(), 980, 1200),
        ];
        let banded = ConfidenceBand::default().apply(&series);
        assert_eq!(banded.len(), 2);
        assert_eq!(banded[1].point.date, d.succ_opt().unwrap());
        assert_eq!((banded[1].upper, banded[1].lower), (1320, 1080));
    }
}
