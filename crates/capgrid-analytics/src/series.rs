//! Series generator: synthetic actual/forecast demand curves.
//!
//! Each day gets a seasonal baseline plus two independent uniform noise
//! draws, one for the actual value and one for the forecast:
//!
//! ```text
//! baseline = 1000 + 200 * sin(i / 30)
//! actual   = round(baseline + U(-50, 50))
//! forecast = round(baseline + U(-40, 40))
//! ```
//!
//! The random source is always passed in, so a seeded `StdRng` gives a
//! reproducible series.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;
use tracing::debug;

use capgrid_core::config::SeriesConfig;
use capgrid_core::error::{AnalyticsError, AnalyticsResult, ensure_finite};
use capgrid_core::ForecastPoint;

/// Length of the trailing window shown on the dashboard.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;
/// Longest window a single call will generate (one century of days).
pub const MAX_WINDOW_DAYS: i64 = 36_525;
/// Bound on `|baseline| + amplitude + noise`, keeping rounded values and
/// their deltas well inside `i64`.
pub const MAX_SERIES_MAGNITUDE: f64 = 1e12;

/// Shape of the synthetic series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParams {
    pub baseline: f64,
    pub amplitude: f64,
    pub period_divisor: f64,
    pub actual_noise: f64,
    pub forecast_noise: f64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            baseline: 1000.0,
            amplitude: 200.0,
            period_divisor: 30.0,
            actual_noise: 50.0,
            forecast_noise: 40.0,
        }
    }
}

impl TryFrom<&SeriesConfig> for SeriesParams {
    type Error = AnalyticsError;

    fn try_from(config: &SeriesConfig) -> AnalyticsResult<Self> {
        let params = Self {
            baseline: config.baseline,
            amplitude: config.amplitude,
            period_divisor: config.period_divisor,
            actual_noise: config.actual_noise,
            forecast_noise: config.forecast_noise,
        };
        params.validate()?;
        Ok(params)
    }
}

fn invalid(field: &str, value: f64) -> AnalyticsError {
    AnalyticsError::InvalidParameter {
        field: field.to_string(),
        value,
    }
}

impl SeriesParams {
    /// Finite values, a non-zero period, non-negative amplitude and noise,
    /// and a peak magnitude within `MAX_SERIES_MAGNITUDE`.
    pub fn validate(&self) -> AnalyticsResult<()> {
        ensure_finite("series.baseline", self.baseline)?;
        ensure_finite("series.period_divisor", self.period_divisor)?;
        for (field, value) in [
            ("series.amplitude", self.amplitude),
            ("series.actual_noise", self.actual_noise),
            ("series.forecast_noise", self.forecast_noise),
        ] {
            ensure_finite(field, value)?;
            if value < 0.0 {
                return Err(invalid(field, value));
            }
        }
        if self.period_divisor == 0.0 {
            return Err(invalid("series.period_divisor", self.period_divisor));
        }

        let peak = self.baseline.abs() + self.amplitude + self.actual_noise.max(self.forecast_noise);
        if peak > MAX_SERIES_MAGNITUDE {
            return Err(invalid("series.peak", peak));
        }
        Ok(())
    }

    /// Seasonal baseline for day index `i`.
    pub fn baseline_at(&self, i: usize) -> f64 {
        self.baseline + self.amplitude * (i as f64 / self.period_divisor).sin()
    }

    /// Generate `window_days` points starting at `anchor`.
    ///
    /// A non-positive window yields an empty series. A window longer than
    /// `MAX_WINDOW_DAYS`, or one whose last day is past `NaiveDate::MAX`,
    /// is rejected rather than truncated.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        window_days: i64,
        anchor: NaiveDate,
        rng: &mut R,
    ) -> AnalyticsResult<Vec<ForecastPoint>> {
        self.validate()?;
        if window_days > MAX_WINDOW_DAYS {
            return Err(invalid("series.window_days", window_days as f64));
        }
        let len = usize::try_from(window_days).unwrap_or(0);
        if len > 0 && anchor.checked_add_days(Days::new(len as u64 - 1)).is_none() {
            return Err(invalid("series.window_days", window_days as f64));
        }

        let mut points = Vec::with_capacity(len);
        for (i, date) in anchor.iter_days().take(len).enumerate() {
            let base = self.baseline_at(i);
            let actual = (base + noise(rng, self.actual_noise)).round() as i64;
            let forecast = (base + noise(rng, self.forecast_noise)).round() as i64;
            points.push(ForecastPoint::new(date, actual, forecast));
        }

        debug!(window_days, %anchor, points = points.len(), "generated forecast series");
        Ok(points)
    }
}

/// Generate a series with the default dashboard shape.
pub fn generate_series<R: Rng + ?Sized>(
    window_days: i64,
    anchor: NaiveDate,
    rng: &mut R,
) -> AnalyticsResult<Vec<ForecastPoint>> {
    SeriesParams::default().generate(window_days, anchor, rng)
}

/// Anchor date for a window ending today: the same day twelve months back.
pub fn trailing_anchor(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

/// Uniform draw in `[-half_width, half_width)`; zero when the width is not positive.
fn noise<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    if half_width > 0.0 {
        rng.gen_range(-half_width..half_width)
    } else {
        0.0
    }
}
