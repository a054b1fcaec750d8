//! Forecast accuracy: error metrics over an actual/forecast series.
//!
//! ```text
//! mae      = mean |actual - forecast|
//! rmse     = sqrt(mean (actual - forecast)^2)
//! mape     = 100 * mean |(actual - forecast) / actual|   (actual != 0 only)
//! bias     = mean (forecast - actual)
//! accuracy = max(100 - mape, 0)
//! ```

use serde::{Deserialize, Serialize};

use capgrid_core::ForecastPoint;

/// Accuracy at or above this is healthy.
pub const HEALTHY_MIN: f64 = 85.0;
/// Default accuracy below which a model is critical.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastAccuracy {
    pub points: usize,
    pub mae: f64,
    pub rmse: f64,
    /// `None` when every actual is zero.
    pub mape: Option<f64>,
    /// Positive means the forecast runs high.
    pub bias: f64,
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelHealth {
    Healthy,
    Warning,
    Critical,
}

impl ModelHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ModelHealth::Healthy => "Healthy",
            ModelHealth::Warning => "Warning",
            ModelHealth::Critical => "Critical",
        }
    }
}

pub fn forecast_accuracy(series: &[ForecastPoint]) -> ForecastAccuracy {
    if series.is_empty() {
        return ForecastAccuracy {
            points: 0,
            mae: 0.0,
            rmse: 0.0,
            mape: None,
            bias: 0.0,
            accuracy: None,
        };
    }

    let n = series.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut bias_sum = 0.0;
    let mut pct_sum = 0.0;
    let mut pct_count = 0usize;

    for p in series {
        let err = (p.actual - p.forecast) as f64;
        abs_sum += err.abs();
        sq_sum += err * err;
        bias_sum -= err;
        if p.actual != 0 {
            pct_sum += (err / p.actual as f64).abs();
            pct_count += 1;
        }
    }

    let mape = (pct_count > 0).then(|| 100.0 * pct_sum / pct_count as f64);
    ForecastAccuracy {
        points: series.len(),
        mae: abs_sum / n,
        rmse: (sq_sum / n).sqrt(),
        mape,
        bias: bias_sum / n,
        accuracy: mape.map(|m| (100.0 - m).max(0.0)),
    }
}

pub fn model_health(accuracy: f64, alert_threshold: f64) -> ModelHealth {
    if accuracy >= HEALTHY_MIN {
        ModelHealth::Healthy
    } else if accuracy >= alert_threshold {
        ModelHealth::Warning
    } else {
        ModelHealth::Critical
    }
}
