//! KPI aggregator: top-line means and progress toward the savings target.

use serde::{Deserialize, Serialize};

use capgrid_core::error::{AnalyticsError, AnalyticsResult, ensure_finite};
use capgrid_core::{ColorTier, EntityMetrics};

/// Accuracy at or above this is shown as success.
pub const ACCURACY_SUCCESS_MIN: f64 = 95.0;
/// Accuracy at or above this (and below success) is shown as warning.
pub const ACCURACY_WARNING_MIN: f64 = 85.0;

/// Savings measured against a fixed annual target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProgress {
    pub savings: f64,
    pub target: f64,
    /// Percentage of target reached. Not clamped; exceeds 100 past target.
    pub progress: f64,
    /// Amount still to go, never negative.
    pub remaining: f64,
    pub achieved: bool,
}

impl TargetProgress {
    pub fn compute(savings: f64, target: f64) -> AnalyticsResult<Self> {
        if !target.is_finite() || target <= 0.0 {
            return Err(AnalyticsError::InvalidTarget(target));
        }
        ensure_finite("savings", savings)?;
        if savings < 0.0 {
            return Err(AnalyticsError::NegativeSavings {
                name: "total".to_string(),
                savings,
            });
        }

        let progress = 100.0 * savings / target;
        Ok(Self {
            savings,
            target,
            progress,
            remaining: (target - savings).max(0.0),
            achieved: progress >= 100.0,
        })
    }
}

/// Top-line KPIs for one analytics pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub entity_count: usize,
    pub mean_accuracy: f64,
    pub mean_utilization: f64,
    pub mean_cost: f64,
    pub progress: TargetProgress,
}

/// Means over per-entity figures plus target progress.
///
/// Every record is validated first. An empty slice gives zero means.
pub fn aggregate_kpis(
    records: &[EntityMetrics],
    savings: f64,
    target: f64,
) -> AnalyticsResult<KpiSummary> {
    let progress = TargetProgress::compute(savings, target)?;

    let mut sums = (0.0, 0.0, 0.0);
    for r in records {
        r.validate()?;
        sums.0 += r.accuracy;
        sums.1 += r.utilization;
        sums.2 += r.cost;
    }

    let n = records.len();
    let mean = |sum: f64| if n == 0 { 0.0 } else { sum / n as f64 };

    Ok(KpiSummary {
        entity_count: n,
        mean_accuracy: mean(sums.0),
        mean_utilization: mean(sums.1),
        mean_cost: mean(sums.2),
        progress,
    })
}

/// Color for an accuracy percentage on the score ring.
pub fn accuracy_color(accuracy: f64) -> ColorTier {
    if accuracy >= ACCURACY_SUCCESS_MIN {
        ColorTier::Success
    } else if accuracy >= ACCURACY_WARNING_MIN {
        ColorTier::Warning
    } else {
        ColorTier::Destructive
    }
}
