//! Risk classifier: regional load to risk tier and score.
//!
//! A region's load is `compute + storage`. Two fixed breakpoints split the
//! load axis into three tiers:
//!
//! ```text
//! total <= low_max                  → low
//! low_max < total <= moderate_max   → moderate
//! total >  moderate_max             → high
//! ```
//!
//! The continuous risk score places the load on the 0..=100 gauge dial,
//! always inside the band of the tier it was classified into.

use serde::{Deserialize, Serialize};
use tracing::debug;

use capgrid_core::config::RiskConfig;
use capgrid_core::error::{AnalyticsError, AnalyticsResult};
use capgrid_core::{HeatmapSize, RegionLoad, RegionRecord, RiskTier, validate_load};

use crate::gauge::{self, tier_for_score};

/// Region label used in errors for loads classified without a region.
const UNNAMED_REGION: &str = "(unnamed)";

/// Totals above this get the large heatmap tile.
pub const HEATMAP_LARGE_ABOVE: f64 = 2000.0;
/// Totals above this get the wide heatmap tile.
pub const HEATMAP_WIDE_ABOVE: f64 = 1500.0;

/// Tier breakpoints on combined compute + storage load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    low_max: f64,
    moderate_max: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: 1800.0,
            moderate_max: 2200.0,
        }
    }
}

impl TryFrom<&RiskConfig> for RiskThresholds {
    type Error = AnalyticsError;

    fn try_from(config: &RiskConfig) -> AnalyticsResult<Self> {
        Self::new(config.low_max, config.moderate_max)
    }
}

impl RiskThresholds {
    /// Both breakpoints must be finite, non-negative, and strictly ordered.
    pub fn new(low_max: f64, moderate_max: f64) -> AnalyticsResult<Self> {
        let valid = low_max.is_finite()
            && moderate_max.is_finite()
            && low_max >= 0.0
            && low_max < moderate_max;
        if !valid {
            return Err(AnalyticsError::InvalidThresholds {
                low: low_max,
                high: moderate_max,
            });
        }
        Ok(Self {
            low_max,
            moderate_max,
        })
    }

    pub fn low_max(&self) -> f64 {
        self.low_max
    }

    pub fn moderate_max(&self) -> f64 {
        self.moderate_max
    }

    pub fn classify_total(&self, total: f64) -> RiskTier {
        if total <= self.low_max {
            RiskTier::Low
        } else if total <= self.moderate_max {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    /// Validate a raw compute/storage pair, then classify its total.
    pub fn classify(&self, compute: f64, storage: f64) -> AnalyticsResult<RiskTier> {
        let total = validate_load(UNNAMED_REGION, compute, storage)?;
        Ok(self.classify_total(total))
    }

    /// Continuous 0..=100 score for a total load.
    ///
    /// Low maps `[0, low_max]` onto 0..=33, moderate maps
    /// `(low_max, moderate_max]` onto 34..=66, and high climbs from 67 to
    /// 100 over one more moderate-width span, then saturates.
    pub fn score(&self, total: f64) -> f64 {
        let span = self.moderate_max - self.low_max;
        let tier = self.classify_total(total);
        let band = gauge::band(tier);
        let (start, end) = (f64::from(*band.start()), f64::from(*band.end()));

        let fraction = match tier {
            RiskTier::Low if self.low_max > 0.0 => total / self.low_max,
            // low_max == 0: the only low total is 0, and 0 / 0 would be NaN.
            RiskTier::Low => 0.0,
            RiskTier::Moderate => (total - self.low_max) / span,
            RiskTier::High => ((total - self.moderate_max) / span).min(1.0),
        };
        start + (end - start) * fraction.clamp(0.0, 1.0)
    }

    /// Classify one validated region load.
    pub fn assess(&self, load: &RegionLoad) -> RegionRecord {
        let total = load.total();
        RegionRecord {
            region: load.region.clone(),
            compute: load.compute,
            storage: load.storage,
            risk: self.classify_total(total),
            risk_score: self.score(total),
            delta: load.delta,
            heatmap: heatmap_size(total),
        }
    }
}

/// Classify with the calibrated default breakpoints.
///
/// Negative or non-finite loads are rejected.
pub fn classify_risk(compute: f64, storage: f64) -> AnalyticsResult<RiskTier> {
    RiskThresholds::default().classify(compute, storage)
}

/// Validate and classify every region, preserving input order.
pub fn classify_regions(
    loads: &[RegionLoad],
    thresholds: &RiskThresholds,
) -> AnalyticsResult<Vec<RegionRecord>> {
    let mut records = Vec::with_capacity(loads.len());
    for load in loads {
        load.validate()?;
        let record = thresholds.assess(load);
        debug!(
            region = %record.region,
            total = load.total(),
            risk = ?record.risk,
            score = record.risk_score,
            "classified region"
        );
        records.push(record);
    }
    Ok(records)
}

/// Heatmap tile size for a total load.
pub fn heatmap_size(total: f64) -> HeatmapSize {
    if total > HEATMAP_LARGE_ABOVE {
        HeatmapSize::Large
    } else if total > HEATMAP_WIDE_ABOVE {
        HeatmapSize::Wide
    } else {
        HeatmapSize::Standard
    }
}

/// Number of regions in each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

pub fn tier_counts(records: &[RegionRecord]) -> TierCounts {
    records.iter().fold(TierCounts::default(), |mut acc, r| {
        match r.risk {
            RiskTier::Low => acc.low += 1,
            RiskTier::Moderate => acc.moderate += 1,
            RiskTier::High => acc.high += 1,
        }
        acc
    })
}

/// Overall provisioning tier: the tier whose gauge band holds the mean
/// regional risk score. No regions means low.
pub fn aggregate_tier(records: &[RegionRecord]) -> RiskTier {
    if records.is_empty() {
        return RiskTier::Low;
    }
    let mean = records.iter().map(|r| r.risk_score).sum::<f64>() / records.len() as f64;
    tier_for_score(mean)
}
