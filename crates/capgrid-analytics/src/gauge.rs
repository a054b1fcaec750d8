//! Aggregate gauge mapper: risk tier to dial position.
//!
//! The provisioning-risk dial runs 0..=100 and is split into three bands.
//! Each tier is drawn at a fixed point inside its own band.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use capgrid_core::{ColorTier, RiskTier};

/// Gauge needle position and color for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub tier: RiskTier,
    pub percentage: u8,
    pub color: ColorTier,
}

struct GaugeEntry {
    tier: RiskTier,
    band: RangeInclusive<u8>,
    percentage: u8,
    color: ColorTier,
}

static GAUGE_TABLE: [GaugeEntry; 3] = [
    GaugeEntry {
        tier: RiskTier::Low,
        band: 0..=33,
        percentage: 25,
        color: ColorTier::Success,
    },
    GaugeEntry {
        tier: RiskTier::Moderate,
        band: 34..=66,
        percentage: 55,
        color: ColorTier::Warning,
    },
    GaugeEntry {
        tier: RiskTier::High,
        band: 67..=100,
        percentage: 85,
        color: ColorTier::Destructive,
    },
];

fn entry(tier: RiskTier) -> &'static GaugeEntry {
    match tier {
        RiskTier::Low => &GAUGE_TABLE[0],
        RiskTier::Moderate => &GAUGE_TABLE[1],
        RiskTier::High => &GAUGE_TABLE[2],
    }
}

/// Fixed dial reading for a tier.
pub fn gauge_value(tier: RiskTier) -> GaugeReading {
    let e = entry(tier);
    GaugeReading {
        tier: e.tier,
        percentage: e.percentage,
        color: e.color,
    }
}

/// The dial band a tier occupies.
pub fn band(tier: RiskTier) -> RangeInclusive<u8> {
    entry(tier).band.clone()
}

/// Display color for a tier.
pub fn tier_color(tier: RiskTier) -> ColorTier {
    entry(tier).color
}

/// Tier whose band contains a continuous 0..=100 score.
///
/// Scores that fall between two integer bands (e.g. 33.5) belong to the
/// lower tier.
pub fn tier_for_score(score: f64) -> RiskTier {
    if score < f64::from(*band(RiskTier::Moderate).start()) {
        RiskTier::Low
    } else if score < f64::from(*band(RiskTier::High).start()) {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}
