//! Shared types used across capgrid crates.
//!
//! Input records (`RegionLoad`, `ContributorCandidate`, `FactorImpact`,
//! `EntityMetrics`, `CapacityAlert`) arrive already parsed from the data
//! layer and are checked with `validate()` before entering a pass. Output
//! records are only ever built by the analytics transforms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult, ensure_finite};

// ── Tiers ──────────────────────────────────────────────────────────

/// Three-level risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
        }
    }
}

/// Display tier shared by every colored widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Success,
    Warning,
    Destructive,
}

impl ColorTier {
    pub fn symbol(&self) -> &'static str {
        match self {
            ColorTier::Success => "🟢",
            ColorTier::Warning => "🟡",
            ColorTier::Destructive => "🔴",
        }
    }
}

// ── Forecast series ────────────────────────────────────────────────

/// One day of observed vs forecast demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub actual: i64,
    pub forecast: i64,
    /// Always `actual - forecast`.
    pub delta: i64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, actual: i64, forecast: i64) -> Self {
        Self {
            date,
            actual,
            forecast,
            delta: actual - forecast,
        }
    }
}

/// Interval bracketing a single forecast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub upper: i64,
    pub lower: i64,
}

/// A forecast point with its confidence band attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandedPoint {
    #[serde(flatten)]
    pub point: ForecastPoint,
    pub upper: i64,
    pub lower: i64,
}

// ── Regions ────────────────────────────────────────────────────────

/// Raw per-region load as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionLoad {
    pub region: String,
    pub compute: f64,
    pub storage: f64,
    /// Signed change versus the previous period.
    #[serde(default)]
    pub delta: f64,
    /// Observed utilized capacity, when the data layer has it.
    #[serde(default)]
    pub utilized: Option<f64>,
}

impl RegionLoad {
    pub fn new(region: &str, compute: f64, storage: f64, delta: f64) -> Self {
        Self {
            region: region.to_string(),
            compute,
            storage,
            delta,
            utilized: None,
        }
    }

    pub fn total(&self) -> f64 {
        self.compute + self.storage
    }

    /// Reject negative or non-finite loads.
    pub fn validate(&self) -> AnalyticsResult<()> {
        validate_load(&self.region, self.compute, self.storage)?;
        ensure_finite(&format!("{}.delta", self.region), self.delta)?;
        if let Some(utilized) = self.utilized {
            ensure_finite(&format!("{}.utilized", self.region), utilized)?;
            if utilized < 0.0 {
                return Err(AnalyticsError::NegativeLoad {
                    region: self.region.clone(),
                    field: "utilized",
                    value: utilized,
                });
            }
        }
        Ok(())
    }
}

/// Check one compute/storage pair and return its finite total.
pub fn validate_load(region: &str, compute: f64, storage: f64) -> AnalyticsResult<f64> {
    for (field, value) in [("compute", compute), ("storage", storage)] {
        ensure_finite(&format!("{region}.{field}"), value)?;
        if value < 0.0 {
            return Err(AnalyticsError::NegativeLoad {
                region: region.to_string(),
                field,
                value,
            });
        }
    }
    ensure_finite(&format!("{region}.total"), compute + storage)
}

/// A classified region. Only the risk classifier builds these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub region: String,
    pub compute: f64,
    pub storage: f64,
    pub risk: RiskTier,
    /// Continuous 0..=100 score inside the tier's gauge band.
    pub risk_score: f64,
    pub delta: f64,
    pub heatmap: HeatmapSize,
}

/// Tile size on the regional heatmap, driven by total load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapSize {
    Standard,
    Wide,
    Large,
}

// ── Leaderboard ────────────────────────────────────────────────────

/// Unranked contributor as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorCandidate {
    pub name: String,
    /// Accuracy score percentage.
    pub score: f64,
    /// Savings attributed to this contributor, in currency units.
    pub savings: f64,
}

impl ContributorCandidate {
    pub fn new(name: &str, score: f64, savings: f64) -> Self {
        Self {
            name: name.to_string(),
            score,
            savings,
        }
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        ensure_finite(&format!("{}.score", self.name), self.score)?;
        ensure_finite(&format!("{}.savings", self.name), self.savings)?;
        if !(0.0..=100.0).contains(&self.score) {
            return Err(AnalyticsError::InvalidScore {
                name: self.name.clone(),
                score: self.score,
            });
        }
        if self.savings < 0.0 {
            return Err(AnalyticsError::NegativeSavings {
                name: self.name.clone(),
                savings: self.savings,
            });
        }
        Ok(())
    }
}

/// A ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorRecord {
    pub rank: u32,
    pub name: String,
    pub score: f64,
    pub savings: f64,
}

// ── Feature importance ─────────────────────────────────────────────

/// A named factor and its signed impact percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorImpact {
    pub name: String,
    pub value: f64,
}

impl FactorImpact {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(value: f64) -> Self {
        if value > 0.0 { Direction::Up } else { Direction::Down }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
        }
    }
}

/// A selected feature. `direction` always agrees with the sign of `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImpact {
    pub name: String,
    pub direction: Direction,
    pub value: f64,
}

// ── KPIs ───────────────────────────────────────────────────────────

/// Per-entity figures averaged into the top-line KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetrics {
    pub name: String,
    pub accuracy: f64,
    pub utilization: f64,
    pub cost: f64,
}

impl EntityMetrics {
    pub fn validate(&self) -> AnalyticsResult<()> {
        ensure_finite(&format!("{}.accuracy", self.name), self.accuracy)?;
        ensure_finite(&format!("{}.utilization", self.name), self.utilization)?;
        ensure_finite(&format!("{}.cost", self.name), self.cost)?;
        Ok(())
    }
}

// ── Alerts ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    UnderProvision,
    OverProvision,
    Optimization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

/// A capacity alert raised against a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityAlert {
    pub id: String,
    pub region: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub completed: bool,
}
