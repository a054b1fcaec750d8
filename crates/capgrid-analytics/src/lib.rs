//! capgrid-analytics: the capacity analytics engine.
//!
//! Pure, synchronous transforms from raw per-region usage tables to the
//! quantities a capacity-planning dashboard displays. Nothing here does
//! I/O or holds shared state; every call builds fresh values.
//!
//! # Architecture
//!
//! ```text
//! series::generate ──► band::apply ──────────────┐
//!        └───────────► accuracy ─────────────────┤
//! RegionLoad ─► risk::classify_regions ─► gauge ─┤
//!        └───────────► utilization ──────────────┤
//! EntityMetrics + savings ─► kpi ────────────────┼─► pass::DashboardSnapshot ─► report
//! ContributorCandidate ─► leaderboard ───────────┤
//! FactorImpact ─► features ──────────────────────┤
//! CapacityAlert ─► nudges ───────────────────────┘
//! ```

pub mod accuracy;
pub mod band;
pub mod features;
pub mod gauge;
pub mod kpi;
pub mod leaderboard;
pub mod nudges;
pub mod pass;
pub mod report;
pub mod risk;
pub mod series;
pub mod utilization;

pub use accuracy::{ForecastAccuracy, ModelHealth, forecast_accuracy, model_health};
pub use band::{ConfidenceBand, confidence_interval};
pub use features::top_features;
pub use gauge::{GaugeReading, gauge_value};
pub use kpi::{KpiSummary, TargetProgress, aggregate_kpis};
pub use leaderboard::rank_leaderboard;
pub use nudges::{Nudge, active_nudges};
pub use pass::{DashboardInput, DashboardPass, DashboardSnapshot};
pub use report::format_report;
pub use risk::{RiskThresholds, classify_regions, classify_risk};
pub use series::{SeriesParams, generate_series, trailing_anchor};
pub use utilization::{UtilizationPoint, utilization_points};
