//! Dashboard pass: one end-to-end analytics run.
//!
//! Takes the raw tables the data layer hands over, validates them, and
//! derives every number the dashboard displays. A pass owns no state
//! beyond its configuration; the random source is seeded per run from
//! `[series] seed`, so the same input and config always give the same
//! snapshot.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use capgrid_core::error::{AnalyticsError, AnalyticsResult, ensure_finite};
use capgrid_core::{
    BandedPoint, CapacityAlert, CapgridConfig, ContributorCandidate, ContributorRecord,
    EntityMetrics, FactorImpact, FeatureImpact, RegionLoad, RegionRecord, RiskTier,
};

use crate::accuracy::{ForecastAccuracy, ModelHealth, forecast_accuracy, model_health};
use crate::band::ConfidenceBand;
use crate::features::top_features;
use crate::gauge::{GaugeReading, gauge_value};
use crate::kpi::{KpiSummary, TargetProgress, aggregate_kpis};
use crate::leaderboard::rank_leaderboard;
use crate::nudges::{Nudge, active_nudges};
use crate::risk::{RiskThresholds, TierCounts, aggregate_tier, classify_regions, tier_counts};
use crate::series::{MAX_WINDOW_DAYS, SeriesParams, trailing_anchor};
use crate::utilization::{UtilizationPoint, utilization_points};

/// Raw tables for one pass, as parsed by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInput {
    pub regions: Vec<RegionLoad>,
    pub contributors: Vec<ContributorCandidate>,
    pub features: Vec<FactorImpact>,
    pub entities: Vec<EntityMetrics>,
    pub alerts: Vec<CapacityAlert>,
    /// Savings achieved so far, in the same unit as `[kpi] annual_target`.
    pub savings: f64,
}

/// Everything the dashboard renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub generated_for: NaiveDate,
    pub series: Vec<BandedPoint>,
    pub forecast_accuracy: ForecastAccuracy,
    pub model_health: Option<ModelHealth>,
    pub regions: Vec<RegionRecord>,
    pub tier_counts: TierCounts,
    pub provisioning_risk: RiskTier,
    pub gauge: GaugeReading,
    pub kpis: KpiSummary,
    pub leaderboard: Vec<ContributorRecord>,
    pub top_features: Vec<FeatureImpact>,
    pub nudges: Vec<Nudge>,
    pub utilization: Vec<UtilizationPoint>,
}

/// A configured analytics pass.
#[derive(Debug, Clone)]
pub struct DashboardPass {
    config: CapgridConfig,
    series: SeriesParams,
    band: ConfidenceBand,
    thresholds: RiskThresholds,
}

impl DashboardPass {
    /// Build a pass, rejecting out-of-range configuration up front.
    ///
    /// Covers series shape and window, band margin, risk breakpoints,
    /// the annual savings target and the accuracy alert threshold.
    pub fn new(config: CapgridConfig) -> AnalyticsResult<Self> {
        let series = SeriesParams::try_from(&config.series)?;
        if config.series.window_days > MAX_WINDOW_DAYS {
            return Err(AnalyticsError::InvalidParameter {
                field: "series.window_days".to_string(),
                value: config.series.window_days as f64,
            });
        }
        let band = ConfidenceBand::new(config.band.margin)?;
        let thresholds = RiskThresholds::try_from(&config.risk)?;
        TargetProgress::compute(0.0, config.kpi.annual_target)?;
        ensure_finite("kpi.alert_threshold", config.kpi.alert_threshold)?;
        Ok(Self {
            config,
            series,
            band,
            thresholds,
        })
    }

    pub fn config(&self) -> &CapgridConfig {
        &self.config
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Run the pass for a window ending at `today`.
    pub fn run(&self, input: &DashboardInput, today: NaiveDate) -> AnalyticsResult<DashboardSnapshot> {
        info!(
            %today,
            regions = input.regions.len(),
            contributors = input.contributors.len(),
            features = input.features.len(),
            "starting analytics pass"
        );

        let mut rng = StdRng::seed_from_u64(self.config.series.seed);

        let raw_series = self.series.generate(
            self.config.series.window_days,
            trailing_anchor(today),
            &mut rng,
        )?;
        let forecast_accuracy = forecast_accuracy(&raw_series);
        let model_health = forecast_accuracy
            .accuracy
            .map(|a| model_health(a, self.config.kpi.alert_threshold));
        if model_health == Some(ModelHealth::Critical) {
            warn!(accuracy = ?forecast_accuracy.accuracy, "forecast accuracy below alert threshold");
        }
        let series = self.band.apply(&raw_series);

        let regions = classify_regions(&input.regions, &self.thresholds)?;
        let counts = tier_counts(&regions);
        let provisioning_risk = aggregate_tier(&regions);
        let gauge = gauge_value(provisioning_risk);
        debug!(?counts, ?provisioning_risk, "regions classified");

        let kpis = aggregate_kpis(&input.entities, input.savings, self.config.kpi.annual_target)?;
        let leaderboard = rank_leaderboard(&input.contributors)?;
        let top_features = if input.features.is_empty() {
            warn!("no feature catalog supplied, skipping top features");
            Vec::new()
        } else {
            top_features(&input.features, self.config.features.top_k)?
        };
        let nudges = active_nudges(&input.alerts, self.config.nudges.limit);
        let utilization = utilization_points(&input.regions, &regions, &mut rng);

        info!(
            points = series.len(),
            provisioning_risk = ?provisioning_risk,
            progress = kpis.progress.progress,
            nudges = nudges.len(),
            "analytics pass complete"
        );

        Ok(DashboardSnapshot {
            generated_for: today,
            series,
            forecast_accuracy,
            model_health,
            regions,
            tier_counts: counts,
            provisioning_risk,
            gauge,
            kpis,
            leaderboard,
            top_features,
            nudges,
            utilization,
        })
    }
}
