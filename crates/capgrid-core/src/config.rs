//! capgrid.toml configuration parser.
//!
//! Every section is optional; a missing section or key falls back to the
//! calibrated defaults. Range checks happen when the analytics engine
//! builds its thresholds and band from these values.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AnalyticsResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapgridConfig {
    pub series: SeriesConfig,
    pub band: BandConfig,
    pub risk: RiskConfig,
    pub kpi: KpiConfig,
    pub features: FeaturesConfig,
    pub nudges: NudgesConfig,
}

/// Synthetic series shape. Defaults reproduce the dashboard's demand curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub window_days: i64,
    pub seed: u64,
    pub baseline: f64,
    pub amplitude: f64,
    /// Divisor applied to the day index before `sin`.
    pub period_divisor: f64,
    /// Half-width of the uniform noise added to actuals.
    pub actual_noise: f64,
    /// Half-width of the uniform noise added to forecasts.
    pub forecast_noise: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            window_days: 365,
            seed: 42,
            baseline: 1000.0,
            amplitude: 200.0,
            period_divisor: 30.0,
            actual_noise: 50.0,
            forecast_noise: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Relative margin around each forecast (0.1 = ±10%).
    pub margin: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self { margin: 0.1 }
    }
}

/// Risk tier breakpoints on combined compute + storage load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Highest total still classified as low.
    pub low_max: f64,
    /// Highest total still classified as moderate.
    pub moderate_max: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            low_max: 1800.0,
            moderate_max: 2200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiConfig {
    /// Annual savings target, same unit as the reported savings.
    pub annual_target: f64,
    /// Accuracy below which a model is critical rather than warning.
    pub alert_threshold: f64,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            annual_target: 120.0,
            alert_threshold: 75.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// How many factors to keep. `None` keeps the whole catalog.
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgesConfig {
    pub limit: usize,
}

impl Default for NudgesConfig {
    fn default() -> Self {
        Self { limit: 3 }
    }
}

impl CapgridConfig {
    pub fn from_file(path: &Path) -> AnalyticsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AnalyticsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> AnalyticsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold a capgrid.toml with every default spelled out.
    pub fn scaffold(seed: u64) -> Self {
        CapgridConfig {
            series: SeriesConfig {
                seed,
                ..Default::default()
            },
            features: FeaturesConfig { top_k: Some(5) },
            ..Default::default()
        }
    }
}
