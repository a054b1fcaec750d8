use std::path::Path;

use capgrid_analytics::gauge::gauge_value;
use capgrid_analytics::{DashboardInput, DashboardPass, RiskThresholds, format_report};
use capgrid_core::RegionLoad;
use tracing::info;

use super::{config, parse_day};

pub fn snapshot(
    input: &str,
    config_path: Option<&str>,
    format: &str,
    today: Option<&str>,
) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    let today = parse_day(today)?;

    let raw = std::fs::read_to_string(Path::new(input))?;
    let tables: DashboardInput = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse {input}: {e}"))?;
    info!(input, regions = tables.regions.len(), "loaded input tables");

    let snap = DashboardPass::new(config)?.run(&tables, today)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&snap)?);
        }
        _ => {
            println!("{}", format_report(&snap));
        }
    }

    Ok(())
}

pub fn classify(compute: f64, storage: f64, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    let thresholds = RiskThresholds::try_from(&config.risk)?;

    let load = RegionLoad::new("cli", compute, storage, 0.0);
    load.validate()?;
    let record = thresholds.assess(&load);
    let gauge = gauge_value(record.risk);

    println!(
        "{} {} (total {:.0}, score {:.1}, gauge {}%)",
        gauge.color.symbol(),
        record.risk.label(),
        load.total(),
        record.risk_score,
        gauge.percentage
    );

    Ok(())
}
