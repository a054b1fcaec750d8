//! Human-readable report formatting.

use crate::gauge;
use crate::kpi::accuracy_color;
use crate::pass::DashboardSnapshot;

pub fn format_report(snap: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let risk = format!("{} ({}%)", snap.provisioning_risk.label(), snap.gauge.percentage);
    let progress = &snap.kpis.progress;

    out.push_str("\n╔══════════════════════════════════════════╗\n");
    out.push_str("║  capgrid Capacity Analytics              ║\n");
    out.push_str("╠══════════════════════════════════════════╣\n");
    out.push_str(&format!("║  Date:     {:<30}║\n", snap.generated_for.to_string()));
    out.push_str(&format!("║  Risk:     {:<30}║\n", risk));
    out.push_str(&format!(
        "║  Savings:  {:<30}║\n",
        format!("{:.1} / {:.1} ({:.1}%)", progress.savings, progress.target, progress.progress)
    ));
    out.push_str("╚══════════════════════════════════════════╝\n\n");

    if progress.achieved {
        out.push_str("🎉 Target achieved!\n\n");
    } else {
        out.push_str(&format!("{:.1} remaining to reach target\n\n", progress.remaining));
    }

    let k = &snap.kpis;
    if k.entity_count > 0 {
        out.push_str(&format!("KPIs ({} entities):\n", k.entity_count));
        out.push_str(&format!(
            "  Accuracy: {} {:.1}%\n",
            accuracy_color(k.mean_accuracy).symbol(),
            k.mean_accuracy
        ));
        out.push_str(&format!("  Utilization: {:.1}%\n", k.mean_utilization));
        out.push_str(&format!("  Cost: {:.2}\n\n", k.mean_cost));
    }

    let acc = &snap.forecast_accuracy;
    out.push_str(&format!("Forecast ({} days):\n", acc.points));
    out.push_str(&format!("  MAE:  {:.1}\n", acc.mae));
    out.push_str(&format!("  RMSE: {:.1}\n", acc.rmse));
    out.push_str(&format!("  Bias: {:+.1}\n", acc.bias));
    if let Some(accuracy) = acc.accuracy {
        let health = snap.model_health.map(|h| h.label()).unwrap_or("-");
        out.push_str(&format!(
            "  Accuracy: {} {accuracy:.1}% ({health})\n",
            accuracy_color(accuracy).symbol()
        ));
    }
    out.push('\n');

    let c = &snap.tier_counts;
    out.push_str(&format!("Regions ({} total):\n", snap.regions.len()));
    out.push_str(&format!("  🟢 {} low\n", c.low));
    out.push_str(&format!("  🟡 {} moderate\n", c.moderate));
    out.push_str(&format!("  🔴 {} high\n\n", c.high));
    for r in &snap.regions {
        out.push_str(&format!(
            "  {} {:<18} {:>7.0}  score {:>5.1}  Δ {:+.0}\n",
            gauge::tier_color(r.risk).symbol(),
            r.region,
            r.compute + r.storage,
            r.risk_score,
            r.delta
        ));
    }
    out.push('\n');

    if !snap.leaderboard.is_empty() {
        out.push_str("LEADERBOARD:\n\n");
        for e in &snap.leaderboard {
            out.push_str(&format!(
                "  {}. {:<20} {:>5.1}%  ${:.1}M\n",
                e.rank,
                e.name,
                e.score,
                e.savings / 1_000_000.0
            ));
        }
        out.push('\n');
    }

    if !snap.top_features.is_empty() {
        out.push_str("TOP FEATURES:\n\n");
        for f in &snap.top_features {
            out.push_str(&format!("  {} {:<22} {:+}%\n", f.direction.arrow(), f.name, f.value));
        }
        out.push('\n');
    }

    if snap.nudges.is_empty() {
        out.push_str("All systems optimal. No immediate actions required.\n");
    } else {
        out.push_str("NUDGES:\n\n");
        for n in &snap.nudges {
            out.push_str(&format!(
                "  {} [{}] {}: {}\n",
                n.color.symbol(),
                n.severity.label(),
                n.region,
                n.message
            ));
        }
    }

    out
}
