//! Capacity nudges: the short list of open alerts worth acting on.

use serde::{Deserialize, Serialize};

use capgrid_core::{AlertKind, CapacityAlert, ColorTier, Severity};

pub const DEFAULT_NUDGE_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nudge {
    pub id: String,
    pub region: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub color: ColorTier,
    pub message: String,
}

pub fn severity_color(severity: Severity) -> ColorTier {
    match severity {
        Severity::High => ColorTier::Destructive,
        Severity::Medium => ColorTier::Warning,
        Severity::Low => ColorTier::Success,
    }
}

/// First `limit` alerts that are not yet completed, in feed order.
pub fn active_nudges(alerts: &[CapacityAlert], limit: usize) -> Vec<Nudge> {
    alerts
        .iter()
        .filter(|a| !a.completed)
        .take(limit)
        .map(|a| Nudge {
            id: a.id.clone(),
            region: a.region.clone(),
            kind: a.kind,
            severity: a.severity,
            color: severity_color(a.severity),
            message: a.message.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, severity: Severity, completed: bool) -> CapacityAlert {
        CapacityAlert {
            id: id.to_string(),
            region: "North Europe".to_string(),
            kind: AlertKind::UnderProvision,
            severity,
            message: "Compute capacity projected to fall short".to_string(),
            completed,
        }
    }

    #[test]
    fn skips_completed_and_limits() {
        let alerts = vec![
            alert("1", Severity::High, false),
            alert("2", Severity::High, true),
            alert("3", Severity::Medium, false),
            alert("4", Severity::Medium, false),
            alert("5", Severity::Low, false),
        ];
        let nudges = active_nudges(&alerts, DEFAULT_NUDGE_LIMIT);
        let ids: Vec<&str> = nudges.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn all_completed_means_no_nudges() {
        let alerts = vec![alert("1", Severity::High, true)];
        assert!(active_nudges(&alerts, 3).is_empty());
    }

    #[test]
    fn zero_limit() {
        let alerts = vec![alert("1", Severity::High, false)];
        assert!(active_nudges(&alerts, 0).is_empty());
    }

    #[test]
    fn severity_colors() {
        assert_eq!(severity_color(Severity::High), ColorTier::Destructive);
        assert_eq!(severity_color(Severity::Medium), ColorTier::Warning);
        assert_eq!(severity_color(Severity::Low), ColorTier::Success);
    }
}
