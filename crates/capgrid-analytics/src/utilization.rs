//! Utilization efficiency: how much of each region's allocation is used.
//!
//! Regions without an observed utilized figure get a synthetic one drawn
//! from the injected random source: `allocated * U(0.7, 1.0)`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use capgrid_core::{ColorTier, RegionLoad, RegionRecord, RiskTier};

/// Efficiency above this is shown as success.
pub const EFFICIENT_ABOVE: f64 = 90.0;
/// Efficiency above this (and not above success) is shown as warning.
pub const ACCEPTABLE_ABOVE: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationPoint {
    pub region: String,
    pub allocated: f64,
    pub utilized: f64,
    pub efficiency: f64,
    pub color: ColorTier,
    pub risk: RiskTier,
}

pub fn efficiency(allocated: f64, utilized: f64) -> f64 {
    if allocated > 0.0 {
        100.0 * utilized / allocated
    } else {
        0.0
    }
}

pub fn efficiency_color(efficiency: f64) -> ColorTier {
    if efficiency > EFFICIENT_ABOVE {
        ColorTier::Success
    } else if efficiency > ACCEPTABLE_ABOVE {
        ColorTier::Warning
    } else {
        ColorTier::Destructive
    }
}

/// One point per region. `loads` and `records` must be parallel slices as
/// produced by `classify_regions`.
pub fn utilization_points<R: Rng + ?Sized>(
    loads: &[RegionLoad],
    records: &[RegionRecord],
    rng: &mut R,
) -> Vec<UtilizationPoint> {
    loads
        .iter()
        .zip(records)
        .map(|(load, record)| {
            let allocated = load.total();
            let utilized = match load.utilized {
                Some(observed) => observed,
                None => allocated * rng.gen_range(0.7..1.0),
            };
            let eff = efficiency(allocated, utilized);
            UtilizationPoint {
                region: load.region.clone(),
                allocated,
                utilized,
                efficiency: eff,
                color: efficiency_color(eff),
                risk: record.risk,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskThresholds, classify_regions};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn efficiency_math() {
        assert_eq!(efficiency(200.0, 150.0), 75.0);
        assert_eq!(efficiency(0.0, 10.0), 0.0);
    }

    #[test]
    fn efficiency_colors() {
        assert_eq!(efficiency_color(95.0), ColorTier::Success);
        assert_eq!(efficiency_color(90.0), ColorTier::Warning);
        assert_eq!(efficiency_color(75.0), ColorTier::Warning);
        assert_eq!(efficiency_color(70.0), ColorTier::Destructive);
    }

    #[test]
    fn observed_utilization_wins() {
        let mut load = RegionLoad::new("East US", 1200.0, 980.0, 0.0);
        load.utilized = Some(2071.0);
        let records = classify_regions(std::slice::from_ref(&load), &RiskThresholds::default()).unwrap();
        let points = utilization_points(&[load], &records, &mut StdRng::seed_from_u64(1));
        assert_eq!(points[0].allocated, 2180.0);
        assert_eq!(points[0].utilized, 2071.0);
        assert_eq!(points[0].color, ColorTier::Success);
        assert_eq!(points[0].risk, RiskTier::Moderate);
    }

    #[test]
    fn synthetic_utilization_in_range_and_seeded() {
        let loads = vec![
            RegionLoad::new("West US 2", 850.0, 1200.0, 25.0),
            RegionLoad::new("Canada Central", 540.0, 630.0, 20.0),
        ];
        let records = classify_regions(&loads, &RiskThresholds::default()).unwrap();
        let a = utilization_points(&loads, &records, &mut StdRng::seed_from_u64(5));
        let b = utilization_points(&loads, &records, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        for p in &a {
            assert!(p.efficiency >= 70.0 && p.efficiency < 100.0);
            assert_ne!(p.color, ColorTier::Destructive);
        }
    }
}
