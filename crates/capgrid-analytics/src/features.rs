//! Feature importance selector.

use capgrid_core::error::{AnalyticsError, AnalyticsResult, ensure_finite};
use capgrid_core::{Direction, FactorImpact, FeatureImpact};

/// Top `k` factors by absolute impact, largest first.
///
/// `None` keeps the whole catalog. Equal magnitudes keep catalog order.
/// Each result is tagged `up` when its value is positive, `down` otherwise.
pub fn top_features(catalog: &[FactorImpact], k: Option<usize>) -> AnalyticsResult<Vec<FeatureImpact>> {
    if catalog.is_empty() {
        return Err(AnalyticsError::EmptyCatalog);
    }
    for f in catalog {
        ensure_finite(&f.name, f.value)?;
    }

    let mut ordered: Vec<&FactorImpact> = catalog.iter().collect();
    ordered.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));

    let keep = k.unwrap_or(catalog.len()).min(catalog.len());
    Ok(ordered
        .into_iter()
        .take(keep)
        .map(|f| FeatureImpact {
            name: f.name.clone(),
            direction: Direction::of(f.value),
            value: f.value,
        })
        .collect())
}
