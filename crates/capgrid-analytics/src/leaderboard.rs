//! Leaderboard ranker.
//!
//! Contributors are ordered by savings (descending), then by accuracy score
//! (descending). Full ties keep their input order, so identical input always
//! produces identical ranks.

use std::cmp::Ordering;

use tracing::debug;

use capgrid_core::error::AnalyticsResult;
use capgrid_core::{ContributorCandidate, ContributorRecord};

/// Validate, sort, and assign 1-based ranks.
pub fn rank_leaderboard(
    candidates: &[ContributorCandidate],
) -> AnalyticsResult<Vec<ContributorRecord>> {
    for c in candidates {
        c.validate()?;
    }

    let mut ordered: Vec<&ContributorCandidate> = candidates.iter().collect();
    // Stable sort: full ties keep input order.
    ordered.sort_by(|a, b| compare(a, b));

    let ranked: Vec<ContributorRecord> = ordered
        .into_iter()
        .zip(1u32..)
        .map(|(c, rank)| ContributorRecord {
            rank,
            name: c.name.clone(),
            score: unsigned_zero(c.score),
            savings: unsigned_zero(c.savings),
        })
        .collect();

    debug!(contributors = ranked.len(), "ranked leaderboard");
    Ok(ranked)
}

fn compare(a: &ContributorCandidate, b: &ContributorCandidate) -> Ordering {
    unsigned_zero(b.savings)
        .total_cmp(&unsigned_zero(a.savings))
        .then_with(|| unsigned_zero(b.score).total_cmp(&unsigned_zero(a.score)))
}

/// Fold `-0.0` into `0.0` so `total_cmp` sees the two as equal.
fn unsigned_zero(x: f64) -> f64 {
    x + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, score: f64, savings: f64) -> ContributorCandidate {
        ContributorCandidate::new(name, score, savings)
    }

    fn names(records: &[ContributorRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn orders_by_savings() {
        let ranked = rank_leaderboard(&[
            c("Marcus Johnson", 97.8, 14_800_000.0),
            c("Sarah Chen", 98.5, 15_200_000.0),
        ])
        .unwrap();
        assert_eq!(names(&ranked), vec!["Sarah Chen", "Marcus Johnson"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn already_sorted_input_keeps_order() {
        let ranked = rank_leaderboard(&[
            c("Sarah Chen", 98.5, 15_200_000.0),
            c("Marcus Johnson", 97.8, 14_800_000.0),
        ])
        .unwrap();
        assert_eq!(names(&ranked), vec!["Sarah Chen", "Marcus Johnson"]);
    }

    #[test]
    fn equal_savings_break_on_score() {
        let ranked = rank_leaderboard(&[
            c("Lower", 90.0, 1_000.0),
            c("Higher", 95.0, 1_000.0),
        ])
        .unwrap();
        assert_eq!(names(&ranked), vec!["Higher", "Lower"]);
    }

    #[test]
    fn full_tie_keeps_input_order() {
        let ranked = rank_leaderboard(&[
            c("First", 90.0, 1_000.0),
            c("Second", 90.0, 1_000.0),
            c("Third", 90.0, 1_000.0),
        ])
        .unwrap();
        assert_eq!(names(&ranked), vec!["First", "Second", "Third"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn empty_input_empty_board() {
        assert!(rank_leaderboard(&[]).unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_range_score() {
        assert!(rank_leaderboard(&[c("x", 101.0, 5.0)]).is_err());
        assert!(rank_leaderboard(&[c("x", 50.0, f64::NAN)]).is_err());
    }

    #[test]
    fn negative_zero_savings_ties_with_zero() {
        let ranked = rank_leaderboard(&[c("Low score", 50.0, 0.0), c("High score", 99.0, -0.0)])
            .unwrap();
        assert_eq!(names(&ranked), vec!["High score", "Low score"]);
        assert!(ranked[0].savings.is_sign_positive());
    }

    #[test]
    fn negative_zero_score_ties_with_zero() {
        let ranked = rank_leaderboard(&[c("Plain", 0.0, 10.0), c("Signed", -0.0, 10.0)]).unwrap();
        assert_eq!(names(&ranked), vec!["Plain", "Signed"]);
        assert!(ranked[1].score.is_sign_positive());
    }
}
