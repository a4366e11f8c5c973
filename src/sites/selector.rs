//! Ranking and top-N selection.

use crate::sites::{ObserverSite, ScoredSite};

/// Reduce a scored candidate set to the best `n` sites, best first.
///
/// Sorts descending by score with a stable sort, so exact ties keep their
/// original generation order; drops every site with score ≤ 0; returns at
/// most `n` survivors. Fewer than `n` positive-scoring sites is a short
/// list, not an error.
///
/// The scored inputs are consumed: only the bare sites survive selection.
pub fn select_top(mut scored: Vec<ScoredSite>, n: usize) -> Vec<ObserverSite> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
        .into_iter()
        .filter(|s| s.score > 0.0)
        .take(n)
        .map(|s| s.site)
        .collect()
}
