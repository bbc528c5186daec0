//! Path length and risk scoring.

use crate::core::GridCoord;
use crate::grid::RiskLookup;

/// Sum of consecutive Euclidean distances
pub fn path_length(path: &[GridCoord]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Sum of per-cell risk along the path, origin included.
///
/// Cells unknown to the field contribute nothing.
pub fn cumulative_risk<R: RiskLookup + ?Sized>(risk: &R, path: &[GridCoord]) -> f64 {
    path.iter().filter_map(|&c| risk.risk_at(c)).sum()
}

/// `risk + length / risk_to_length_ratio`
#[inline]
pub fn score(risk: f64, length: f64, risk_to_length_ratio: f64) -> f64 {
    risk + length / risk_to_length_ratio
}

/// Check the structural path invariants: starts at `origin`, ends at
/// `target`, every hop is 8-connected, no cell repeats.
pub fn is_well_formed(path: &[GridCoord], origin: GridCoord, target: GridCoord) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(path.len());
    path.first() == Some(&origin)
        && path.last() == Some(&target)
        && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
        && path.iter().all(|c| seen.insert(*c))
}
