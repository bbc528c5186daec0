//! Node generation for the risk-weighted walk.

use crate::core::GridCoord;
use crate::grid::RiskLookup;

use super::types::Trail;

/// Viable next cells from `current`, in Moore-offset order.
///
/// Excludes impassable cells, cells unknown to the risk field, and cells the
/// trail has already visited.
pub fn generate_nodes<R: RiskLookup + ?Sized>(
    risk: &R,
    current: GridCoord,
    trail: &Trail,
) -> Vec<GridCoord> {
    current
        .neighbors_8()
        .filter(|n| risk.is_passable(*n) && !trail.contains(n))
        .collect()
}
