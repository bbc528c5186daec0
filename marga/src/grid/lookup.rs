//! Risk lookup seam between the planner and whatever owns the map.

use std::collections::HashMap;

use crate::core::{GridCoord, RiskClass};

/// Read-only access to per-cell risk values.
///
/// `None` means the coordinate is unknown to the map. The planner treats
/// unknown cells as impassable.
pub trait RiskLookup {
    /// Raw risk value at `coord`
    fn risk_at(&self, coord: GridCoord) -> Option<f64>;

    /// Risk class at `coord`, `None` if unknown or malformed
    #[inline]
    fn class_at(&self, coord: GridCoord) -> Option<RiskClass> {
        self.risk_at(coord).and_then(RiskClass::from_value)
    }

    /// Can a path step onto `coord`? Unknown cells are not passable.
    #[inline]
    fn is_passable(&self, coord: GridCoord) -> bool {
        self.class_at(coord).is_some_and(RiskClass::is_traversable)
    }
}

impl RiskLookup for HashMap<GridCoord, f64> {
    #[inline]
    fn risk_at(&self, coord: GridCoord) -> Option<f64> {
        self.get(&coord).copied()
    }
}

impl<T: RiskLookup + ?Sized> RiskLookup for &T {
    #[inline]
    fn risk_at(&self, coord: GridCoord) -> Option<f64> {
        (**self).risk_at(coord)
    }
}
