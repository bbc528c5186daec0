//! Grid coordinate type shared by the risk field and planned paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Moore-neighborhood offsets in generation order.
///
/// X offset is the outer loop and Y the inner one. Search tie-breaking
/// depends on this order, so it must not change.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid coordinates (integer cell indices)
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &GridCoord) -> f64 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        dx.hypot(dy)
    }

    /// Chebyshev distance (max of x and y distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Whether `other` is one of the 8 surrounding cells
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Offset by `(dx, dy)`, `None` past the `i32` range
    #[inline]
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<GridCoord> {
        Some(GridCoord::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
        ))
    }

    /// Get the 8 neighbors in [`MOORE_OFFSETS`] order.
    ///
    /// Neighbors that would lie past the `i32` range are skipped.
    #[inline]
    pub fn neighbors_8(&self) -> impl Iterator<Item = GridCoord> + '_ {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord::new(x, y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
