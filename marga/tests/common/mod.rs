//! Shared fixtures for integration tests

#![allow(dead_code)]

use marga::{GridCoord, RiskField};

/// Open field spanning [-half, half] on both axes
pub fn open_field(half: i32) -> RiskField {
    let side = (2 * half + 1) as usize;
    RiskField::new(GridCoord::new(-half, -half), side, side)
}

/// Open field with a risk-1 band at x = 3, |y| <= 1
pub fn banded_field() -> RiskField {
    let mut field = open_field(10);
    for y in -1..=1 {
        field.set(GridCoord::new(3, y), 1.0).unwrap();
    }
    field
}

/// Open field with (2, 0) impassable
pub fn single_obstacle_field() -> RiskField {
    let mut field = open_field(10);
    field.block(GridCoord::new(2, 0)).unwrap();
    field
}

/// Field with walls and penalty patches, used for structural checks
pub fn cluttered_field() -> RiskField {
    RiskField::from_ascii(
        GridCoord::new(0, 0),
        &[
            "....................",
            "..##......~~~.......",
            "..##......~~~...#...",
            "..........~~~...#...",
            "......#.........#...",
            "......#....1........",
            "......#....2..~~~...",
            "...~~~#....3........",
            "...~~~..........##..",
            "....................",
        ],
    )
    .unwrap()
}

pub fn coord(x: i32, y: i32) -> GridCoord {
    GridCoord::new(x, y)
}
