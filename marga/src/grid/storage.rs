//! Dense risk field storage.

use crate::core::{GridCoord, IMPASSABLE_RISK, RiskClass};
use crate::error::{MargaError, Result};

use super::lookup::RiskLookup;

/// Rectangular risk field anchored at a minimum corner.
///
/// Cell `(x, y)` is stored at row `y - min.y`, column `x - min.x`.
/// Coordinates outside the rectangle are unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskField {
    /// Raw risk values, row-major
    values: Vec<f64>,
    /// Coordinate of the first stored cell
    min: GridCoord,
    /// Width in cells
    width: usize,
    /// Height in cells
    height: usize,
}

impl RiskField {
    /// Create a clear field of `width` x `height` cells starting at `min`
    pub fn new(min: GridCoord, width: usize, height: usize) -> Self {
        Self::filled(min, width, height, 0.0)
    }

    /// Create a field with every cell set to `value`.
    ///
    /// Invalid values are clamped to clear. Columns and rows that would lie
    /// past `i32::MAX` are dropped.
    pub fn filled(min: GridCoord, width: usize, height: usize, value: f64) -> Self {
        let value = RiskClass::from_value(value).map_or(0.0, RiskClass::value);
        let width = width.min(Self::span_to_max(min.x));
        let height = height.min(Self::span_to_max(min.y));
        Self {
            values: vec![value; width * height],
            min,
            width,
            height,
        }
    }

    /// Build from numeric rows. Row `r` holds `y = min.y + r`.
    pub fn from_rows(min: GridCoord, rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut field = Self::new(min, width, height);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MargaError::RiskField(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                let coord = i32::try_from(c)
                    .ok()
                    .zip(i32::try_from(r).ok())
                    .and_then(|(dx, dy)| min.checked_offset(dx, dy))
                    .ok_or_else(|| {
                        MargaError::RiskField(format!(
                            "cell ({}, {}) lies past the coordinate range",
                            c, r
                        ))
                    })?;
                field.set(coord, value)?;
            }
        }

        Ok(field)
    }

    /// Build from ASCII rows. Row `r` holds `y = min.y + r`.
    ///
    /// - `.` clear
    /// - `#` impassable
    /// - `~` penalty of 1
    /// - `0`-`9` raw value (so `2` is impassable)
    pub fn from_ascii<S: AsRef<str>>(min: GridCoord, rows: &[S]) -> Result<Self> {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(c, ch)| {
                        Self::value_for_char(ch).ok_or_else(|| {
                            MargaError::RiskField(format!(
                                "unexpected character '{}' at row {}, column {}",
                                ch, r, c
                            ))
                        })
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(min, &parsed)
    }

    fn value_for_char(ch: char) -> Option<f64> {
        match ch {
            '.' => Some(0.0),
            '#' => Some(IMPASSABLE_RISK),
            '~' => Some(1.0),
            d => d.to_digit(10).map(f64::from),
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// Inclusive (min, max) corners. `None` for an empty field.
    pub fn bounds(&self) -> Option<(GridCoord, GridCoord)> {
        if self.values.is_empty() {
            return None;
        }
        let max = GridCoord::new(
            Self::offset(self.min.x, self.width - 1),
            Self::offset(self.min.y, self.height - 1),
        );
        Some((self.min, max))
    }

    /// Check if coordinates are inside the field
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord).is_some()
    }

    /// Convert coordinates to flat array index
    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        let col = i64::from(coord.x) - i64::from(self.min.x);
        let row = i64::from(coord.y) - i64::from(self.min.y);
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    #[inline]
    fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new(
            Self::offset(self.min.x, index % self.width),
            Self::offset(self.min.y, index / self.width),
        )
    }

    /// `start + n` for an `n` already known to stay within `i32`
    #[inline]
    fn offset(start: i32, n: usize) -> i32 {
        (i64::from(start) + n as i64) as i32
    }

    /// Number of cells from `start` up to and including `i32::MAX`
    #[inline]
    fn span_to_max(start: i32) -> usize {
        (i64::from(i32::MAX) - i64::from(start) + 1) as usize
    }

    /// Raw risk value, `None` outside the field
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<f64> {
        self.coord_to_index(coord).map(|i| self.values[i])
    }

    /// Set the raw risk value of a cell
    pub fn set(&mut self, coord: GridCoord, value: f64) -> Result<()> {
        if RiskClass::from_value(value).is_none() {
            return Err(MargaError::InvalidRisk { coord, value });
        }
        let index = self.coord_to_index(coord).ok_or_else(|| {
            MargaError::RiskField(format!("{} is outside the field", coord))
        })?;
        self.values[index] = value;
        Ok(())
    }

    /// Mark a cell impassable
    pub fn block(&mut self, coord: GridCoord) -> Result<()> {
        self.set(coord, IMPASSABLE_RISK)
    }

    /// Iterate over all cells
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.index_to_coord(i), v))
    }

    /// Count cells by class
    pub fn count_by_class(&self) -> RiskCounts {
        let mut counts = RiskCounts::default();
        for &value in &self.values {
            match RiskClass::from_value(value) {
                Some(RiskClass::Clear) => counts.clear += 1,
                Some(RiskClass::Penalty(_)) => counts.penalty += 1,
                Some(RiskClass::Impassable) | None => counts.impassable += 1,
            }
        }
        counts
    }

    /// Render the field as ASCII rows (row 0 = lowest y)
    pub fn to_ascii(&self) -> Vec<String> {
        self.values
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|&v| RiskClass::from_value(v).map_or('#', RiskClass::as_char))
                    .collect()
            })
            .collect()
    }
}

impl RiskLookup for RiskField {
    #[inline]
    fn risk_at(&self, coord: GridCoord) -> Option<f64> {
        self.get(coord)
    }
}

/// Cell counts by risk class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RiskCounts {
    /// Cells with zero risk
    pub clear: usize,
    /// Traversable cells with a penalty
    pub penalty: usize,
    /// Impassable cells
    pub impassable: usize,
}

impl RiskCounts {
    /// Cells a path may enter
    pub fn traversable(&self) -> usize {
        self.clear + self.penalty
    }
}
