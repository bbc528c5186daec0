//! Risk classes for grid cells.
//!
//! A cell's raw risk value is one of:
//! - `0` - clear, no penalty
//! - `2` - impassable (reserved sentinel)
//! - any other positive value - traversable with that penalty

use serde::{Deserialize, Serialize};

/// Raw risk value reserved for impassable cells.
pub const IMPASSABLE_RISK: f64 = 2.0;

/// Semantic risk class of a cell
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum RiskClass {
    /// No penalty
    #[default]
    Clear,
    /// Traversable at a cost
    Penalty(f64),
    /// Cannot be entered
    Impassable,
}

impl RiskClass {
    /// Classify a raw risk value.
    ///
    /// Returns `None` for negative or non-finite values.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(if value == 0.0 {
            RiskClass::Clear
        } else if value == IMPASSABLE_RISK {
            RiskClass::Impassable
        } else {
            RiskClass::Penalty(value)
        })
    }

    /// Raw value of this class
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            RiskClass::Clear => 0.0,
            RiskClass::Penalty(v) => v,
            RiskClass::Impassable => IMPASSABLE_RISK,
        }
    }

    /// Can a path step onto this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, RiskClass::Impassable)
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            RiskClass::Clear => '.',
            RiskClass::Penalty(_) => '~',
            RiskClass::Impassable => '#',
        }
    }
}
