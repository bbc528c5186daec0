//! Core types for the marga planner.
//!
//! - [`GridCoord`]: integer cell coordinate, also used as path waypoint
//! - [`RiskClass`]: semantic class of a cell's risk value

mod point;
mod risk;

pub use point::{GridCoord, MOORE_OFFSETS};
pub use risk::{IMPASSABLE_RISK, RiskClass};
