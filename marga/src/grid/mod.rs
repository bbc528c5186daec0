//! Risk field storage and lookup.
//!
//! - [`RiskField`]: dense rectangular storage of raw risk values
//! - [`RiskLookup`]: the read-only view the planner consumes

mod lookup;
mod storage;

pub use lookup::RiskLookup;
pub use storage::{RiskCounts, RiskField};
