//! Multi-target planning.
//!
//! - [`Target`]: named goal with a path slot
//! - [`MissionPlanner`]: plans all targets from a shared origin
//! - [`PlanReport`]: per-target outcomes, applied back onto targets

mod planner;
mod report;
mod target;

pub use planner::MissionPlanner;
pub use report::{PlanOutcome, PlanReport, ReportSummary, TargetPlan};
pub use target::Target;
