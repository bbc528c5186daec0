//! Configuration loading for marga.
//!
//! All settings live in a single YAML document; every field has a default.

mod defaults;
mod marga;
mod planner;

pub use marga::{DEFAULT_CONFIG_PATH, MargaConfig};
pub use planner::PlannerConfig;
