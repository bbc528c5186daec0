//! Risk-aware path planning on the grid.
//!
//! - **Node generation**: viable 8-connected neighbors of the walk head
//! - **Risk-weighted search**: greedy walk blending distance and risk
//! - **Weight sweep**: per-target search over risk weights, scored against
//!   a length budget
//!
//! ```rust,ignore
//! use marga::pathfinding::PathSelector;
//!
//! let selector = PathSelector::new(&field, &config);
//! match selector.plan_path(origin, goal, "site-a") {
//!     Ok(planned) => println!("{} waypoints, score {:.2}", planned.waypoints.len(), planned.score),
//!     Err(failure) => println!("no path: {}", failure),
//! }
//! ```

mod neighbors;
mod scoring;
mod search;
mod sweep;
mod types;

pub use neighbors::generate_nodes;
pub use scoring::{cumulative_risk, is_well_formed, path_length, score};
pub use search::RiskWeightedSearch;
pub use sweep::PathSelector;
pub use types::{PathFailure, PlannedPath, Trail};
