//! # Marga: Risk-Weighted Grid Path Planning
//!
//! Plans paths across a 2D grid whose cells carry a risk value, trading
//! path length against exposure to risk.
//!
//! ## Features
//!
//! - **Node generation**: 8-connected neighbors filtered by passability and
//!   revisits
//! - **Risk-weighted search**: greedy walk scoring each step by distance and
//!   weighted cell risk
//! - **Weight sweep**: per-target search over a range of risk weights, scored
//!   by `risk + length / ratio` under a length budget
//! - **Mission planning**: many targets from one origin, optionally on the
//!   rayon pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::{GridCoord, MissionPlanner, RiskField, Target};
//!
//! let mut field = RiskField::new(GridCoord::new(-20, -20), 41, 41);
//! field.block(GridCoord::new(2, 0)).unwrap();
//! field.set(GridCoord::new(4, 1), 1.0).unwrap();
//!
//! let planner = MissionPlanner::with_defaults(&field, GridCoord::new(0, 0));
//! let mut targets = vec![Target::new("relay", GridCoord::new(8, 0))];
//! let report = planner.plan_and_apply(&mut targets);
//!
//! for plan in &report.plans {
//!     match plan.outcome.path() {
//!         Some(p) => println!("{}: score {:.2}", plan.name, p.score),
//!         None => println!("{}: no path", plan.name),
//!     }
//! }
//! ```
//!
//! ## Risk Values
//!
//! - `0`: clear
//! - exactly `2` ([`IMPASSABLE_RISK`]): impassable
//! - any other positive value, including values above `2`: traversable with
//!   that penalty
//! - negative or non-finite: rejected when stored, impassable when looked up
//!
//! Cells outside the field are impassable.
//!
//! ## Architecture
//!
//! - [`core`]: Grid coordinates and risk classes
//! - [`grid`]: Risk field storage and the [`RiskLookup`] trait
//! - [`pathfinding`]: Node generation, search and weight sweep
//! - [`mission`]: Multi-target planning and reports
//! - [`config`]: YAML configuration
//! - [`io`]: Scenario files and SVG output

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod mission;
pub mod pathfinding;

pub use config::{MargaConfig, PlannerConfig};
pub use core::{GridCoord, IMPASSABLE_RISK, RiskClass};
pub use error::{MargaError, Result};
pub use grid::{RiskField, RiskLookup};
pub use io::{Scenario, SvgConfig, SvgRenderer};
pub use mission::{MissionPlanner, PlanOutcome, PlanReport, Target};
pub use pathfinding::{PathFailure, PathSelector, PlannedPath, RiskWeightedSearch};
