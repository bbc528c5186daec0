//! Search and sweep result types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GridCoord;

/// Reason a target could not be given a path
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathFailure {
    /// Origin is impassable or outside the risk field
    #[error("start {at} is blocked")]
    StartBlocked { at: GridCoord },

    /// Target is impassable or outside the risk field
    #[error("goal {at} is blocked")]
    GoalBlocked { at: GridCoord },

    /// Every neighbor of the walk head is blocked or already visited
    #[error("dead end at {at} after {steps} steps")]
    DeadEnd { at: GridCoord, steps: usize },

    /// Search step cap reached before the target
    #[error("step limit of {steps} reached")]
    StepLimitExceeded { steps: usize },

    /// Best available path is longer than the length budget
    #[error("path length {length:.2} exceeds budget {budget:.2}")]
    BudgetExceeded { length: f64, budget: f64 },
}

impl PathFailure {
    /// Short error code for logs and reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::StartBlocked { .. } => "START_BLOCKED",
            Self::GoalBlocked { .. } => "GOAL_BLOCKED",
            Self::DeadEnd { .. } => "DEAD_END",
            Self::StepLimitExceeded { .. } => "STEP_LIMIT",
            Self::BudgetExceeded { .. } => "BUDGET_EXCEEDED",
        }
    }

    /// True when no path reached the target at all
    pub fn is_unreachable(&self) -> bool {
        !matches!(self, Self::BudgetExceeded { .. })
    }
}

/// Per-neighbor score computed during one search step
#[derive(Clone, Copy, Debug)]
pub(super) struct CandidateScore {
    pub node: GridCoord,
    pub g: f64, // origin->current straight line + current->node
    pub h: f64, // node->target straight line
    pub f: f64, // g + h + weighted risk
}

impl CandidateScore {
    /// Lower f wins, equal f falls back to lower h. Full ties keep `other`.
    #[inline]
    pub fn beats(&self, other: &CandidateScore) -> bool {
        self.f < other.f || (self.f == other.f && self.h < other.h)
    }
}

/// Path under construction: ordered waypoints plus a membership set
#[derive(Clone, Debug)]
pub struct Trail {
    waypoints: Vec<GridCoord>,
    visited: HashSet<GridCoord>,
}

impl Trail {
    /// Start a trail at `origin`
    pub fn new(origin: GridCoord) -> Self {
        let mut visited = HashSet::new();
        visited.insert(origin);
        Self {
            waypoints: vec![origin],
            visited,
        }
    }

    /// Build from existing waypoints (must be non-empty)
    pub fn from_waypoints(waypoints: &[GridCoord]) -> Option<Self> {
        let (&first, rest) = waypoints.split_first()?;
        let mut trail = Self::new(first);
        for &w in rest {
            trail.push(w);
        }
        Some(trail)
    }

    /// Has the trail already visited `coord`?
    #[inline]
    pub fn contains(&self, coord: &GridCoord) -> bool {
        self.visited.contains(coord)
    }

    /// Append a waypoint
    #[inline]
    pub fn push(&mut self, coord: GridCoord) {
        self.visited.insert(coord);
        self.waypoints.push(coord);
    }

    /// Number of waypoints
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Never true; a trail always holds its origin
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Consume into the waypoint list
    pub fn into_waypoints(self) -> Vec<GridCoord> {
        self.waypoints
    }
}

/// A scored path chosen for a target
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedPath {
    /// Waypoints from origin to target
    pub waypoints: Vec<GridCoord>,
    /// Sum of consecutive Euclidean distances
    pub length: f64,
    /// Sum of per-cell risk along the path
    pub risk: f64,
    /// `risk + length / risk_to_length_ratio`
    pub score: f64,
    /// Risk weight of the search that produced this path
    pub risk_weight: f64,
    /// Whether the weight sweep was skipped for this target
    #[serde(default)]
    pub sweep_skipped: bool,
    /// Number of swept searches that produced a path
    #[serde(default)]
    pub candidates_evaluated: usize,
}

impl PlannedPath {
    /// Does this path beat `best`?
    ///
    /// Lower score wins. On an exact score tie the shorter path wins, so the
    /// result does not depend on sweep order beyond the first equal candidate.
    pub fn improves_on(&self, best: &PlannedPath) -> bool {
        self.score < best.score || (self.score == best.score && self.length < best.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: f64, length: f64) -> PlannedPath {
        PlannedPath {
            waypoints: Vec::new(),
            length,
            risk: score - length / 3.0,
            score,
            risk_weight: 0.0,
            sweep_skipped: false,
            candidates_evaluated: 0,
        }
    }

    #[test]
    fn test_candidate_tie_break() {
        let a = CandidateScore {
            node: GridCoord::new(1, 0),
            g: 1.0,
            h: 2.0,
            f: 3.0,
        };
        let b = CandidateScore {
            node: GridCoord::new(1, 1),
            g: 1.5,
            h: 1.5,
            f: 3.0,
        };
        assert!(b.beats(&a));
        assert!(!a.beats(&b));
        // Identical scores keep the incumbent
        assert!(!a.beats(&a));
    }

    #[test]
    fn test_improves_on_prefers_shorter_on_tie() {
        let best = scored(4.0, 9.0);
        assert!(scored(3.5, 9.0).improves_on(&best));
        assert!(scored(4.0, 6.0).improves_on(&best));
        assert!(!scored(4.0, 9.0).improves_on(&best));
        assert!(!scored(4.0, 12.0).improves_on(&best));
        assert!(!scored(4.5, 3.0).improves_on(&best));
    }

    #[test]
    fn test_trail_membership() {
        let mut trail = Trail::new(GridCoord::new(0, 0));
        trail.push(GridCoord::new(1, 1));
        assert!(trail.contains(&GridCoord::new(0, 0)));
        assert!(trail.contains(&GridCoord::new(1, 1)));
        assert!(!trail.contains(&GridCoord::new(2, 2)));
        assert_eq!(trail.len(), 2);
        assert!(Trail::from_waypoints(&[]).is_none());
    }

    #[test]
    fn test_failure_codes() {
        let failure = PathFailure::BudgetExceeded {
            length: 200.0,
            budget: 50.0,
        };
        assert_eq!(failure.code(), "BUDGET_EXCEEDED");
        assert!(!failure.is_unreachable());
        assert_eq!(failure.to_string(), "path length 200.00 exceeds budget 50.00");
        assert!(PathFailure::DeadEnd {
            at: GridCoord::new(0, 0),
            steps: 0
        }
        .is_unreachable());
    }
}
