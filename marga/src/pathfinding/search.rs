//! Risk-weighted greedy walk.
//!
//! From the origin, the walk repeatedly commits to the neighbor with the
//! lowest blended cost and never backtracks:
//!
//! ```text
//! g = |origin - current| + |current - candidate|
//! h = |candidate - target|
//! f = g + h + risk(candidate) * risk_weight
//! ```
//!
//! `g` is not the accumulated path length. It is the straight line from the
//! origin to the walk head plus the next hop.
//! TODO: switch to accumulated length once tuned paths no longer depend on it.
//!
//! The target is accepted as soon as it appears among the candidates, without
//! scoring. The walk is bounded: it fails when no candidate remains or when
//! the step cap is reached.

use log::{debug, trace};

use crate::core::GridCoord;
use crate::grid::RiskLookup;

use super::neighbors::generate_nodes;
use super::types::{CandidateScore, PathFailure, Trail};

/// Greedy risk-weighted path search
pub struct RiskWeightedSearch<'a, R: RiskLookup + ?Sized> {
    risk: &'a R,
    max_steps: usize,
}

impl<'a, R: RiskLookup + ?Sized> RiskWeightedSearch<'a, R> {
    /// Create a search over `risk` that gives up after `max_steps` waypoints
    pub fn new(risk: &'a R, max_steps: usize) -> Self {
        Self { risk, max_steps }
    }

    /// Walk from `origin` to `target` with the given risk weight
    pub fn find_path(
        &self,
        origin: GridCoord,
        target: GridCoord,
        risk_weight: f64,
    ) -> Result<Vec<GridCoord>, PathFailure> {
        trace!(
            "[Search] find_path: origin={} target={} weight={:.2}",
            origin, target, risk_weight
        );

        if !self.risk.is_passable(origin) {
            debug!("[Search] FAILED: StartBlocked at {}", origin);
            return Err(PathFailure::StartBlocked { at: origin });
        }
        if origin == target {
            return Ok(vec![origin]);
        }
        if !self.risk.is_passable(target) {
            debug!("[Search] FAILED: GoalBlocked at {}", target);
            return Err(PathFailure::GoalBlocked { at: target });
        }

        let mut trail = Trail::new(origin);
        let mut current = origin;

        for step in 0..self.max_steps {
            let candidates = generate_nodes(self.risk, current, &trail);

            if candidates.contains(&target) {
                trail.push(target);
                trace!(
                    "[Search] SUCCESS: {} waypoints, weight={:.2}",
                    trail.len(),
                    risk_weight
                );
                return Ok(trail.into_waypoints());
            }

            let Some(best) = self.select(origin, current, target, &candidates, risk_weight) else {
                debug!("[Search] FAILED: DeadEnd at {} after {} steps", current, step);
                return Err(PathFailure::DeadEnd { at: current, steps: step });
            };

            trace!(
                "[Search] step {}: {} -> {} (g={:.3} h={:.3} f={:.3})",
                step, current, best.node, best.g, best.h, best.f
            );
            trail.push(best.node);
            current = best.node;
        }

        debug!(
            "[Search] FAILED: StepLimitExceeded ({} steps) toward {}",
            self.max_steps, target
        );
        Err(PathFailure::StepLimitExceeded {
            steps: self.max_steps,
        })
    }

    /// Score every candidate and keep the winner in generation order
    fn select(
        &self,
        origin: GridCoord,
        current: GridCoord,
        target: GridCoord,
        candidates: &[GridCoord],
        risk_weight: f64,
    ) -> Option<CandidateScore> {
        let head = origin.distance(&current);

        candidates
            .iter()
            .map(|&node| {
                let g = head + current.distance(&node);
                let h = node.distance(&target);
                let penalty = self.risk.risk_at(node).unwrap_or(0.0) * risk_weight;
                CandidateScore {
                    node,
                    g,
                    h,
                    f: g + h + penalty,
                }
            })
            .fold(None, |best: Option<CandidateScore>, candidate| match best {
                Some(b) if !candidate.beats(&b) => Some(b),
                _ => Some(candidate),
            })
    }
}
