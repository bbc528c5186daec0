//! Risk-weight sweep: picks the best scoring path for one target.
//!
//! 1. Walk at weight 0 to get the risk-agnostic baseline.
//! 2. If the baseline carries no risk, or is already at or over the length
//!    budget, keep it and skip the sweep.
//! 3. Otherwise walk once per configured weight and keep the lowest score
//!    among paths within the budget.
//!
//! A final path longer than the budget is reported as a failure.

use log::{debug, info, warn};

use crate::config::PlannerConfig;
use crate::core::GridCoord;
use crate::grid::RiskLookup;

use super::scoring::{cumulative_risk, path_length};
use super::search::RiskWeightedSearch;
use super::types::{PathFailure, PlannedPath};

/// Chooses a path per target by sweeping the search risk weight
pub struct PathSelector<'a, R: RiskLookup + ?Sized> {
    risk: &'a R,
    config: &'a PlannerConfig,
    search: RiskWeightedSearch<'a, R>,
}

impl<'a, R: RiskLookup + ?Sized> PathSelector<'a, R> {
    /// Create a selector over `risk`
    pub fn new(risk: &'a R, config: &'a PlannerConfig) -> Self {
        Self {
            risk,
            config,
            search: RiskWeightedSearch::new(risk, config.max_search_steps),
        }
    }

    /// Score a finished walk
    pub fn evaluate(&self, waypoints: Vec<GridCoord>, risk_weight: f64) -> PlannedPath {
        let length = path_length(&waypoints);
        let risk = cumulative_risk(self.risk, &waypoints);
        PlannedPath {
            waypoints,
            length,
            risk,
            score: self.config.score(risk, length),
            risk_weight,
            sweep_skipped: false,
            candidates_evaluated: 0,
        }
    }

    /// Plan a path from `origin` to `target`. `label` names the target in logs.
    pub fn plan_path(
        &self,
        origin: GridCoord,
        target: GridCoord,
        label: &str,
    ) -> Result<PlannedPath, PathFailure> {
        let budget = self.config.length_budget;

        let base = self.search.find_path(origin, target, 0.0).inspect_err(|e| {
            debug!("[Sweep] {}: baseline search failed: {}", label, e);
        })?;
        let mut best = self.evaluate(base, 0.0);
        debug!(
            "[Sweep] {}: baseline length={:.2} risk={:.2} score={:.3}",
            label, best.length, best.risk, best.score
        );

        if best.risk == 0.0 || best.length >= budget {
            info!(
                "[Sweep] {}: path either not risky or at length budget, skipping sweep",
                label
            );
            best.sweep_skipped = true;
        } else {
            let mut evaluated = 0;
            for weight in self.config.risk_weights() {
                let waypoints = match self.search.find_path(origin, target, weight) {
                    Ok(waypoints) => waypoints,
                    Err(e) => {
                        debug!("[Sweep] {}: weight {:.2} failed: {}", label, weight, e);
                        continue;
                    }
                };
                evaluated += 1;

                let candidate = self.evaluate(waypoints, weight);
                if candidate.length <= budget && candidate.improves_on(&best) {
                    debug!(
                        "[Sweep] {}: weight {:.2} improves score {:.3} -> {:.3}",
                        label, weight, best.score, candidate.score
                    );
                    best = candidate;
                }
            }
            best.candidates_evaluated = evaluated;
        }

        if best.length > budget {
            warn!(
                "[Sweep] {}: best length {:.2} exceeds budget {:.2}",
                label, best.length, budget
            );
            return Err(PathFailure::BudgetExceeded {
                length: best.length,
                budget,
            });
        }

        Ok(best)
    }
}
