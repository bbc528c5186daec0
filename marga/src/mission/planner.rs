//! Plans every target from a shared origin.

use log::info;
use rayon::prelude::*;

use crate::config::PlannerConfig;
use crate::core::GridCoord;
use crate::grid::RiskLookup;
use crate::pathfinding::PathSelector;

use super::report::{PlanOutcome, PlanReport, TargetPlan};
use super::target::Target;

/// Runs the risk-weight sweep for each target.
///
/// Targets share only the read-only risk field and the origin, so they can
/// be planned on the rayon pool when `use_parallel` is set. Results keep the
/// input order either way.
pub struct MissionPlanner<'a, R: RiskLookup + Sync + ?Sized> {
    risk: &'a R,
    origin: GridCoord,
    config: PlannerConfig,
}

impl<'a, R: RiskLookup + Sync + ?Sized> MissionPlanner<'a, R> {
    /// Create a planner
    pub fn new(risk: &'a R, origin: GridCoord, config: PlannerConfig) -> Self {
        Self {
            risk,
            origin,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(risk: &'a R, origin: GridCoord) -> Self {
        Self::new(risk, origin, PlannerConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a single target
    pub fn plan_target(&self, target: &Target) -> TargetPlan {
        let selector = PathSelector::new(self.risk, &self.config);
        let outcome: PlanOutcome = selector
            .plan_path(self.origin, target.goal, &target.name)
            .into();

        match &outcome {
            PlanOutcome::Planned(p) => info!(
                "[Planner] {}: {} waypoints, length={:.2} risk={:.2} score={:.3} weight={:.2}",
                target.name,
                p.waypoints.len(),
                p.length,
                p.risk,
                p.score,
                p.risk_weight
            ),
            PlanOutcome::Failed(f) => {
                info!("[Planner] {}: FAILED {} ({})", target.name, f.code(), f)
            }
        }

        TargetPlan {
            name: target.name.clone(),
            goal: target.goal,
            outcome,
        }
    }

    /// Plan every target. One target's failure never affects another.
    pub fn plan_all(&self, targets: &[Target]) -> PlanReport {
        info!(
            "[Planner] planning {} targets from {} (parallel={})",
            targets.len(),
            self.origin,
            self.config.use_parallel
        );

        let plans: Vec<TargetPlan> = if self.config.use_parallel {
            targets.par_iter().map(|t| self.plan_target(t)).collect()
        } else {
            targets.iter().map(|t| self.plan_target(t)).collect()
        };

        let report = PlanReport {
            origin: self.origin,
            plans,
        };
        let summary = report.summary();
        info!(
            "[Planner] done: {} planned, {} failed",
            summary.planned, summary.failed
        );
        report
    }

    /// Plan every target and record the resulting paths on them
    pub fn plan_and_apply(&self, targets: &mut [Target]) -> PlanReport {
        let report = self.plan_all(targets);
        report.apply(targets);
        report
    }
}
