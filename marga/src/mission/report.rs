//! Planning results for a set of targets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::Result;
use crate::pathfinding::{PathFailure, PlannedPath};

use super::target::Target;

/// Result for one target
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// A path within budget was found
    Planned(PlannedPath),
    /// No acceptable path
    Failed(PathFailure),
}

impl PlanOutcome {
    /// The planned path, if any
    pub fn path(&self) -> Option<&PlannedPath> {
        match self {
            PlanOutcome::Planned(p) => Some(p),
            PlanOutcome::Failed(_) => None,
        }
    }

    /// The failure, if any
    pub fn failure(&self) -> Option<&PathFailure> {
        match self {
            PlanOutcome::Planned(_) => None,
            PlanOutcome::Failed(f) => Some(f),
        }
    }

    /// Did planning succeed?
    pub fn is_planned(&self) -> bool {
        matches!(self, PlanOutcome::Planned(_))
    }
}

impl From<std::result::Result<PlannedPath, PathFailure>> for PlanOutcome {
    fn from(result: std::result::Result<PlannedPath, PathFailure>) -> Self {
        match result {
            Ok(path) => PlanOutcome::Planned(path),
            Err(failure) => PlanOutcome::Failed(failure),
        }
    }
}

/// One target's entry in a report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetPlan {
    /// Target name
    pub name: String,
    /// Target goal cell
    pub goal: GridCoord,
    /// Result
    pub outcome: PlanOutcome,
}

/// Aggregate counts over a report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Targets with a path
    pub planned: usize,
    /// Targets without one
    pub failed: usize,
}

impl ReportSummary {
    /// Total targets
    pub fn total(&self) -> usize {
        self.planned + self.failed
    }
}

/// Per-target planning results, in target input order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Shared origin
    pub origin: GridCoord,
    /// One entry per target
    pub plans: Vec<TargetPlan>,
}

impl PlanReport {
    /// Entry for the first target named `name`
    pub fn get(&self, name: &str) -> Option<&TargetPlan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// Entries with a path
    pub fn succeeded(&self) -> impl Iterator<Item = &TargetPlan> {
        self.plans.iter().filter(|p| p.outcome.is_planned())
    }

    /// Entries without a path
    pub fn failed(&self) -> impl Iterator<Item = &TargetPlan> {
        self.plans.iter().filter(|p| !p.outcome.is_planned())
    }

    /// Count planned and failed targets
    pub fn summary(&self) -> ReportSummary {
        let planned = self.succeeded().count();
        ReportSummary {
            planned,
            failed: self.plans.len() - planned,
        }
    }

    /// Outcomes keyed by target name (later duplicates win)
    pub fn by_name(&self) -> HashMap<&str, &PlanOutcome> {
        self.plans
            .iter()
            .map(|p| (p.name.as_str(), &p.outcome))
            .collect()
    }

    /// Write every planned path into the matching target.
    ///
    /// Targets are matched by name and goal. Failed targets are left
    /// untouched. Returns the number of paths written.
    pub fn apply(&self, targets: &mut [Target]) -> usize {
        let mut written = 0;
        for target in targets.iter_mut() {
            let planned = self
                .plans
                .iter()
                .filter(|p| p.name == target.name && p.goal == target.goal)
                .filter_map(|p| p.outcome.path())
                .last();
            if let Some(planned) = planned {
                target.set_path(planned.waypoints.clone());
                written += 1;
            }
        }
        written
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write YAML to a file
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned(waypoints: Vec<GridCoord>) -> PlanOutcome {
        PlanOutcome::Planned(PlannedPath {
            length: crate::pathfinding::path_length(&waypoints),
            waypoints,
            risk: 0.0,
            score: 0.0,
            risk_weight: 0.0,
            sweep_skipped: true,
            candidates_evaluated: 0,
        })
    }

    fn sample_report() -> PlanReport {
        PlanReport {
            origin: GridCoord::new(0, 0),
            plans: vec![
                TargetPlan {
                    name: "a".to_string(),
                    goal: GridCoord::new(1, 0),
                    outcome: planned(vec![GridCoord::new(0, 0), GridCoord::new(1, 0)]),
                },
                TargetPlan {
                    name: "b".to_string(),
                    goal: GridCoord::new(9, 9),
                    outcome: PlanOutcome::Failed(PathFailure::GoalBlocked {
                        at: GridCoord::new(9, 9),
                    }),
                },
            ],
        }
    }

    #[test]
    fn test_summary_and_lookup() {
        let report = sample_report();
        let summary = report.summary();
        assert_eq!(summary.planned, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 2);
        assert!(report.get("a").unwrap().outcome.is_planned());
        assert!(report.get("b").unwrap().outcome.failure().is_some());
        assert!(report.get("c").is_none());
        assert_eq!(report.by_name().len(), 2);
    }

    #[test]
    fn test_apply_writes_only_planned() {
        let report = sample_report();
        let mut targets = vec![
            Target::new("a", GridCoord::new(1, 0)),
            Target::new("b", GridCoord::new(9, 9)),
            Target::new("a", GridCoord::new(5, 5)),
        ];

        assert_eq!(report.apply(&mut targets), 1);
        assert_eq!(
            targets[0].path,
            Some(vec![GridCoord::new(0, 0), GridCoord::new(1, 0)])
        );
        assert!(!targets[1].has_path());
        // Same name, different goal
        assert!(!targets[2].has_path());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let report = sample_report();
        let yaml = report.to_yaml().unwrap();
        assert!(yaml.contains("status: planned"));
        assert!(yaml.contains("kind: goal_blocked"));
        let parsed: PlanReport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, report);
    }
}
