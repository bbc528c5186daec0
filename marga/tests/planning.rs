//! End-to-end planning behavior

mod common;

use std::collections::HashMap;

use approx::assert_relative_eq;
use common::{banded_field, cluttered_field, coord, open_field, single_obstacle_field};
use marga::pathfinding::{cumulative_risk, is_well_formed, path_length};
use marga::{
    GridCoord, MissionPlanner, PathFailure, PathSelector, PlannerConfig, RiskField, RiskLookup,
    RiskWeightedSearch, Target,
};

#[test]
fn test_empty_field_has_no_risk_and_skips_sweep() {
    let field = open_field(15);
    let config = PlannerConfig::default();
    let selector = PathSelector::new(&field, &config);

    for goal in [coord(7, 0), coord(-4, 9), coord(12, -12), coord(0, -3)] {
        let planned = selector.plan_path(coord(0, 0), goal, "open").unwrap();
        assert_eq!(planned.risk, 0.0);
        assert!(planned.sweep_skipped);
        assert!(is_well_formed(&planned.waypoints, coord(0, 0), goal));
    }
}

#[test]
fn test_adjacent_target_is_two_waypoints() {
    let field = open_field(5);
    let config = PlannerConfig::default();
    let selector = PathSelector::new(&field, &config);

    for goal in coord(0, 0).neighbors_8() {
        let planned = selector.plan_path(coord(0, 0), goal, "adjacent").unwrap();
        assert_eq!(planned.waypoints, vec![coord(0, 0), goal]);
    }
}

#[test]
fn test_detour_around_single_obstacle() {
    let field = single_obstacle_field();
    let config = PlannerConfig::default();
    let selector = PathSelector::new(&field, &config);

    let planned = selector.plan_path(coord(0, 0), coord(5, 0), "detour").unwrap();

    assert!(is_well_formed(&planned.waypoints, coord(0, 0), coord(5, 0)));
    assert!(!planned.waypoints.contains(&coord(2, 0)));
    assert!(
        planned.waypoints.contains(&coord(2, 1)) || planned.waypoints.contains(&coord(2, -1))
    );
    assert!(planned.length > 5.0);
    assert_eq!(planned.risk, 0.0);
}

#[test]
fn test_field_at_coordinate_limit_fails_closed() {
    let field = RiskField::new(coord(i32::MAX - 4, 0), 5, 5);
    let config = PlannerConfig::default();
    let selector = PathSelector::new(&field, &config);

    let planned = selector
        .plan_path(coord(i32::MAX, 2), coord(i32::MAX - 4, 2), "edge")
        .unwrap();
    assert!(is_well_formed(
        &planned.waypoints,
        coord(i32::MAX, 2),
        coord(i32::MAX - 4, 2)
    ));
    assert_eq!(planned.length, 4.0);

    let corner: HashMap<GridCoord, f64> = [
        (coord(i32::MIN, i32::MIN), 0.0),
        (coord(i32::MIN + 1, i32::MIN + 1), 0.0),
        (coord(i32::MIN + 2, i32::MIN + 2), 0.0),
    ]
    .into_iter()
    .collect();
    let selector = PathSelector::new(&corner, &config);
    let origin = coord(i32::MIN, i32::MIN);
    let planned = selector
        .plan_path(origin, coord(i32::MIN + 2, i32::MIN + 2), "corner")
        .unwrap();
    assert_eq!(planned.waypoints.len(), 3);
}

#[test]
fn test_target_beyond_budget_fails() {
    let field = RiskField::new(coord(-5, -5), 210, 11);
    let config = PlannerConfig::default();
    let selector = PathSelector::new(&field, &config);

    let result = selector.plan_path(coord(0, 0), coord(200, 0), "far");
    assert_eq!(
        result,
        Err(PathFailure::BudgetExceeded {
            length: 200.0,
            budget: 50.0
        })
    );
}

#[test]
fn test_swept_paths_never_carry_more_risk_than_baseline() {
    let field = banded_field();
    let config = PlannerConfig::default();
    let search = RiskWeightedSearch::new(&field, config.max_search_steps);
    let origin = coord(0, 0);

    for goal in [coord(6, 0), coord(6, 1), coord(5, -1), coord(7, 0)] {
        let baseline = search.find_path(origin, goal, 0.0).unwrap();
        let baseline_risk = cumulative_risk(&field, &baseline);

        for weight in config.risk_weights() {
            let path = search.find_path(origin, goal, weight).unwrap();
            assert!(
                cumulative_risk(&field, &path) <= baseline_risk,
                "goal {} weight {:.2} increased risk",
                goal,
                weight
            );
        }
    }
}

#[test]
fn test_equal_scores_keep_first_weight() {
    // Every weight from 29/25 up yields the same detour, so the score ties
    let field = banded_field();
    let config = PlannerConfig::default();
    let selector = PathSelector::new(&field, &config);

    let first = selector.plan_path(coord(0, 0), coord(6, 0), "tie").unwrap();
    let second = selector.plan_path(coord(0, 0), coord(6, 0), "tie").unwrap();

    assert_eq!(first.risk_weight, 29.0 / 25.0);
    assert_eq!(first, second);
    assert_relative_eq!(first.score, first.length / 3.0);
}

#[test]
fn test_equal_score_prefers_shorter_path() {
    let field = RiskField::from_rows(
        coord(0, 0),
        &[
            vec![0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
            vec![1.0, 0.0, 0.5, 0.0, 2.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.5, 0.0, 0.0, 0.0],
        ],
    )
    .unwrap();
    // Length is negligible next to risk, so every path below scores 0.5
    let mut config = PlannerConfig::default();
    config.risk_to_length_ratio = 1e300;
    config.validate().unwrap();

    let (origin, goal) = (coord(0, 2), coord(5, 0));
    let search = RiskWeightedSearch::new(&field, config.max_search_steps);
    let baseline = search.find_path(origin, goal, 0.0).unwrap();
    let first_swept = search.find_path(origin, goal, 1.0).unwrap();
    let last_swept = search.find_path(origin, goal, 2.0).unwrap();
    assert_eq!(cumulative_risk(&field, &baseline), 0.5);
    assert_eq!(cumulative_risk(&field, &first_swept), 0.5);
    // Later weights fall back to a route as long as the baseline
    assert_eq!(cumulative_risk(&field, &last_swept), 0.5);
    assert_relative_eq!(path_length(&last_swept), path_length(&baseline));
    assert_relative_eq!(path_length(&baseline) - path_length(&first_swept), 2.0);

    let planned = PathSelector::new(&field, &config)
        .plan_path(origin, goal, "tie")
        .unwrap();
    assert_eq!(planned.score, 0.5);
    assert_eq!(planned.waypoints, first_swept);
    assert_eq!(planned.risk_weight, 1.0);
}

#[test]
fn test_planning_is_idempotent() {
    let field = cluttered_field();
    let targets = vec![
        Target::new("a", coord(19, 9)),
        Target::new("b", coord(12, 5)),
        Target::new("c", coord(0, 9)),
        Target::new("d", coord(17, 3)),
    ];
    let planner = MissionPlanner::with_defaults(&field, coord(0, 0));

    assert_eq!(planner.plan_all(&targets), planner.plan_all(&targets));
}

#[test]
fn test_cluttered_paths_are_well_formed() {
    let field = cluttered_field();
    let origin = coord(0, 0);
    let config = PlannerConfig::default();
    let targets: Vec<Target> = [(19, 9), (12, 5), (0, 9), (17, 3), (8, 8), (19, 0), (4, 4)]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Target::new(format!("t{}", i), coord(x, y)))
        .collect();

    let report = MissionPlanner::new(&field, origin, config.clone()).plan_all(&targets);
    assert_eq!(report.plans.len(), targets.len());

    for plan in report.succeeded() {
        let planned = plan.outcome.path().unwrap();
        assert!(
            is_well_formed(&planned.waypoints, origin, plan.goal),
            "{} is malformed: {:?}",
            plan.name,
            planned.waypoints
        );
        assert!(planned.waypoints.iter().all(|&c| field.is_passable(c)));
        assert!(planned.length <= config.length_budget);
    }
}

#[test]
fn test_blocked_and_unknown_targets_fail_explicitly() {
    let field = cluttered_field();
    let mut targets = vec![
        Target::new("open", coord(5, 0)),
        Target::new("wall", coord(6, 5)),
        Target::new("outside", coord(40, 40)),
    ];
    let planner = MissionPlanner::with_defaults(&field, coord(0, 0));
    let report = planner.plan_and_apply(&mut targets);

    assert_eq!(report.summary().planned, 1);
    assert_eq!(
        report.get("wall").unwrap().outcome.failure(),
        Some(&PathFailure::GoalBlocked { at: coord(6, 5) })
    );
    assert_eq!(
        report.get("outside").unwrap().outcome.failure(),
        Some(&PathFailure::GoalBlocked { at: coord(40, 40) })
    );
    assert!(targets[0].has_path());
    assert!(targets[1].path.is_none());
    assert!(targets[2].path.is_none());
}

#[test]
fn test_sparse_lookup_matches_dense_field() {
    let dense = banded_field();
    let sparse: HashMap<GridCoord, f64> = dense.iter().collect();
    let targets = vec![
        Target::new("band", coord(6, 0)),
        Target::new("corner", coord(-8, 9)),
    ];

    let from_dense = MissionPlanner::with_defaults(&dense, coord(0, 0)).plan_all(&targets);
    let from_sparse = MissionPlanner::with_defaults(&sparse, coord(0, 0)).plan_all(&targets);
    assert_eq!(from_dense, from_sparse);
}

#[test]
fn test_parallel_planning_keeps_input_order() {
    let field = cluttered_field();
    let targets: Vec<Target> = (0..10)
        .map(|x| Target::new(format!("col{}", x), coord(19 - x, 9)))
        .collect();
    let config = PlannerConfig::default().with_parallel(true);

    let report = MissionPlanner::new(&field, coord(0, 0), config).plan_all(&targets);
    let names: Vec<&str> = report.plans.iter().map(|p| p.name.as_str()).collect();
    let expected: Vec<String> = (0..10).map(|x| format!("col{}", x)).collect();
    assert_eq!(names, expected);
}
