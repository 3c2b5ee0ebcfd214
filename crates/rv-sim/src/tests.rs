//! Integration tests for rv-sim.

use rv_behavior::RobotContext;
use rv_core::{CompareConfig, LocationId, SimRng};
use rv_spatial::{BfsRouter, VillageGraph, village_graph};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ctx(graph: &VillageGraph) -> RobotContext<'_> {
    RobotContext::new(graph, &BfsRouter)
}

fn test_config(task_count: usize) -> CompareConfig {
    CompareConfig { task_count, ..CompareConfig::default() }
}

fn ids<const N: usize>(g: &VillageGraph, names: [&str; N]) -> [LocationId; N] {
    names.map(|n| g.lookup(n).unwrap())
}

// ── Runner ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner_tests {
    use rv_behavior::{
        BehaviorError, GoalOrientedRobot, RandomRobot, Robot, RouteRobot, SmartRobot,
    };
    use rv_spatial::{GraphBuilder, Route};
    use rv_world::{Parcel, VillageState};

    use super::*;
    use crate::{PathRecorder, Runner, SimError, run_robot};

    #[test]
    fn two_node_goal_run_takes_one_turn() {
        let g = VillageGraph::from_edges(["X-Y"]).unwrap();
        let [x, y] = ids(&g, ["X", "Y"]);
        let state = VillageState::new(x, vec![Parcel::new(x, y)]);
        let robot = GoalOrientedRobot;
        let turns = run_robot(&ctx(&g), state, &robot, robot.initial_memory(), &mut SimRng::new(0))
            .unwrap();
        assert_eq!(turns, 1);
    }

    #[test]
    fn finished_task_takes_zero_turns() {
        let g = village_graph().unwrap();
        let [po] = ids(&g, ["Post Office"]);
        let state = VillageState::new(po, vec![]);
        let turns = run_robot(&ctx(&g), state, &SmartRobot, Route::empty(), &mut SimRng::new(0))
            .unwrap();
        assert_eq!(turns, 0);
    }

    #[test]
    fn every_robot_finishes_village_tasks() {
        let g = village_graph().unwrap();
        let [po] = ids(&g, ["Post Office"]);
        let route_robot = RouteRobot::mail_route(&g).unwrap();
        let mut rng = SimRng::new(11);

        for _ in 0..20 {
            let task = VillageState::random(&g, po, 5, &mut rng).unwrap();

            let goal = run_robot(&ctx(&g), task.clone(), &GoalOrientedRobot, Route::empty(), &mut rng).unwrap();
            let smart = run_robot(&ctx(&g), task.clone(), &SmartRobot, Route::empty(), &mut rng).unwrap();
            let route = run_robot(&ctx(&g), task.clone(), &route_robot, Route::empty(), &mut rng).unwrap();
            let random = run_robot(&ctx(&g), task, &RandomRobot, (), &mut rng).unwrap();

            assert!(goal > 0 && smart > 0 && random > 0);
            // Two laps of the 13-stop mail route visit every pickup and address.
            assert!(route <= 26, "route robot took {route} turns");
        }
    }

    #[test]
    fn path_recorder_sees_every_stop() {
        let g = VillageGraph::from_edges(["A-B", "B-C"]).unwrap();
        let [a, b, c] = ids(&g, ["A", "B", "C"]);
        let state = VillageState::new(a, vec![Parcel::new(a, c)]);
        let mut recorder = PathRecorder::default();
        let turns = Runner::new(ctx(&g))
            .run(state, &GoalOrientedRobot, Route::empty(), &mut SimRng::new(0), &mut recorder)
            .unwrap();
        assert_eq!(turns, 2);
        assert_eq!(recorder.path, vec![a, b, c]);
    }

    #[test]
    fn invalid_direction_costs_a_turn() {
        let g = VillageGraph::from_edges(["A-B", "B-C"]).unwrap();
        let [a, b, c] = ids(&g, ["A", "B", "C"]);
        // First stop C is not adjacent to A, so the robot wastes a turn.
        let robot = RouteRobot::new(Route::new(vec![c, b, c]));
        let state = VillageState::new(a, vec![Parcel::new(a, b)]);
        let turns = run_robot(&ctx(&g), state, &robot, Route::empty(), &mut SimRng::new(0))
            .unwrap();
        assert_eq!(turns, 2);
    }

    #[test]
    fn turn_limit_stops_hopeless_runs() {
        let g = VillageGraph::from_edges(["X-Y", "Y-Z"]).unwrap();
        let [x, y, z] = ids(&g, ["X", "Y", "Z"]);
        // Shuttles X <-> Y forever; the parcel waits at Z.
        let robot = RouteRobot::new(Route::new(vec![y, x]));
        let state = VillageState::new(x, vec![Parcel::new(z, x)]);
        let err = Runner::new(ctx(&g))
            .with_turn_limit(Some(10))
            .run(state, &robot, Route::empty(), &mut SimRng::new(0), &mut crate::NoopObserver)
            .unwrap_err();
        assert!(matches!(err, SimError::TurnLimit { robot: "route", limit: 10 }));
    }

    #[test]
    fn robot_errors_propagate() {
        let mut b = GraphBuilder::new();
        b.add_road("X", "Y");
        let lone = b.add_location("Lone");
        let g = b.build();
        let [x] = ids(&g, ["X"]);
        let state = VillageState::new(x, vec![Parcel::new(lone, x)]);
        let err = run_robot(&ctx(&g), state, &GoalOrientedRobot, Route::empty(), &mut SimRng::new(0))
            .unwrap_err();
        assert!(matches!(err, SimError::Behavior(BehaviorError::Routing(_))));
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compare_tests {
    use rv_behavior::{AnyRobot, GoalOrientedRobot, Robot, RobotKind, RouteRobot, SmartRobot};

    use super::*;
    use crate::{SimError, compare_robots};

    #[test]
    fn averages_are_positive_and_consistent() {
        let g = village_graph().unwrap();
        let cfg = test_config(100);
        let result = compare_robots(
            &ctx(&g), &cfg,
            &SmartRobot, SmartRobot.initial_memory(),
            &GoalOrientedRobot, GoalOrientedRobot.initial_memory(),
            &mut SimRng::new(cfg.seed),
        )
        .unwrap();
        assert_eq!(result.tasks, 100);
        assert!(result.robot_a > 0.0 && result.robot_b > 0.0);
        assert_eq!(result.robot_a, result.total_a as f64 / 100.0);
        assert_eq!(result.robot_b, result.total_b as f64 / 100.0);
    }

    #[test]
    fn same_seed_same_result() {
        let g = village_graph().unwrap();
        let cfg = test_config(25);
        let a = AnyRobot::from_kind(RobotKind::Random, &g).unwrap();
        let b = AnyRobot::from_kind(RobotKind::Smart, &g).unwrap();
        let run = || {
            compare_robots(
                &ctx(&g), &cfg,
                &a, a.initial_memory(),
                &b, b.initial_memory(),
                &mut SimRng::new(5),
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn totals_match_hand_built_tasks_run_in_reverse() {
        use rv_world::VillageState;

        use crate::run_robot;

        let g = village_graph().unwrap();
        let cfg = test_config(30);
        let a = AnyRobot::from_kind(RobotKind::Random, &g).unwrap();
        let b = AnyRobot::from_kind(RobotKind::Smart, &g).unwrap();

        let result = compare_robots(
            &ctx(&g), &cfg,
            &a, a.initial_memory(),
            &b, b.initial_memory(),
            &mut SimRng::new(8),
        )
        .unwrap();

        // Same draws as the harness: task, then one child stream per robot.
        let mut rng = SimRng::new(8);
        let [po] = ids(&g, ["Post Office"]);
        let mut tasks = Vec::new();
        for i in 0..cfg.task_count as u64 {
            let state = VillageState::random(&g, po, cfg.parcel_count, &mut rng).unwrap();
            tasks.push((state, rng.child(2 * i), rng.child(2 * i + 1)));
        }

        let (mut total_a, mut total_b) = (0, 0);
        for (state, mut rng_a, mut rng_b) in tasks.into_iter().rev() {
            total_a += run_robot(&ctx(&g), state.clone(), &a, a.initial_memory(), &mut rng_a).unwrap();
            total_b += run_robot(&ctx(&g), state, &b, b.initial_memory(), &mut rng_b).unwrap();
        }
        assert_eq!((result.total_a, result.total_b), (total_a, total_b));
    }

    #[test]
    fn seed_five_totals_are_pinned() {
        let g = village_graph().unwrap();
        let cfg = test_config(50);
        let a = AnyRobot::from_kind(RobotKind::Random, &g).unwrap();
        let b = AnyRobot::from_kind(RobotKind::Smart, &g).unwrap();
        let result = compare_robots(
            &ctx(&g), &cfg,
            &a, a.initial_memory(),
            &b, b.initial_memory(),
            &mut SimRng::new(5),
        )
        .unwrap();
        // Holds with and without the `parallel` feature.
        assert_eq!((result.total_a, result.total_b), (4053, 626));
    }

    #[test]
    fn identical_robots_tie() {
        let g = village_graph().unwrap();
        let cfg = test_config(30);
        let result = compare_robots(
            &ctx(&g), &cfg,
            &GoalOrientedRobot, GoalOrientedRobot.initial_memory(),
            &GoalOrientedRobot, GoalOrientedRobot.initial_memory(),
            &mut SimRng::new(1),
        )
        .unwrap();
        assert_eq!(result.total_a, result.total_b);
    }

    #[test]
    fn route_robot_bounded_by_two_laps() {
        let g = village_graph().unwrap();
        let cfg = test_config(40);
        let route = RouteRobot::mail_route(&g).unwrap();
        let result = compare_robots(
            &ctx(&g), &cfg,
            &route, route.initial_memory(),
            &SmartRobot, SmartRobot.initial_memory(),
            &mut SimRng::new(2),
        )
        .unwrap();
        assert!(result.robot_a <= 26.0);
    }

    #[test]
    fn zero_tasks_rejected() {
        let g = village_graph().unwrap();
        let err = compare_robots(
            &ctx(&g), &test_config(0),
            &SmartRobot, SmartRobot.initial_memory(),
            &SmartRobot, SmartRobot.initial_memory(),
            &mut SimRng::new(0),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Core(_)));
    }

    #[test]
    fn unknown_start_rejected() {
        let g = VillageGraph::from_edges(["X-Y"]).unwrap();
        let err = compare_robots(
            &ctx(&g), &test_config(3),
            &SmartRobot, SmartRobot.initial_memory(),
            &SmartRobot, SmartRobot.initial_memory(),
            &mut SimRng::new(0),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Spatial(_)));
    }

    #[test]
    fn custom_start_location() {
        let g = VillageGraph::from_edges(["X-Y"]).unwrap();
        let cfg = CompareConfig {
            task_count:     10,
            parcel_count:   1,
            start_location: "X".into(),
            ..CompareConfig::default()
        };
        let result = compare_robots(
            &ctx(&g), &cfg,
            &GoalOrientedRobot, GoalOrientedRobot.initial_memory(),
            &SmartRobot, SmartRobot.initial_memory(),
            &mut SimRng::new(0),
        )
        .unwrap();
        // Parcel X→Y takes 1 turn; Y→X takes 2 (walk over, walk back).
        assert!(result.robot_a >= 1.0 && result.robot_a <= 2.0);
        assert_eq!(result.robot_a, result.robot_b);
    }
}
