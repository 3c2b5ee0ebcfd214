//! Head-to-head robot comparison over shared random tasks.

use tracing::info;

use rv_behavior::{Robot, RobotContext};
use rv_core::{CompareConfig, SimRng};
use rv_world::VillageState;

use crate::{NoopObserver, Runner, SimResult};

/// Mean turns per task for two robots over the same task list.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub robot_a: f64,
    pub robot_b: f64,
    pub total_a: u64,
    pub total_b: u64,
    pub tasks:   usize,
}

/// One generated task plus the RNG each robot will use on it.
struct Task {
    state: VillageState,
    rng_a: SimRng,
    rng_b: SimRng,
}

/// Run both robots against `config.task_count` random tasks.
///
/// Tasks are drawn from `rng` before any robot moves.  Both robots see each
/// task's identical initial state, starting from their given memory, and each
/// (task, robot) pair gets its own child RNG.  With the `parallel` feature
/// the tasks run on Rayon's pool; the result is the same either way.
pub fn compare_robots<A: Robot, B: Robot>(
    ctx:      &RobotContext<'_>,
    config:   &CompareConfig,
    robot_a:  &A,
    memory_a: A::Memory,
    robot_b:  &B,
    memory_b: B::Memory,
    rng:      &mut SimRng,
) -> SimResult<Comparison>
where
    A::Memory: Sync,
    B::Memory: Sync,
{
    config.validate()?;
    let start = ctx.graph.lookup(&config.start_location)?;

    let mut tasks = Vec::with_capacity(config.task_count);
    for i in 0..config.task_count as u64 {
        let state = VillageState::random(ctx.graph, start, config.parcel_count, rng)?;
        tasks.push(Task {
            state,
            rng_a: rng.child(2 * i),
            rng_b: rng.child(2 * i + 1),
        });
    }

    let runner = Runner::new(*ctx).with_turn_limit(config.turn_limit);
    let run_task = |task: Task| -> SimResult<(u64, u64)> {
        let Task { state, mut rng_a, mut rng_b } = task;
        let a = runner.run(state.clone(), robot_a, memory_a.clone(), &mut rng_a, &mut NoopObserver)?;
        let b = runner.run(state, robot_b, memory_b.clone(), &mut rng_b, &mut NoopObserver)?;
        Ok((a, b))
    };

    #[cfg(feature = "parallel")]
    let turns: Vec<(u64, u64)> = {
        use rayon::prelude::*;
        tasks.into_par_iter().map(run_task).collect::<SimResult<_>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let turns: Vec<(u64, u64)> = tasks.into_iter().map(run_task).collect::<SimResult<_>>()?;

    let (total_a, total_b) = turns
        .iter()
        .fold((0u64, 0u64), |(sa, sb), &(a, b)| (sa + a, sb + b));
    let n = config.task_count as f64;
    let comparison = Comparison {
        robot_a: total_a as f64 / n,
        robot_b: total_b as f64 / n,
        total_a,
        total_b,
        tasks: config.task_count,
    };

    info!(
        robot_a = robot_a.name(),
        avg_a = comparison.robot_a,
        robot_b = robot_b.name(),
        avg_b = comparison.robot_b,
        tasks = comparison.tasks,
        "comparison complete"
    );
    Ok(comparison)
}
