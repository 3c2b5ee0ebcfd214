//! The run loop: one robot, one task, until every parcel is delivered.

use tracing::{debug, trace};

use rv_behavior::{Robot, RobotContext};
use rv_core::SimRng;
use rv_world::VillageState;

use crate::{NoopObserver, RunObserver, SimError, SimResult};

/// Drives a robot over a task, counting turns.
///
/// A turn is one [`Robot::act`] call followed by one
/// [`VillageState::move_to`].  Invalid directions still cost a turn; the
/// robot just stays put.
///
/// There is no turn limit unless one is set with
/// [`with_turn_limit`](Self::with_turn_limit): a robot that can never finish
/// keeps the loop spinning.
#[derive(Clone, Copy)]
pub struct Runner<'a> {
    ctx:        RobotContext<'a>,
    turn_limit: Option<u64>,
}

impl<'a> Runner<'a> {
    pub fn new(ctx: RobotContext<'a>) -> Self {
        Self { ctx, turn_limit: None }
    }

    /// Fail with [`SimError::TurnLimit`] instead of playing a turn past
    /// `limit`.
    pub fn with_turn_limit(mut self, limit: Option<u64>) -> Self {
        self.turn_limit = limit;
        self
    }

    /// Play `robot` from `state` until no parcels remain and return the
    /// number of turns taken.  A task with no parcels takes zero turns.
    pub fn run<R: Robot, O: RunObserver>(
        &self,
        mut state:  VillageState,
        robot:      &R,
        mut memory: R::Memory,
        rng:        &mut SimRng,
        observer:   &mut O,
    ) -> SimResult<u64> {
        observer.on_run_start(robot.name(), &state);

        let mut turn: u64 = 0;
        while !state.is_done() {
            if let Some(limit) = self.turn_limit.filter(|&limit| turn >= limit) {
                return Err(SimError::TurnLimit { robot: robot.name(), limit });
            }

            let action = robot.act(&state, memory, &self.ctx, rng)?;
            state = state.move_to(self.ctx.graph, action.direction);
            memory = action.memory;
            turn += 1;

            trace!(
                robot = robot.name(),
                turn,
                to = %self.ctx.graph.label(state.place()),
                parcels = state.parcels().len(),
                "turn"
            );
            observer.on_turn(turn, action.direction, &state);
        }

        debug!(robot = robot.name(), turns = turn, "run complete");
        observer.on_run_end(robot.name(), turn);
        Ok(turn)
    }
}

/// Run `robot` to completion without a turn limit or observer.
pub fn run_robot<R: Robot>(
    ctx:    &RobotContext<'_>,
    state:  VillageState,
    robot:  &R,
    memory: R::Memory,
    rng:    &mut SimRng,
) -> SimResult<u64> {
    Runner::new(*ctx).run(state, robot, memory, rng, &mut NoopObserver)
}
