//! A robot that wanders.

use rv_core::SimRng;
use rv_world::VillageState;

use crate::{Action, BehaviorError, BehaviorResult, Robot, RobotContext};

/// Takes a uniformly random road every turn.  Keeps no memory.
///
/// Useful as a baseline: it always finishes on a connected graph, just
/// slowly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRobot;

impl Robot for RandomRobot {
    type Memory = ();

    fn name(&self) -> &'static str {
        "random"
    }

    fn initial_memory(&self) {}

    fn act(
        &self,
        state:  &VillageState,
        _memory: (),
        ctx:    &RobotContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Action<()>> {
        let direction = rng
            .choose(ctx.graph.neighbors(state.place()))
            .copied()
            .ok_or(BehaviorError::Stuck(state.place()))?;
        Ok(Action::new(direction, ()))
    }
}
