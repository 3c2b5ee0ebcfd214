//! The `Robot` trait — the extension point for delivery strategies.

use rv_core::SimRng;
use rv_world::VillageState;

use crate::{Action, BehaviorResult, RobotContext};

/// A delivery strategy.
///
/// Each turn the runner calls [`act`](Self::act) with the current state and
/// the memory returned by the previous call, moves the robot, and keeps the
/// new memory.  Strategies hold no mutable state of their own; everything
/// that changes between turns lives in `Memory`.
///
/// # Thread safety
///
/// With the `parallel` feature of `rv-sim`, one robot value is shared by
/// every comparison task, so implementations must be `Send + Sync`.
pub trait Robot: Send + Sync {
    /// Per-run state threaded through consecutive turns.
    type Memory: Clone + Send;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Memory to start a fresh run with.
    fn initial_memory(&self) -> Self::Memory;

    /// Choose the next road to take.
    fn act(
        &self,
        state:  &VillageState,
        memory: Self::Memory,
        ctx:    &RobotContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Action<Self::Memory>>;
}
