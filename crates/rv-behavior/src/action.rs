//! Robot actions — what a strategy asks the runner to do this turn.

use rv_core::LocationId;

/// The outcome of one [`Robot::act`][crate::Robot::act] call.
///
/// The runner moves the robot toward `direction` and hands `memory` back to
/// the strategy on the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<M> {
    pub direction: LocationId,
    pub memory:    M,
}

impl<M> Action<M> {
    #[inline]
    pub fn new(direction: LocationId, memory: M) -> Self {
        Self { direction, memory }
    }
}
