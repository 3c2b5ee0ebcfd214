//! A robot that handles one parcel at a time.

use rv_core::SimRng;
use rv_spatial::Route;
use rv_world::VillageState;

use crate::{Action, BehaviorError, BehaviorResult, Robot, RobotContext};

/// Works through the parcel list in order.
///
/// When its planned route runs out it looks at the first remaining parcel:
/// if the parcel is elsewhere it plans a route to pick it up, otherwise it
/// plans a route to the parcel's address.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalOrientedRobot;

impl Robot for GoalOrientedRobot {
    /// Remaining stops of the current plan.
    type Memory = Route;

    fn name(&self) -> &'static str {
        "goal"
    }

    fn initial_memory(&self) -> Route {
        Route::empty()
    }

    fn act(
        &self,
        state:  &VillageState,
        memory: Route,
        ctx:    &RobotContext<'_>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Action<Route>> {
        let route = if memory.is_empty() {
            let parcel = state.parcels().first().ok_or(BehaviorError::NoParcels)?;
            let target = if parcel.place != state.place() {
                parcel.place
            } else {
                parcel.address
            };
            ctx.router.route(ctx.graph, state.place(), target)?
        } else {
            memory
        };
        let (direction, rest) = route.next_step().ok_or(BehaviorError::EmptyRoute)?;
        Ok(Action::new(direction, rest))
    }
}
