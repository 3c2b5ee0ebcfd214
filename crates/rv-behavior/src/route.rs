//! A robot that drives a fixed loop.

use rv_core::SimRng;
use rv_spatial::{Route, SpatialResult, VillageGraph, mail_route};
use rv_world::VillageState;

use crate::{Action, BehaviorError, BehaviorResult, Robot, RobotContext};

/// Follows a fixed route, starting over when it runs out.
///
/// Open loop: parcel positions are ignored.  A route that returns to its
/// starting point and visits every location guarantees delivery within two
/// laps.
#[derive(Debug, Clone)]
pub struct RouteRobot {
    route: Route,
}

impl RouteRobot {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    /// The village mail route, which starts and ends at the post office.
    pub fn mail_route(graph: &VillageGraph) -> SpatialResult<Self> {
        Ok(Self::new(mail_route(graph)?))
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

impl Robot for RouteRobot {
    /// Stops left on the current lap.
    type Memory = Route;

    fn name(&self) -> &'static str {
        "route"
    }

    fn initial_memory(&self) -> Route {
        Route::empty()
    }

    fn act(
        &self,
        _state: &VillageState,
        memory: Route,
        _ctx:   &RobotContext<'_>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Action<Route>> {
        let remaining = if memory.is_empty() { self.route.clone() } else { memory };
        let (direction, rest) = remaining.next_step().ok_or(BehaviorError::EmptyRoute)?;
        Ok(Action::new(direction, rest))
    }
}
