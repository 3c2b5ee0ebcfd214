//! A robot that plans against every parcel.

use rv_core::SimRng;
use rv_spatial::Route;
use rv_world::VillageState;

use crate::{Action, BehaviorError, BehaviorResult, Robot, RobotContext};

/// What a candidate route is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errand {
    /// Go to a parcel that is not at the robot's location.
    Pickup,
    /// Take a carried parcel to its address.
    Deliver,
}

/// One candidate considered by [`SmartRobot::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub errand: Errand,
    pub route:  Route,
}

/// Plans a route for every parcel and takes the best one.
///
/// Pickups always win over deliveries: if any parcel still needs collecting,
/// the shortest pickup route is chosen even when some delivery is closer.
/// Only once every parcel is on board does it pick the shortest delivery.
/// Among routes of equal length the first parcel in list order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartRobot;

impl SmartRobot {
    /// Candidate routes, one per parcel, in parcel order.
    pub fn candidates(
        &self,
        state: &VillageState,
        ctx:   &RobotContext<'_>,
    ) -> BehaviorResult<Vec<Candidate>> {
        state
            .parcels()
            .iter()
            .map(|parcel| -> BehaviorResult<Candidate> {
                let (errand, target) = if parcel.place != state.place() {
                    (Errand::Pickup, parcel.place)
                } else {
                    (Errand::Deliver, parcel.address)
                };
                let route = ctx.router.route(ctx.graph, state.place(), target)?;
                Ok(Candidate { errand, route })
            })
            .collect()
    }

    /// The route the robot commits to when its memory is empty.
    pub fn plan(&self, state: &VillageState, ctx: &RobotContext<'_>) -> BehaviorResult<Route> {
        let candidates = self.candidates(state, ctx)?;
        let has_pickup = candidates.iter().any(|c| c.errand == Errand::Pickup);

        // `min_by_key` keeps the first of several equal minima.
        candidates
            .into_iter()
            .filter(|c| !has_pickup || c.errand == Errand::Pickup)
            .min_by_key(|c| c.route.len())
            .map(|c| c.route)
            .ok_or(BehaviorError::NoParcels)
    }
}

impl Robot for SmartRobot {
    /// Remaining stops of the current plan.
    type Memory = Route;

    fn name(&self) -> &'static str {
        "smart"
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
        let route = if memory.is_empty() { self.plan(state, ctx)? } else { memory };
        let (direction, rest) = route.next_step().ok_or(BehaviorError::EmptyRoute)?;
        Ok(Action::new(direction, rest))
    }
}
