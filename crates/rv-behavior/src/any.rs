//! Runtime-selected robots.
//!
//! The generic runner is monomorphised per strategy.  When the strategy is
//! chosen at runtime (from a name in configuration) use [`AnyRobot`], whose
//! memory is the tagged [`RobotMemory`].

use std::fmt;
use std::str::FromStr;

use rv_core::SimRng;
use rv_spatial::{Route, VillageGraph};
use rv_world::VillageState;

use crate::{
    Action, BehaviorError, BehaviorResult, GoalOrientedRobot, RandomRobot, Robot, RobotContext,
    RouteRobot, SmartRobot,
};

/// The built-in strategies, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotKind {
    Random,
    Route,
    Goal,
    Smart,
}

impl RobotKind {
    pub const ALL: [RobotKind; 4] = [Self::Random, Self::Route, Self::Goal, Self::Smart];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Route  => "route",
            Self::Goal   => "goal",
            Self::Smart  => "smart",
        }
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| BehaviorError::UnknownRobot(s.to_string()))
    }
}

/// Memory for any built-in strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RobotMemory {
    #[default]
    None,
    Route(Route),
}

impl RobotMemory {
    /// The carried route; `None` counts as an empty one.
    fn into_route(self) -> Route {
        match self {
            Self::None     => Route::empty(),
            Self::Route(r) => r,
        }
    }
}

/// One of the built-in strategies.
#[derive(Debug, Clone)]
pub enum AnyRobot {
    Random(RandomRobot),
    Route(RouteRobot),
    Goal(GoalOrientedRobot),
    Smart(SmartRobot),
}

impl AnyRobot {
    /// Build the strategy named by `kind`.  The route robot drives the
    /// village mail route, so `graph` must contain its locations.
    pub fn from_kind(kind: RobotKind, graph: &VillageGraph) -> BehaviorResult<Self> {
        Ok(match kind {
            RobotKind::Random => Self::Random(RandomRobot),
            RobotKind::Route  => Self::Route(RouteRobot::mail_route(graph)?),
            RobotKind::Goal   => Self::Goal(GoalOrientedRobot),
            RobotKind::Smart  => Self::Smart(SmartRobot),
        })
    }

    pub fn kind(&self) -> RobotKind {
        match self {
            Self::Random(_) => RobotKind::Random,
            Self::Route(_)  => RobotKind::Route,
            Self::Goal(_)   => RobotKind::Goal,
            Self::Smart(_)  => RobotKind::Smart,
        }
    }
}

impl Robot for AnyRobot {
    type Memory = RobotMemory;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn initial_memory(&self) -> RobotMemory {
        match self {
            Self::Random(_) => RobotMemory::None,
            _               => RobotMemory::Route(Route::empty()),
        }
    }

    fn act(
        &self,
        state:  &VillageState,
        memory: RobotMemory,
        ctx:    &RobotContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Action<RobotMemory>> {
        let routed = |a: Action<Route>| Action::new(a.direction, RobotMemory::Route(a.memory));
        match self {
            Self::Random(r) => {
                let a = r.act(state, (), ctx, rng)?;
                Ok(Action::new(a.direction, RobotMemory::None))
            }
            Self::Route(r) => r.act(state, memory.into_route(), ctx, rng).map(routed),
            Self::Goal(r)  => r.act(state, memory.into_route(), ctx, rng).map(routed),
            Self::Smart(r) => r.act(state, memory.into_route(), ctx, rng).map(routed),
        }
    }
}
