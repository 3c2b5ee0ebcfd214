use thiserror::Error;

use rv_core::LocationId;
use rv_spatial::SpatialError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("no parcels left to plan for")]
    NoParcels,

    #[error("planned route is empty")]
    EmptyRoute,

    #[error("no road leaves {0}")]
    Stuck(LocationId),

    #[error("unknown robot {0:?} (expected random, route, goal, or smart)")]
    UnknownRobot(String),

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
