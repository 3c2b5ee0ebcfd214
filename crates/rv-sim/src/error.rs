use rv_behavior::BehaviorError;
use rv_core::CoreError;
use rv_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{robot} robot gave up after {limit} turns")]
    TurnLimit {
        robot: &'static str,
        limit: u64,
    },

    #[error("robot failed: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("graph error: {0}")]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
