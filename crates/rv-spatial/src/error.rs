//! Spatial-subsystem error type.

use thiserror::Error;

use rv_core::LocationId;

/// Errors produced by `rv-spatial`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    /// An edge descriptor did not split into exactly two non-empty names.
    #[error("invalid edge descriptor {0:?}: expected \"From-To\"")]
    InvalidEdgeFormat(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("location {0} not found in graph")]
    LocationNotFound(LocationId),

    #[error("unknown location name {0:?}")]
    UnknownLocation(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
