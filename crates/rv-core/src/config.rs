//! Run configuration for robot comparisons.

use crate::{CoreError, CoreResult};

/// Name of the location every randomly generated task starts from.
pub const DEFAULT_START: &str = "Post Office";

/// Configuration for a batch of robot comparison tasks.
///
/// Typically built from defaults and overridden by the application crate
/// (the `village` demo reads environment variables).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// Number of random tasks each robot is run against.  Default: 100.
    pub task_count: usize,

    /// Parcels per generated task.  Default: 5.
    pub parcel_count: usize,

    /// Master RNG seed.  The same seed always produces identical averages.
    pub seed: u64,

    /// Location name the robot starts from in every generated task.
    pub start_location: String,

    /// Abort a single run after this many turns.  `None` runs until every
    /// parcel is delivered, however long that takes.
    pub turn_limit: Option<u64>,
}

impl CompareConfig {
    /// Reject configurations that cannot produce a meaningful average.
    pub fn validate(&self) -> CoreResult<()> {
        if self.task_count == 0 {
            return Err(CoreError::Config("task_count must be at least 1".into()));
        }
        if self.start_location.trim().is_empty() {
            return Err(CoreError::Config("start_location must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            task_count:     100,
            parcel_count:   5,
            seed:           42,
            start_location: DEFAULT_START.to_string(),
            turn_limit:     None,
        }
    }
}
