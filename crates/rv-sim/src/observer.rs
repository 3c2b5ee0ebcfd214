//! Run observer trait for progress reporting and data collection.

use rv_core::LocationId;
use rv_world::VillageState;

/// Callbacks invoked by [`Runner::run`][crate::Runner::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — counting parcels delivered per turn
///
/// ```rust,ignore
/// struct Deliveries { last: usize, per_turn: Vec<usize> }
///
/// impl RunObserver for Deliveries {
///     fn on_turn(&mut self, _turn: u64, _dir: LocationId, state: &VillageState) {
///         self.per_turn.push(self.last - state.parcels().len());
///         self.last = state.parcels().len();
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before the first turn.
    fn on_run_start(&mut self, _robot: &'static str, _state: &VillageState) {}

    /// Called after each turn with the direction the robot asked for and the
    /// resulting state.  `turn` counts from 1.
    fn on_turn(&mut self, _turn: u64, _direction: LocationId, _state: &VillageState) {}

    /// Called once when every parcel has been delivered.
    fn on_run_end(&mut self, _robot: &'static str, _turns: u64) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Records every location the robot occupied, starting position included.
#[derive(Debug, Default, Clone)]
pub struct PathRecorder {
    pub path: Vec<LocationId>,
}

impl RunObserver for PathRecorder {
    fn on_run_start(&mut self, _robot: &'static str, state: &VillageState) {
        self.path.clear();
        self.path.push(state.place());
    }

    fn on_turn(&mut self, _turn: u64, _direction: LocationId, state: &VillageState) {
        self.path.push(state.place());
    }
}
