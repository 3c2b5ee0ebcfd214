//! Parcels waiting for pickup or riding with the robot.

use rv_core::LocationId;

/// A parcel at `place` that must end up at `address`.
///
/// A parcel whose `place` equals its `address` has been delivered; such
/// parcels never appear in a [`VillageState`][crate::VillageState].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parcel {
    pub place:   LocationId,
    pub address: LocationId,
}

impl Parcel {
    #[inline]
    pub fn new(place: LocationId, address: LocationId) -> Self {
        Self { place, address }
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}
