//! The immutable world state and its transition function.

use rv_core::{CoreError, CoreResult, LocationId, SimRng};
use rv_spatial::VillageGraph;

use crate::Parcel;

/// Where the robot is and which parcels are still undelivered.
///
/// `VillageState` is a value: [`move_to`](Self::move_to) never mutates, it
/// returns the successor state.  Two states compare equal when robot place and
/// parcel sequence match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageState {
    place:   LocationId,
    parcels: Vec<Parcel>,
}

impl VillageState {
    /// Build a state.  Parcels that are already delivered are dropped.
    pub fn new(place: LocationId, parcels: Vec<Parcel>) -> Self {
        let parcels = parcels.into_iter().filter(|p| !p.is_delivered()).collect();
        Self { place, parcels }
    }

    #[inline]
    pub fn place(&self) -> LocationId {
        self.place
    }

    #[inline]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// `true` once every parcel has been delivered.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels at the robot's location, i.e. the ones it is carrying.
    pub fn carried(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place == self.place)
    }

    /// Drive the robot along one road to `destination`.
    ///
    /// If no road connects the current place to `destination` the robot stays
    /// put and an equal state is returned.  Otherwise carried parcels travel
    /// with it and any parcel that reaches its address is dropped.
    pub fn move_to(&self, graph: &VillageGraph, destination: LocationId) -> VillageState {
        if !graph.is_neighbor(self.place, destination) {
            return self.clone();
        }
        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place != self.place {
                    *p
                } else {
                    Parcel::new(destination, p.address)
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();
        VillageState { place: destination, parcels }
    }

    /// A random task: `parcel_count` parcels with the robot at `start`.
    ///
    /// Each parcel's address is uniform over all locations; its place is
    /// uniform over all locations and resampled until it differs from the
    /// address.  Parcels may share places and addresses with each other.
    pub fn random(
        graph:        &VillageGraph,
        start:        LocationId,
        parcel_count: usize,
        rng:          &mut SimRng,
    ) -> CoreResult<VillageState> {
        if !graph.contains(start) {
            return Err(CoreError::Config(format!("start {start} is not in the graph")));
        }
        let locations: Vec<LocationId> = graph.locations().collect();
        if parcel_count > 0 && locations.len() < 2 {
            return Err(CoreError::Config(format!(
                "random parcels need at least 2 locations, graph has {}",
                locations.len()
            )));
        }

        let mut parcels = Vec::with_capacity(parcel_count);
        for _ in 0..parcel_count {
            let address = locations[rng.gen_range(0..locations.len())];
            let place = loop {
                let candidate = locations[rng.gen_range(0..locations.len())];
                if candidate != address {
                    break candidate;
                }
            };
            parcels.push(Parcel::new(place, address));
        }
        Ok(VillageState { place: start, parcels })
    }
}
