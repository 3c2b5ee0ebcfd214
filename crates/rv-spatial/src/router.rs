//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! Robots plan through the [`Router`] trait, so a test or an experiment can
//! swap in another path finder without touching the strategies.  The default
//! [`BfsRouter`] returns the shortest route by road count.

use std::collections::VecDeque;

use rv_core::LocationId;

use crate::{SpatialError, SpatialResult, VillageGraph};

// ── Route ─────────────────────────────────────────────────────────────────────

/// Ordered stops from (but excluding) the start location to the goal.
///
/// An empty route means "already there".  Robots also use a `Route` as their
/// memory: [`next_step`](Self::next_step) splits off the first stop and hands
/// back the remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    stops: VecDeque<LocationId>,
}

impl Route {
    pub fn new(stops: Vec<LocationId>) -> Self {
        Self { stops: stops.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve a list of location names against `graph`.
    pub fn from_names<S: AsRef<str>>(graph: &VillageGraph, names: &[S]) -> SpatialResult<Self> {
        names
            .iter()
            .map(|n| graph.lookup(n.as_ref()))
            .collect()
    }

    /// Number of roads to travel.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` if the start and goal are the same location.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Option<LocationId> {
        self.stops.front().copied()
    }

    /// The goal, or `None` for an empty route.
    pub fn destination(&self) -> Option<LocationId> {
        self.stops.back().copied()
    }

    /// Split off the first stop.  Returns `None` for an empty route.
    pub fn next_step(mut self) -> Option<(LocationId, Route)> {
        let first = self.stops.pop_front()?;
        Some((first, self))
    }

    pub fn iter(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.stops.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<LocationId> {
        self.stops.iter().copied().collect()
    }
}

impl FromIterator<LocationId> for Route {
    fn from_iter<I: IntoIterator<Item = LocationId>>(iter: I) -> Self {
        Self { stops: iter.into_iter().collect() }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable path finder.
///
/// Implementations must be `Send + Sync` so a single router can be shared by
/// comparison tasks running on a thread pool.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` yields an empty route.  An unreachable target is
    /// [`SpatialError::NoRoute`].
    fn route(
        &self,
        graph: &VillageGraph,
        from:  LocationId,
        to:    LocationId,
    ) -> SpatialResult<Route>;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over road count.  See [`find_route`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(
        &self,
        graph: &VillageGraph,
        from:  LocationId,
        to:    LocationId,
    ) -> SpatialResult<Route> {
        find_route(graph, from, to)
    }
}

/// Shortest route (by number of roads) from `from` to `to`.
///
/// The worklist grows in non-decreasing distance order.  Each entry's
/// neighbors are scanned in road insertion order; the first neighbor equal to
/// `to` ends the search, so among equally short routes the one found first in
/// that order wins.  A location is enqueued at most once.
pub fn find_route(
    graph: &VillageGraph,
    from:  LocationId,
    to:    LocationId,
) -> SpatialResult<Route> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(SpatialError::LocationNotFound(id));
        }
    }
    if from == to {
        return Ok(Route::empty());
    }

    // (location, route so far).  `queued[n]` = some entry already has node n.
    let mut work: Vec<(LocationId, Vec<LocationId>)> = vec![(from, Vec::new())];
    let mut queued = vec![false; graph.location_count()];
    queued[from.index()] = true;

    let mut i = 0;
    while i < work.len() {
        let (at, route) = work[i].clone();
        for &place in graph.neighbors(at) {
            if place == to {
                let mut found = route;
                found.push(place);
                return Ok(Route::new(found));
            }
            if !queued[place.index()] {
                queued[place.index()] = true;
                let mut next = route.clone();
                next.push(place);
                work.push((place, next));
            }
        }
        i += 1;
    }

    Err(SpatialError::NoRoute { from, to })
}
