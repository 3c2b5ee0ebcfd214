//! The fixed village: its road list and the postal robot's mail route.

use crate::{Route, SpatialResult, VillageGraph};

/// Every road in the village, as `"From-To"` descriptors.
pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",   "Alice's House-Cabin",
    "Alice's House-Post Office",   "Bob's House-Town Hall",
    "Daria's House-Ernie's House", "Daria's House-Town Hall",
    "Ernie's House-Grete's House", "Grete's House-Farm",
    "Grete's House-Shop",          "Marketplace-Farm",
    "Marketplace-Post Office",     "Marketplace-Shop",
    "Marketplace-Town Hall",       "Shop-Town Hall",
];

/// A loop from the post office that passes every location.
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House", "Cabin", "Alice's House", "Bob's House",
    "Town Hall", "Daria's House", "Ernie's House",
    "Grete's House", "Shop", "Grete's House", "Farm",
    "Marketplace", "Post Office",
];

/// Build the village road graph.
pub fn village_graph() -> SpatialResult<VillageGraph> {
    VillageGraph::from_edges(ROADS)
}

/// The mail route resolved against `graph`.
pub fn mail_route(graph: &VillageGraph) -> SpatialResult<Route> {
    Route::from_names(graph, &MAIL_ROUTE)
}
