//! Read-only environment passed to every strategy call.

use rv_spatial::{Router, VillageGraph};

/// The graph and path finder a robot plans against.
///
/// Built once per comparison and shared immutably by every run.
#[derive(Clone, Copy)]
pub struct RobotContext<'a> {
    pub graph:  &'a VillageGraph,
    pub router: &'a dyn Router,
}

impl<'a> RobotContext<'a> {
    #[inline]
    pub fn new(graph: &'a VillageGraph, router: &'a dyn Router) -> Self {
        Self { graph, router }
    }
}
