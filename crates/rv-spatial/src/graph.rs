//! Village road graph and builder.
//!
//! # Data layout
//!
//! Location names are interned to dense [`LocationId`]s in order of first
//! appearance.  Adjacency uses **Compressed Sparse Row (CSR)** format: the
//! neighbors of location `n` occupy
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Roads are undirected, so each `"A-B"` descriptor contributes two directed
//! entries.  The builder sorts entries by source with a **stable** sort, so
//! each neighbor list keeps the order in which roads were added.  BFS tie
//! breaking depends on that order.
//!
//! Duplicate roads and self-loops are stored as given; a duplicated road
//! shows up twice in both endpoints' neighbor lists.

use rustc_hash::FxHashMap;

use rv_core::LocationId;

use crate::{SpatialError, SpatialResult};

/// Separator between the two location names of an edge descriptor.
const EDGE_SEPARATOR: char = '-';

// ── VillageGraph ──────────────────────────────────────────────────────────────

/// Undirected road graph over named locations.
///
/// Immutable once built; share it by reference.  Construct with
/// [`VillageGraph::from_edges`] or [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct VillageGraph {
    /// Location name, indexed by `LocationId`.
    names: Vec<String>,

    /// Reverse lookup from name to id.
    index: FxHashMap<String, LocationId>,

    /// CSR row pointer.  Length = `location_count + 1`.
    node_out_start: Vec<u32>,

    /// Neighbor of each directed entry, grouped by source location.
    edge_to: Vec<LocationId>,
}

impl VillageGraph {
    /// Build a graph from `"From-To"` descriptors.
    ///
    /// ```
    /// use rv_spatial::VillageGraph;
    ///
    /// let g = VillageGraph::from_edges(["X-Y", "Y-Z"]).unwrap();
    /// let y = g.lookup("Y").unwrap();
    /// assert_eq!(g.neighbors(y).len(), 2);
    /// ```
    pub fn from_edges<I, S>(edges: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut b = GraphBuilder::new();
        for edge in edges {
            b.add_edge_descriptor(edge.as_ref())?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed adjacency entries (twice the road count).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `true` if `id` names a location of this graph.
    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.names.len()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Neighbors of `location` in road insertion order.
    ///
    /// Unknown ids have no neighbors.
    #[inline]
    pub fn neighbors(&self, location: LocationId) -> &[LocationId] {
        if !self.contains(location) {
            return &[];
        }
        let start = self.node_out_start[location.index()] as usize;
        let end   = self.node_out_start[location.index() + 1] as usize;
        &self.edge_to[start..end]
    }

    /// `true` if a road connects `from` directly to `to`.
    #[inline]
    pub fn is_neighbor(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// All location ids, in interning order.
    pub fn locations(&self) -> impl ExactSizeIterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(|i| LocationId(i as u32))
    }

    // ── Names ─────────────────────────────────────────────────────────────

    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn id_of(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Like [`id_of`](Self::id_of) but fails with
    /// [`SpatialError::UnknownLocation`].
    pub fn lookup(&self, name: &str) -> SpatialResult<LocationId> {
        self.id_of(name)
            .ok_or_else(|| SpatialError::UnknownLocation(name.to_string()))
    }

    /// Display name for logs: the location name, or the raw id if unknown.
    pub fn label(&self, id: LocationId) -> String {
        match self.name(id) {
            Some(name) => name.to_string(),
            None       => id.to_string(),
        }
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`VillageGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rv_spatial::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_road("Farm", "Shop");
/// let lone = b.add_location("Lighthouse");
/// let g = b.build();
/// assert_eq!(g.location_count(), 3);
/// assert!(g.neighbors(lone).is_empty());
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    names:     Vec<String>,
    index:     FxHashMap<String, LocationId>,
    raw_edges: Vec<(LocationId, LocationId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name` and return its id.  Adding an existing name returns the
    /// id assigned the first time.
    pub fn add_location(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add an undirected road between two named locations.
    pub fn add_road(&mut self, a: &str, b: &str) {
        let a = self.add_location(a);
        let b = self.add_location(b);
        self.raw_edges.push((a, b));
        self.raw_edges.push((b, a));
    }

    /// Parse a `"From-To"` descriptor and add the road.
    ///
    /// Both names are trimmed.  Anything other than exactly one separator
    /// between two non-empty names is [`SpatialError::InvalidEdgeFormat`].
    pub fn add_edge_descriptor(&mut self, descriptor: &str) -> SpatialResult<()> {
        let (from, to) = parse_edge(descriptor)?;
        self.add_road(from, to);
        Ok(())
    }

    /// Consume the builder and produce a [`VillageGraph`].
    pub fn build(self) -> VillageGraph {
        let node_count = self.names.len();

        // Stable: keeps per-location neighbor order equal to insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|&(from, _)| from.0);

        let edge_to: Vec<LocationId> = raw.iter().map(|&(_, to)| to).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_to.len());

        VillageGraph {
            names: self.names,
            index: self.index,
            node_out_start,
            edge_to,
        }
    }
}

fn parse_edge(descriptor: &str) -> SpatialResult<(&str, &str)> {
    let invalid = || SpatialError::InvalidEdgeFormat(descriptor.to_string());

    let mut parts = descriptor.split(EDGE_SEPARATOR);
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(invalid());
    }
    Ok((from, to))
}
