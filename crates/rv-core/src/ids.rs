//! Location identifier.
//!
//! Location names are interned by `rv-spatial` when the graph is built; the
//! rest of the workspace passes the dense `LocationId` around instead of
//! strings.  The inner integer is `pub` so the graph can index its per-node
//! `Vec`s, but callers should prefer `.index()`.

use std::fmt;

/// Index of a named location in the village graph, assigned in order of
/// first appearance in the road list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}
