//! `rv-pgroup` — a persistent group of unique values.
//!
//! [`PGroup`] never changes after construction.  [`add`](PGroup::add) and
//! [`delete`](PGroup::delete) return new groups; the receiver keeps its
//! contents, so every version a caller holds on to stays valid.
//!
//! Storage is an [`im::Vector`], a persistent RRB tree: a new version shares
//! all untouched chunks with the version it was derived from, and cloning a
//! group is O(1).  Identity is never observable through the API; groups
//! compare by value, in insertion order.
//!
//! ```
//! use rv_pgroup::PGroup;
//!
//! let a = PGroup::empty().add("a");
//! let ab = a.add("b");
//! let b = ab.delete(&"a");
//!
//! assert!(b.has(&"b"));
//! assert!(!a.has(&"b"));
//! assert!(!b.has(&"a"));
//! ```

use std::fmt;

use im::Vector;

#[cfg(test)]
mod tests;

/// An immutable, insertion-ordered set.
#[derive(Clone, PartialEq, Eq)]
pub struct PGroup<T: Clone> {
    items: Vector<T>,
}

impl<T: Clone + PartialEq> PGroup<T> {
    /// A group with no members.
    pub fn empty() -> Self {
        Self { items: Vector::new() }
    }

    /// `self` plus `item`, appended at the end.
    ///
    /// If `item` is already a member the result is a cheap clone of `self`.
    #[must_use]
    pub fn add(&self, item: T) -> Self {
        if self.has(&item) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push_back(item);
        Self { items }
    }

    /// `self` without `item`; the remaining members keep their order.
    ///
    /// If `item` is not a member the result is a cheap clone of `self`.
    #[must_use]
    pub fn delete(&self, item: &T) -> Self {
        match self.items.index_of(item) {
            None => self.clone(),
            Some(i) => {
                let mut items = self.items.clone();
                items.remove(i);
                Self { items }
            }
        }
    }

    pub fn has(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Clone + PartialEq> Default for PGroup<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects with set semantics: repeated values keep their first position.
impl<T: Clone + PartialEq> FromIterator<T> for PGroup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = Vector::new();
        for item in iter {
            if !items.contains(&item) {
                items.push_back(item);
            }
        }
        Self { items }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for PGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}
