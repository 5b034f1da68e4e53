//! Ordered, deduplicating sets of resources.
//!
//! Sets compare elements with their total order, so element identity is
//! full-field equality and iteration order is deterministic regardless of
//! insertion order. Unioning many sets is how resources from several groups
//! and registries are combined for one page.

use crate::script::Script;
use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Set of stylesheet descriptors.
pub type Styles = ResourceSet<Style>;

/// Set of script descriptors.
pub type Scripts = ResourceSet<Script>;

/// An ordered set of resources of one kind.
///
/// # Example
///
/// ```
/// use webres_registry::{Style, Styles};
///
/// let first: Styles = [Style::new("/b.css"), Style::new("/a.css")].into_iter().collect();
/// let second: Styles = [Style::new("/a.css")].into_iter().collect();
///
/// let all = Styles::union([&first, &second]);
/// let uris: Vec<_> = all.iter().filter_map(Style::uri).collect();
/// assert_eq!(uris, ["/a.css", "/b.css"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Ord + Serialize",
    deserialize = "T: Ord + Deserialize<'de>"
))]
pub struct ResourceSet<T> {
    items: BTreeSet<T>,
}

impl<T: Ord> Default for ResourceSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> ResourceSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// Adds a resource, returning `false` if an equal one was already present.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes a resource, returning whether it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    /// Returns whether an equal resource is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of distinct resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set has no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the resources in their total order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Ord + Clone> ResourceSet<T> {
    /// Merges every input into one set.
    ///
    /// Equal resources collapse into one element and the result iterates in
    /// the total order, independent of the order of the inputs.
    #[must_use]
    pub fn union<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a ResourceSet<T>>,
        T: 'a,
    {
        let mut sets = sets.into_iter();
        // Most pages activate a single group; skip re-inserting in that case.
        let Some(first) = sets.next() else {
            return Self::new();
        };
        let mut items = first.items.clone();
        for set in sets {
            items.extend(set.items.iter().cloned());
        }
        Self { items }
    }
}

impl<T: Ord> FromIterator<T> for ResourceSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> Extend<T> for ResourceSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ResourceSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Position;
    use crate::style::Direction;

    fn styles(uris: &[&str]) -> Styles {
        uris.iter().map(|uri| Style::new(*uri)).collect()
    }

    fn uris(set: &Styles) -> Vec<&str> {
        set.iter().filter_map(Style::uri).collect()
    }

    #[test]
    fn add_deduplicates() {
        let mut set = Styles::new();
        assert!(set.add(Style::new("/a.css").with_media("print")));
        assert!(!set.add(Style::new("/a.css").with_media("print")));
        assert!(set.add(Style::new("/a.css")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iteration_ignores_insertion_order() {
        assert_eq!(uris(&styles(&["/c.css", "/a.css", "/b.css"])), [
            "/a.css", "/b.css", "/c.css"
        ]);
    }

    #[test]
    fn union_is_commutative() {
        let a = styles(&["/a.css"]);
        let b = styles(&["/b.css"]);
        assert_eq!(Styles::union([&a, &b]), Styles::union([&b, &a]));
    }

    #[test]
    fn union_is_idempotent() {
        let a = styles(&["/a.css", "/b.css"]);
        assert_eq!(Styles::union([&a, &a]), a);
    }

    #[test]
    fn union_of_nothing_is_empty() {
        assert!(Styles::union([]).is_empty());
    }

    #[test]
    fn union_keeps_distinct_variants() {
        let ltr: Styles = [Style::new("/a.css").with_direction(Direction::Ltr)]
            .into_iter()
            .collect();
        let rtl: Styles = [Style::new("/a.css").with_direction(Direction::Rtl)]
            .into_iter()
            .collect();
        assert_eq!(Styles::union([&ltr, &rtl]).len(), 2);
    }

    #[test]
    fn remove_and_contains() {
        let mut set: Scripts = [Script::new("/a.js", Position::HeadEnd)]
            .into_iter()
            .collect();
        assert!(set.contains(&Script::new("/a.js", Position::HeadEnd)));
        assert!(!set.contains(&Script::new("/a.js", Position::BodyEnd)));
        assert!(set.remove(&Script::new("/a.js", Position::HeadEnd)));
        assert!(set.is_empty());
    }
}
