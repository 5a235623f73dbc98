// =====================================================================
// File: set/set.rs
//
//! Generic unordered set of unique elements.
//!
//! Iteration order is whatever the underlying hash table yields and must
//! not be relied upon.
// =====================================================================

use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::Hash;

/// A collection of unique elements of type `T`.
///
/// Every operation is total: adding an element that is already present
/// or removing one that is absent is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    items: HashSet<T>,
}


impl<T: Eq + Hash> Set<T> {
    /// Create a new, empty set.
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Add every item yielded by `items`, skipping those already present.
    ///
    /// # Example
    /// ```
    /// use txkv::Set;
    /// let mut set = Set::new();
    /// set.add([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn add<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Add a single item. Returns `true` if it was not already present.
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Returns `true` if `item` is a member.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Remove `item`. Returns `true` if it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    /// Lazily walk the current members in unspecified order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}


impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// Borrowing iterator over the members of a [`Set`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
