//! A sorted vector with binary-search membership.

use itertools::Itertools;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T> {
    elems: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { elems: Vec::new() }
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Binary search for `value`.
    ///
    /// Returns `Ok(index)` if found, otherwise `Err(index)` where `index` is
    /// the position that keeps the set sorted.
    pub fn search(&self, value: &T) -> Result<usize, usize> {
        self.elems.binary_search(value)
    }

    /// Same as [`search`](Self::search), encoded as one integer: the index if
    /// found, otherwise `-(insertion_index) - 1`.
    pub fn encoded_search(&self, value: &T) -> isize {
        match self.search(value) {
            Ok(index) => index as isize,
            Err(index) => -(index as isize) - 1,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Insert `value` at its sorted position.
    ///
    /// Returns `false` and leaves the set untouched if `value` is present.
    pub fn add(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.elems.insert(index, value);
                true
            }
        }
    }

    /// Insert `value` at `index` without searching.
    ///
    /// Only meant for seeding; the caller keeps the ordering.
    pub fn add_at(&mut self, index: usize, value: T) {
        debug_assert!(index == 0 || self.elems[index - 1] < value);
        debug_assert!(index == self.elems.len() || value < self.elems[index]);
        self.elems.insert(index, value);
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }
}

impl<T: Display> Display for OrderedSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.elems.iter().join(", "))
    }
}
