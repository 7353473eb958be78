//! Ordered sequences with structural sharing.
//!
//! [`Sequence`] is a thin wrapper around `im::Vector`. Cloning is O(1), and a
//! clone is fully independent: in-place operations on one never show through
//! the other. That is what lets copy-returning operations (`sorted_copy`,
//! `slice`, `spliced`) be written as "clone, then mutate the clone".

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, indexable, variable-length collection.
///
/// Methods taking `&mut self` mutate in place; everything else leaves the
/// sequence untouched. Concurrent mutation of one sequence needs external
/// synchronization, which the borrow checker already demands.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> Sequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.0.iter()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Appends an element to the end.
    pub fn push_back(&mut self, value: T) {
        self.0.push_back(value);
    }

    /// Inserts an element at the front, shifting every element back by one.
    pub fn push_front(&mut self, value: T) {
        self.0.push_front(value);
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Returns `None` (and leaves the sequence unchanged) if `index` is out of
    /// bounds.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.0.set(index, value))
    }

    /// Removes `range` from the sequence and returns the removed elements.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or reversed.
    pub fn drain(&mut self, range: Range<usize>) -> Self {
        Self(self.0.slice(range))
    }

    /// Inserts `items` before position `at`, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn insert_all(&mut self, at: usize, items: impl IntoIterator<Item = T>) {
        let tail = self.0.split_off(at);
        self.0.extend(items);
        self.0.append(tail);
    }

    /// Appends every element of `other`.
    pub fn append(&mut self, other: Self) {
        self.0.append(other.0);
    }

    /// Reverses element order in place.
    pub fn reverse(&mut self) {
        let reversed: im::Vector<T> = self.0.iter().rev().cloned().collect();
        self.0 = reversed;
    }

    /// Stably sorts the sequence in place with a three-way comparator.
    ///
    /// Elements comparing equal keep their relative order.
    pub fn sort_stable_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        // im's own sort is not stable, so sort through a contiguous buffer.
        let mut items: Vec<T> = self.0.iter().cloned().collect();
        items.sort_by(compare);
        self.0 = items.into_iter().collect();
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl<T: Clone> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Sequence<T> {}

impl<T: Clone + Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Clone> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self(im::Vector::from(items))
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
