// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exhaustive enumeration of arrangements and selections.
//!
//! This module provides:
//!
//! *   [`SliceEnumerate`] — the extension trait carrying all four generators
//! *   [`Enumerated`] — the eager, restartable producer returned by the
//!     collect-style entry points
//! *   [`RepeatedPermutations`] — the lazy, counted producer for tuples drawn
//!     with replacement
//!
//! Each generator exists in two forms sharing one core routine: a push form
//! (`*_each`) handing a scratch view of every result item to a consumer, and
//! a collect form that appends clones of those views to a list and wraps it.
//! The orders are fixed and documented per method; they are part of the
//! contract, not an implementation detail.

mod combine;
mod permute;

use core::slice;

pub use self::permute::{RepeatedPermutations, RepeatedPermutationsIter};

/// The fully materialized output of one enumeration, in emission order.
///
/// A restartable producer: [`iter`](Enumerated::iter) may be called any
/// number of times, always starting from the first item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerated<T> {
    items: Vec<Vec<T>>,
}

impl<T> Enumerated<T> {
    fn from_items(items: Vec<Vec<T>>) -> Self {
        Enumerated { items }
    }

    /// Number of result items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the enumeration produced no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items from the start.
    pub fn iter(&self) -> slice::Iter<'_, Vec<T>> {
        self.items.iter()
    }

    /// Consume the producer, returning the underlying list.
    pub fn into_vec(self) -> Vec<Vec<T>> {
        self.items
    }
}

impl<T> IntoIterator for Enumerated<T> {
    type Item = Vec<T>;
    type IntoIter = std::vec::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Enumerated<T> {
    type Item = &'a Vec<T>;
    type IntoIter = slice::Iter<'a, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Extension trait on slices, providing combinatorial enumeration.
///
/// Implemented for `[T]`. The consumer passed to a `*_each` method is handed
/// a borrowed view of each result item; the view is only valid for the
/// duration of that call, so consumers that keep items clone them (which is
/// exactly what the collect forms do).
pub trait SliceEnumerate {
    /// The element type.
    type Item;

    /// All ordered arrangements of `len` distinct positions.
    ///
    /// `len == 0` produces one empty item; `len` greater than the slice
    /// length produces none. The full-length enumeration is
    /// `v.permutations(v.len())`.
    ///
    /// The order is the recursive choose-and-remove order: at each depth the
    /// remaining elements are tried left to right, and the remainder keeps
    /// its original relative order. For `[1, 2, 3]` and `len == 2` this
    /// yields `[1,2], [1,3], [2,1], [2,3], [3,1], [3,2]`.
    fn permutations(&self, len: usize) -> Enumerated<Self::Item>
    where
        Self::Item: Clone;

    /// Push form of [`permutations`](SliceEnumerate::permutations).
    fn permutations_each<F>(&self, len: usize, consume: F)
    where
        Self::Item: Clone,
        F: FnMut(&[Self::Item]);

    /// All length-`len` tuples drawn with replacement, as a lazy producer.
    ///
    /// Each slot ranges independently over the whole slice, the rightmost
    /// slot varying fastest, for `n^len` tuples in total. A negative `len`
    /// produces nothing (it is not an error); `len == 0` produces one empty
    /// tuple. The producer reports its size without materializing anything.
    fn repeated_permutations(&self, len: isize) -> RepeatedPermutations<'_, Self::Item>;

    /// Push form of
    /// [`repeated_permutations`](SliceEnumerate::repeated_permutations).
    fn repeated_permutations_each<F>(&self, len: isize, consume: F)
    where
        Self::Item: Clone,
        F: FnMut(&[Self::Item]);

    /// All `len`-element selections without repetition, in lexicographic
    /// order of their (strictly increasing) index tuples.
    ///
    /// `len == 0` produces one empty item; `len` greater than the slice
    /// length produces none. Exactly `C(n, len)` items, no duplicates.
    fn combinations(&self, len: usize) -> Enumerated<Self::Item>
    where
        Self::Item: Clone;

    /// Push form of [`combinations`](SliceEnumerate::combinations).
    fn combinations_each<F>(&self, len: usize, consume: F)
    where
        Self::Item: Clone,
        F: FnMut(&[Self::Item]);

    /// All `len`-element selections with repetition, in lexicographic order
    /// of their (non-decreasing) index tuples: `C(n + len - 1, len)` items.
    ///
    /// The extension point for each partial selection is located by equality
    /// with its last element, at that element's first occurrence. Slices
    /// holding equal elements are therefore outside the supported input
    /// domain; see the crate tests.
    fn repeated_combinations(&self, len: usize) -> Enumerated<Self::Item>
    where
        Self::Item: Clone + PartialEq;

    /// Push form of
    /// [`repeated_combinations`](SliceEnumerate::repeated_combinations).
    fn repeated_combinations_each<F>(&self, len: usize, consume: F)
    where
        Self::Item: Clone + PartialEq,
        F: FnMut(&[Self::Item]);
}

impl<T> SliceEnumerate for [T] {
    type Item = T;

    fn permutations(&self, len: usize) -> Enumerated<T>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        permute::each_permutation(self, len, |item| items.push(item.to_vec()));
        Enumerated::from_items(items)
    }

    fn permutations_each<F>(&self, len: usize, consume: F)
    where
        T: Clone,
        F: FnMut(&[T]),
    {
        permute::each_permutation(self, len, consume);
    }

    fn repeated_permutations(&self, len: isize) -> RepeatedPermutations<'_, T> {
        RepeatedPermutations::new(self, len)
    }

    fn repeated_permutations_each<F>(&self, len: isize, mut consume: F)
    where
        T: Clone,
        F: FnMut(&[T]),
    {
        for item in self.repeated_permutations(len).iter() {
            consume(&item);
        }
    }

    fn combinations(&self, len: usize) -> Enumerated<T>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        combine::each_combination(self, len, |item| items.push(item.to_vec()));
        Enumerated::from_items(items)
    }

    fn combinations_each<F>(&self, len: usize, consume: F)
    where
        T: Clone,
        F: FnMut(&[T]),
    {
        combine::each_combination(self, len, consume);
    }

    fn repeated_combinations(&self, len: usize) -> Enumerated<T>
    where
        T: Clone + PartialEq,
    {
        let mut items = Vec::new();
        combine::each_repeated_combination(self, len, |item| items.push(item.to_vec()));
        Enumerated::from_items(items)
    }

    fn repeated_combinations_each<F>(&self, len: usize, consume: F)
    where
        T: Clone + PartialEq,
        F: FnMut(&[T]),
    {
        combine::each_repeated_combination(self, len, consume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerated_is_restartable() {
        let items = [1, 2, 3];
        let combos = items.combinations(2);
        let first: Vec<Vec<i32>> = combos.iter().cloned().collect();
        let second: Vec<Vec<i32>> = combos.iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), combos.len());
    }

    #[test]
    fn enumerated_into_iterator_forms() {
        let combos = [1, 2, 3].combinations(1);
        let by_ref: Vec<Vec<i32>> = (&combos).into_iter().cloned().collect();
        let by_value: Vec<Vec<i32>> = combos.into_iter().collect();
        assert_eq!(by_ref, by_value);
        assert_eq!(by_value, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn push_and_collect_forms_agree() {
        let items = [4u8, 5, 6, 7];
        for len in 0..=5 {
            let mut pushed: Vec<Vec<u8>> = Vec::new();
            items.combinations_each(len, |item| pushed.push(item.to_vec()));
            assert_eq!(pushed, items.combinations(len).into_vec());

            let mut pushed: Vec<Vec<u8>> = Vec::new();
            items.permutations_each(len, |item| pushed.push(item.to_vec()));
            assert_eq!(pushed, items.permutations(len).into_vec());

            let mut pushed: Vec<Vec<u8>> = Vec::new();
            items.repeated_combinations_each(len, |item| pushed.push(item.to_vec()));
            assert_eq!(pushed, items.repeated_combinations(len).into_vec());

            let mut pushed: Vec<Vec<u8>> = Vec::new();
            items.repeated_permutations_each(len as isize, |item| pushed.push(item.to_vec()));
            let lazy: Vec<Vec<u8>> = items.repeated_permutations(len as isize).iter().collect();
            assert_eq!(pushed, lazy);
        }
    }

    #[test]
    fn empty_source_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(empty.permutations(0).into_vec(), vec![Vec::<i32>::new()]);
        assert_eq!(empty.combinations(0).into_vec(), vec![Vec::<i32>::new()]);
        assert_eq!(
            empty.repeated_combinations(0).into_vec(),
            vec![Vec::<i32>::new()]
        );
        let tuples: Vec<Vec<i32>> = empty.repeated_permutations(0).iter().collect();
        assert_eq!(tuples, vec![Vec::<i32>::new()]);

        for len in 1..4 {
            assert!(empty.permutations(len).is_empty());
            assert!(empty.combinations(len).is_empty());
            assert!(empty.repeated_combinations(len).is_empty());
            assert_eq!(empty.repeated_permutations(len as isize).iter().count(), 0);
        }
    }
}
