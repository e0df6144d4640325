// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Permutations, with and without repetition.

/// Emit every ordered arrangement of `len` distinct positions.
///
/// Recursive choose-and-remove: at each depth the remaining candidates are
/// tried in their current order, and removal keeps the remainder's relative
/// order intact. Recursion depth is bounded by `len`.
pub(crate) fn each_permutation<T, F>(elems: &[T], len: usize, mut consume: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let n = elems.len();
    if len == 0 {
        consume(&[]);
        return;
    }
    if len > n {
        return;
    }
    let mut pool: Vec<usize> = (0..n).collect();
    let mut picked: Vec<T> = Vec::with_capacity(len);
    extend_permutation(elems, len, &mut pool, &mut picked, &mut consume);
}

fn extend_permutation<T, F>(
    elems: &[T],
    len: usize,
    pool: &mut Vec<usize>,
    picked: &mut Vec<T>,
    consume: &mut F,
) where
    T: Clone,
    F: FnMut(&[T]),
{
    if picked.len() == len {
        consume(picked);
        return;
    }
    for slot in 0..pool.len() {
        let index = pool.remove(slot);
        picked.push(elems[index].clone());
        extend_permutation(elems, len, pool, picked, consume);
        picked.pop();
        pool.insert(slot, index);
    }
}

/// Lazy producer of all length-`k` tuples drawn with replacement.
///
/// Yields the cartesian product of `k` copies of the source, rightmost slot
/// varying fastest, and reports its `n^k` size without materializing any
/// tuple. Restartable: every [`iter`](RepeatedPermutations::iter) call
/// starts over.
#[derive(Debug, Clone)]
pub struct RepeatedPermutations<'a, T> {
    source: &'a [T],
    tuple_len: usize,
    // A negative requested length produces nothing at all, which is distinct
    // from a length of zero (one empty tuple).
    vacuous: bool,
}

impl<'a, T> RepeatedPermutations<'a, T> {
    pub(crate) fn new(source: &'a [T], requested: isize) -> Self {
        match usize::try_from(requested) {
            Ok(tuple_len) => RepeatedPermutations {
                source,
                tuple_len,
                vacuous: false,
            },
            Err(_) => RepeatedPermutations {
                source,
                tuple_len: 0,
                vacuous: true,
            },
        }
    }

    /// The number of tuples this producer yields: `n^k`, saturating at
    /// `usize::MAX`.
    pub fn len(&self) -> usize {
        if self.vacuous {
            return 0;
        }
        let n = self.source.len();
        if self.tuple_len == 0 {
            return 1;
        }
        match u32::try_from(self.tuple_len) {
            Ok(k) => n.checked_pow(k).unwrap_or(usize::MAX),
            Err(_) => match n {
                0 => 0,
                1 => 1,
                _ => usize::MAX,
            },
        }
    }

    /// True when the producer yields no tuples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the tuples from the start.
    pub fn iter(&self) -> RepeatedPermutationsIter<'a, T>
    where
        T: Clone,
    {
        RepeatedPermutationsIter {
            source: self.source,
            tuple_len: self.tuple_len,
            digits: None,
            done: self.vacuous || (self.source.is_empty() && self.tuple_len > 0),
        }
    }
}

impl<'a, 'b, T: Clone> IntoIterator for &'b RepeatedPermutations<'a, T> {
    type Item = Vec<T>;
    type IntoIter = RepeatedPermutationsIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tuples of a [`RepeatedPermutations`] producer.
#[derive(Debug, Clone)]
pub struct RepeatedPermutationsIter<'a, T> {
    source: &'a [T],
    tuple_len: usize,
    digits: Option<Vec<usize>>,
    done: bool,
}

impl<'a, T: Clone> Iterator for RepeatedPermutationsIter<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let tuple_len = self.tuple_len;
        let source = self.source;
        let digits = self.digits.get_or_insert_with(|| vec![0; tuple_len]);
        let item: Vec<T> = digits.iter().map(|&i| source[i].clone()).collect();

        // Advance the odometer, rightmost digit first; a carry past the
        // leftmost digit ends the iteration.
        let mut exhausted = true;
        for slot in (0..tuple_len).rev() {
            digits[slot] += 1;
            if digits[slot] < source.len() {
                exhausted = false;
                break;
            }
            digits[slot] = 0;
        }
        self.done = exhausted;
        Some(item)
    }
}
