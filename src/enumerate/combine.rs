// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Combinations, with and without repetition.

/// Emit every `len`-element selection without repetition, in lexicographic
/// order of the (strictly increasing) index tuples.
///
/// The general case walks a cursor array of `len + 1` levels. Level 0 holds
/// a -1 sentinel; levels `1..=len` hold the current index tuple. Each round
/// advances the unset levels to the smallest increasing extension of the
/// current prefix, emits, then backtracks from the rightmost level, skipping
/// levels whose cursor has reached its highest admissible index. O(len) work
/// per item beyond emission.
pub(crate) fn each_combination<T, F>(elems: &[T], len: usize, mut consume: F)
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
    let mut picked: Vec<T> = Vec::with_capacity(len);
    if len == 1 {
        for elem in elems {
            picked.clear();
            picked.push(elem.clone());
            consume(&picked);
        }
        return;
    }

    let mut cursor = vec![0isize; len + 1];
    cursor[0] = -1;
    let mut level = 0usize;
    loop {
        level += 1;
        while level < len {
            cursor[level + 1] = cursor[level] + 1;
            level += 1;
        }

        picked.clear();
        picked.extend(cursor[1..].iter().map(|&i| elems[i as usize].clone()));
        consume(&picked);

        loop {
            if level == 0 {
                return;
            }
            cursor[level] += 1;
            level -= 1;
            // A cursor at level L may climb no higher than n - len + L - 1;
            // one past that, the level is exhausted and we back up further.
            if cursor[level + 1] + len as isize != (n + level + 1) as isize {
                break;
            }
        }
    }
}

/// Emit every `len`-element selection with repetition, in lexicographic
/// order of the (non-decreasing) index tuples.
///
/// Recurses on `len - 1`: each shorter selection is extended with every
/// element at or after its last element's position. The anchor position is
/// found by first-occurrence equality, so equal-valued elements make the
/// anchor ambiguous; such inputs are unsupported.
pub(crate) fn each_repeated_combination<T, F>(elems: &[T], len: usize, mut consume: F)
where
    T: Clone + PartialEq,
    F: FnMut(&[T]),
{
    repeated_combination_level(elems, len, &mut |item| consume(item));
}

// Recursion goes through `dyn FnMut`: each level wraps the next consumer in
// a closure of a new type, which would otherwise monomorphize without end.
fn repeated_combination_level<T>(elems: &[T], len: usize, consume: &mut dyn FnMut(&[T]))
where
    T: Clone + PartialEq,
{
    if len == 0 {
        consume(&[]);
        return;
    }
    if len == 1 {
        let mut picked = Vec::with_capacity(1);
        for elem in elems {
            picked.clear();
            picked.push(elem.clone());
            consume(&picked);
        }
        return;
    }
    let n = elems.len();
    repeated_combination_level(elems, len - 1, &mut |prefix: &[T]| {
        let last = &prefix[prefix.len() - 1];
        // Non-reflexive equality (e.g. NaN) finds no anchor and extends
        // nothing.
        let anchor = elems.iter().position(|e| e == last).unwrap_or(n);
        let mut item = Vec::with_capacity(len);
        for index in anchor..n {
            item.clear();
            item.extend_from_slice(prefix);
            item.push(elems[index].clone());
            consume(&item);
        }
    });
}
