// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-place random rearrangement.

use crate::error::Error;
use crate::source::{draw_checked, RandomSource};

/// Extension trait on slices, providing random rearrangement.
///
/// Implemented for `[T]`. The in-place form requires a mutable slice, which
/// discharges the "target must be mutable" precondition at compile time.
pub trait SliceShuffle {
    /// The element type.
    type Item;

    /// Rearrange the slice in place.
    ///
    /// Walks from the last position down to the second, trading each
    /// position `i` with a position drawn uniformly from `[0, i)` — strictly
    /// below `i`, so every element leaves its original position. The multiset
    /// of elements is preserved exactly.
    ///
    /// Fails only if the source breaks its range contract, in which case the
    /// slice is left in a valid but partially rearranged state.
    fn shuffle<S>(&mut self, src: &mut S) -> Result<(), Error>
    where
        S: RandomSource + ?Sized;

    /// Non-mutating variant: copy the slice, rearrange the copy, return it.
    fn shuffled<S>(&self, src: &mut S) -> Result<Vec<Self::Item>, Error>
    where
        Self::Item: Clone,
        S: RandomSource + ?Sized;
}

impl<T> SliceShuffle for [T] {
    type Item = T;

    fn shuffle<S>(&mut self, src: &mut S) -> Result<(), Error>
    where
        S: RandomSource + ?Sized,
    {
        for index in (1..self.len()).rev() {
            let other = draw_checked(src, index)?;
            self.swap(index, other);
        }
        Ok(())
    }

    fn shuffled<S>(&self, src: &mut S) -> Result<Vec<T>, Error>
    where
        T: Clone,
        S: RandomSource + ?Sized,
    {
        let mut copy = self.to_vec();
        copy.shuffle(src)?;
        Ok(copy)
    }
}
