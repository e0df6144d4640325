// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Uniform sampling without replacement.

use crate::error::Error;
use crate::source::{draw_checked, RandomSource};

/// Extension trait on slices, providing uniform random selection.
///
/// Implemented for `[T]`. Both methods draw indices from the supplied
/// [`RandomSource`] and validate every draw; a source that steps outside its
/// bound aborts the operation with [`Error::IndexOutOfRange`].
pub trait SliceSample {
    /// The element type.
    type Item;

    /// Draw one element uniformly at random.
    ///
    /// Returns `Ok(None)` if the slice is empty.
    fn choose<S>(&self, src: &mut S) -> Result<Option<&Self::Item>, Error>
    where
        S: RandomSource + ?Sized;

    /// Draw `amount` distinct elements uniformly, without replacement.
    ///
    /// Elements are returned in draw order. A negative `amount` is rejected
    /// before any draw; an empty slice yields an empty result; an `amount`
    /// exceeding the slice length is capped at it.
    ///
    /// Selection is by rejection: indices are drawn until `min(amount, n)`
    /// distinct ones have been seen. Expected draws stay close to `amount`
    /// while `amount` is small relative to `n`, degrading as the two
    /// approach; `amount` is capped at `n`, so the loop always terminates.
    fn sample<S>(&self, src: &mut S, amount: isize) -> Result<Vec<&Self::Item>, Error>
    where
        S: RandomSource + ?Sized;
}

impl<T> SliceSample for [T] {
    type Item = T;

    fn choose<S>(&self, src: &mut S) -> Result<Option<&T>, Error>
    where
        S: RandomSource + ?Sized,
    {
        if self.is_empty() {
            return Ok(None);
        }
        let index = draw_checked(src, self.len())?;
        Ok(Some(&self[index]))
    }

    fn sample<S>(&self, src: &mut S, amount: isize) -> Result<Vec<&T>, Error>
    where
        S: RandomSource + ?Sized,
    {
        if amount < 0 {
            return Err(Error::NegativeSampleCount(amount));
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let wanted = (amount as usize).min(self.len());
        let mut drawn: Vec<usize> = Vec::with_capacity(wanted);
        let mut out: Vec<&T> = Vec::with_capacity(wanted);
        while out.len() < wanted {
            let index = draw_checked(src, self.len())?;
            if drawn.contains(&index) {
                trace!("index {} already drawn, redrawing", index);
                continue;
            }
            drawn.push(index);
            out.push(&self[index]);
        }
        Ok(out)
    }
}
