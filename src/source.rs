// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The random-source abstraction consumed by sampling and shuffling.
//!
//! [`RandomSource`] is deliberately minimal: one method returning a uniform
//! index below a bound. [`RngSource`] adapts any [`rand_core::RngCore`]
//! generator to it, and [`default_source()`] hands out the process-wide
//! default (the thread-local generator, lazily initialized on first use).
//!
//! The algorithms never trust a source blindly: every drawn index is checked
//! against the bound it was requested for, and a violation aborts the
//! operation with [`Error::IndexOutOfRange`].

use rand::rngs::ThreadRng;
use rand::Rng;
use rand_core::RngCore;

use crate::error::Error;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a uniformly distributed value in `[0, bound)`.
    ///
    /// `bound` is always at least 1. Implementations over finite generators
    /// may panic on `bound == 0`; the algorithms in this crate never request
    /// it.
    fn next_in_range(&mut self, bound: usize) -> usize;
}

/// Adapter exposing any [`RngCore`] generator as a [`RandomSource`].
///
/// # Example
///
/// ```
/// use combinate::prelude::*;
/// use combinate::RngSource;
/// use rand::rngs::mock::StepRng;
///
/// let choices = [10, 20, 30];
/// let mut src = RngSource(StepRng::new(0, 1));
/// let value = choices.choose(&mut src).unwrap();
/// assert!(value.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, bound: usize) -> usize {
        // Sample as a u32 where possible so that results agree across 32-
        // and 64-bit targets.
        if bound <= u32::MAX as usize {
            self.0.gen_range(0..bound as u32) as usize
        } else {
            self.0.gen_range(0..bound)
        }
    }
}

/// The process-wide default source.
///
/// Wraps the thread-local generator, which is lazily initialized from OS
/// entropy on first use and needs no teardown. Each call site gets a cheap
/// handle to the same per-thread instance.
pub fn default_source() -> RngSource<ThreadRng> {
    RngSource(rand::thread_rng())
}

/// Draw one index from `src` and validate it against `bound`.
pub(crate) fn draw_checked<S>(src: &mut S, bound: usize) -> Result<usize, Error>
where
    S: RandomSource + ?Sized,
{
    let index = src.next_in_range(bound);
    if index >= bound {
        debug!("random source returned {} for bound {}", index, bound);
        return Err(Error::IndexOutOfRange { index, bound });
    }
    Ok(index)
}
