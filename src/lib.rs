// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Combinatorial enumeration and uniform random sampling for slices.
//!
//! This crate extends `[T]` with the enumeration and sampling operations the
//! standard library leaves out:
//!
//! *   [`SliceEnumerate`] — all permutations or combinations of a chosen
//!     length, with or without repetition, in a canonical order;
//! *   [`SliceSample`] — one element or `k` distinct elements drawn uniformly
//!     without replacement;
//! *   [`SliceShuffle`] — an in-place random rearrangement, plus a copying
//!     variant.
//!
//! Enumeration is deterministic and needs no randomness. The randomized
//! operations draw indices from a [`RandomSource`], an explicitly injected
//! dependency: pass [`default_source()`] when any generator will do, or wrap
//! a seeded generator in [`RngSource`] for reproducible output. Tests can
//! substitute a scripted source to pin down exact draws.
//!
//! Every generator comes in two forms sharing one implementation: a push form
//! (`*_each`) that invokes a consumer once per result item, and a collect form
//! that materializes all items into a restartable [`Enumerated`] producer.
//! Repeated permutations are the exception: their producer,
//! [`RepeatedPermutations`], reports its `n^k` size without materializing
//! anything.
//!
//! # Example
//!
//! ```
//! use combinate::prelude::*;
//!
//! let items = [1, 2, 3];
//!
//! let pairs = items.combinations(2);
//! assert_eq!(pairs.len(), 3);
//! let ordered: Vec<Vec<i32>> = pairs.iter().cloned().collect();
//! assert_eq!(ordered, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//!
//! let mut src = combinate::default_source();
//! let picked = items.sample(&mut src, 2)?;
//! assert_eq!(picked.len(), 2);
//! # Ok::<(), combinate::Error>(())
//! ```

#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

#[macro_use]
mod log_macros;

pub mod enumerate;
mod error;
pub mod prelude;
pub mod sample;
pub mod shuffle;
pub mod source;

pub use crate::enumerate::{Enumerated, RepeatedPermutations, SliceEnumerate};
pub use crate::error::Error;
pub use crate::sample::SliceSample;
pub use crate::shuffle::SliceShuffle;
pub use crate::source::{default_source, RandomSource, RngSource};
