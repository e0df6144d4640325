// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use thiserror::Error;

/// Error type of the randomized operations.
///
/// Enumeration never fails; vacuous requests (a length exceeding the source,
/// an empty source) simply produce no items. The two failure modes that
/// remain are a caller asking for a negative sample count and a random
/// source breaking its range contract. The latter is surfaced as a hard
/// error rather than clamped: a source that steps outside `[0, bound)` is
/// broken and its output cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sample was requested with a negative count.
    #[error("negative sample count: {0}")]
    NegativeSampleCount(isize),

    /// The random source returned an index at or above the requested bound.
    #[error("random index {index} out of range for bound {bound}")]
    IndexOutOfRange {
        /// The value the source returned.
        index: usize,
        /// The exclusive upper bound the source was asked for.
        bound: usize,
    },
}
