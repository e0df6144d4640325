// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenience re-export of the crate's extension traits.
//!
//! ```
//! use combinate::prelude::*;
//!
//! assert_eq!([1, 2, 3].combinations(2).len(), 3);
//! ```

#[doc(no_inline)]
pub use crate::enumerate::SliceEnumerate;
#[doc(no_inline)]
pub use crate::sample::SliceSample;
#[doc(no_inline)]
pub use crate::shuffle::SliceShuffle;
#[doc(no_inline)]
pub use crate::source::{default_source, RandomSource};
