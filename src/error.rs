// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned from [`Bounded::new`](crate::Bounded::new) and
/// [`Bounded::with_width`](crate::Bounded::with_width), and reported when
/// deserializing an invalid `Bounded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The bound is zero, so `[0, n)` is empty.
    ZeroBound,
    /// The requested width is zero or not narrower than the word.
    WidthOutOfRange,
    /// The bound does not fit in the requested width.
    BoundTooWide,
    /// A deserialized threshold is not `2^bits mod n`.
    ThresholdMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ZeroBound => "bound must be non-zero",
            Error::WidthOutOfRange => "width must be at least 1 and less than the word size",
            Error::BoundTooWide => "bound must fit in the requested width",
            Error::ThresholdMismatch => "threshold does not match bound and width",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
