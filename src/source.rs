// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sources of uniform words

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
use core::convert::Infallible;
use core::fmt;

use crate::Word;

/// A source of uniformly-distributed words of type `W`.
///
/// Each call to [`next_word`](Self::next_word) must yield a value independent
/// of all previous values and uniform over the whole range of `W`. The
/// samplers in this crate rely on that property but never check it.
///
/// A source may hold whatever state it likes (a generator seed, a counter,
/// a buffer); the samplers only ever call `next_word`. Sources shared between
/// threads must serialize access themselves.
///
/// Generators implementing [`rand_core::RngCore`] can be used through the
/// [`RngSource`](crate::adapter::RngSource) and
/// [`TopBits`](crate::adapter::TopBits) adapters.
///
/// # Example
///
/// ```
/// use rand_bounded::UniformSource;
///
/// /// Weyl sequence; do not use for anything serious.
/// struct Weyl(u32);
///
/// impl UniformSource<u32> for Weyl {
///     fn next_word(&mut self) -> u32 {
///         self.0 = self.0.wrapping_add(0x9e37_79b9);
///         self.0
///     }
/// }
///
/// let x = rand_bounded::sample(&mut Weyl(0), 6u32);
/// assert!(x < 6);
/// ```
pub trait UniformSource<W: Word> {
    /// Return the next uniform word.
    fn next_word(&mut self) -> W;
}

/// A source of uniform words which may fail.
///
/// Every [`UniformSource`] is a `TryUniformSource` with
/// [`Infallible`] errors. Failures are never retried by the samplers: the
/// first error is returned to the caller as is.
pub trait TryUniformSource<W: Word> {
    /// The type returned in the event of a source error.
    type Error: fmt::Debug + fmt::Display;

    /// Return the next uniform word, or the source's error.
    fn try_next_word(&mut self) -> Result<W, Self::Error>;
}

impl<W: Word, S: UniformSource<W> + ?Sized> TryUniformSource<W> for S {
    type Error = Infallible;

    #[inline]
    fn try_next_word(&mut self) -> Result<W, Self::Error> {
        Ok(self.next_word())
    }
}

impl<'a, W: Word, S: UniformSource<W> + ?Sized> UniformSource<W> for &'a mut S {
    #[inline(always)]
    fn next_word(&mut self) -> W {
        S::next_word(self)
    }
}

#[cfg(feature = "alloc")]
impl<W: Word, S: UniformSource<W> + ?Sized> UniformSource<W> for Box<S> {
    #[inline(always)]
    fn next_word(&mut self) -> W {
        S::next_word(self)
    }
}

/// A source of non-negative 63-bit integers.
///
/// This is the output shape of many general-purpose generators which emit
/// an `i64` in `0..=i64::MAX`. Use [`TopBits`](crate::adapter::TopBits) to
/// sample from one.
pub trait Int63Source {
    /// Return the next value, uniform over `0..=i64::MAX`.
    fn next_int63(&mut self) -> i64;
}

impl<'a, S: Int63Source + ?Sized> Int63Source for &'a mut S {
    #[inline(always)]
    fn next_int63(&mut self) -> i64 {
        S::next_int63(self)
    }
}
