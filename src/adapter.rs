// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Adapters from general-purpose generators to word sources

#[cfg(feature = "rand_core")]
use rand_core::{RngCore, TryRngCore};

use crate::{Int63Source, UniformSource};
#[cfg(feature = "rand_core")]
use crate::TryUniformSource;

/// A word source taking the top bits of each draw of a 63-bit source.
///
/// Low-quality generators often have weak low bits; the top bits of a
/// 63-bit draw are used instead. `u32` words are `draw >> 31`.
///
/// With the `rand_core` feature, any [`RngCore`] can be used through
/// `TopBits<RngSource<R>>`, which then takes the top bits of `next_u64`.
///
/// # Example
///
/// ```
/// use rand_bounded::{adapter::TopBits, Int63Source};
///
/// struct Lcg(u64);
///
/// impl Int63Source for Lcg {
///     fn next_int63(&mut self) -> i64 {
///         self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
///         (self.0 >> 1) as i64
///     }
/// }
///
/// let mut src = TopBits::new(Lcg(42));
/// assert!(rand_bounded::sample(&mut src, 10u32) < 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBits<S>(S);

impl<S: Int63Source> TopBits<S> {
    /// Wrap `source`.
    pub fn new(source: S) -> Self {
        TopBits(source)
    }

    /// Unwrap the inner source.
    pub fn into_inner(self) -> S {
        self.0
    }
}

macro_rules! top_bits_impl {
    ($($ty:ty),*) => {$(
        impl<S: Int63Source> UniformSource<$ty> for TopBits<S> {
            #[inline]
            fn next_word(&mut self) -> $ty {
                (self.0.next_int63() >> (63 - <$ty>::BITS)) as $ty
            }
        }
    )*};
}

top_bits_impl! { u8, u16, u32 }

/// A word source drawing from a [`RngCore`].
///
/// `u32` and `u64` words come from `next_u32` and `next_u64`; `u8` and `u16`
/// words are the low bits of `next_u32`, as in `rand`.
///
/// # Example
///
/// ```
/// use rand_bounded::adapter::RngSource;
/// use rand_core::SeedableRng;
///
/// let mut src = RngSource::new(rand_pcg::Pcg32::seed_from_u64(7));
/// let i = rand_bounded::sample(&mut src, 52u32);
/// assert!(i < 52);
/// ```
#[cfg(feature = "rand_core")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngSource<R>(R);

#[cfg(feature = "rand_core")]
impl<R: RngCore> RngSource<R> {
    /// Wrap `rng`.
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

#[cfg(feature = "rand_core")]
impl<R: RngCore> UniformSource<u8> for RngSource<R> {
    #[inline]
    fn next_word(&mut self) -> u8 {
        self.0.next_u32() as u8
    }
}

#[cfg(feature = "rand_core")]
impl<R: RngCore> UniformSource<u16> for RngSource<R> {
    #[inline]
    fn next_word(&mut self) -> u16 {
        self.0.next_u32() as u16
    }
}

#[cfg(feature = "rand_core")]
impl<R: RngCore> UniformSource<u32> for RngSource<R> {
    #[inline]
    fn next_word(&mut self) -> u32 {
        self.0.next_u32()
    }
}

#[cfg(feature = "rand_core")]
impl<R: RngCore> UniformSource<u64> for RngSource<R> {
    #[inline]
    fn next_word(&mut self) -> u64 {
        self.0.next_u64()
    }
}

#[cfg(feature = "rand_core")]
impl<R: RngCore> Int63Source for RngSource<R> {
    #[inline]
    fn next_int63(&mut self) -> i64 {
        (self.0.next_u64() >> 1) as i64
    }
}

/// A fallible word source drawing from a [`TryRngCore`].
///
/// Generator errors are passed through unchanged by
/// [`try_sample`](crate::try_sample).
#[cfg(feature = "rand_core")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryRngSource<R>(R);

#[cfg(feature = "rand_core")]
impl<R: TryRngCore> TryRngSource<R> {
    /// Wrap `rng`.
    pub fn new(rng: R) -> Self {
        TryRngSource(rng)
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

#[cfg(feature = "rand_core")]
impl<R: TryRngCore> TryUniformSource<u32> for TryRngSource<R> {
    type Error = R::Error;

    #[inline]
    fn try_next_word(&mut self) -> Result<u32, R::Error> {
        self.0.try_next_u32()
    }
}

#[cfg(feature = "rand_core")]
impl<R: TryRngCore> TryUniformSource<u64> for TryRngSource<R> {
    type Error = R::Error;

    #[inline]
    fn try_next_word(&mut self) -> Result<u64, R::Error> {
        self.0.try_next_u64()
    }
}
