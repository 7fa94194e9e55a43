// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unbiased sampling below a bound
//!
//! # Implementation notes
//!
//! A draw `v` is multiplied by the bound `n` to give a double-width product.
//! The high word of the product lies in `[0, n)` and is the candidate result;
//! the low word decides whether the draw is kept. Because `n` generally does
//! not divide `2^W`, some results are hit by one more draw than others. Those
//! extra draws are exactly the ones whose low word falls below
//! `threshold = 2^W mod n`, so rejecting them makes every result equally
//! likely (Lemma 4.1 of Lemire, *Fast Random Integer Generation in an
//! Interval*, 2019).
//!
//! `2^W` does not fit in a `W`-bit word, but `2^W - n` does and is congruent
//! to it modulo `n`, and `2^W - n` is just `n.wrapping_neg()`.
//!
//! The threshold is always less than `n`, so a low word of at least `n` is
//! accepted without computing it. This resolves most draws for large `n`
//! and skips the one remainder operation the method needs.

use crate::{Error, TryUniformSource, UniformSource, Word};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Return a uniformly-distributed value in `[0, n)`.
///
/// Draws one word from `source` and, with probability less than one half,
/// some more. The expected number of draws is less than two for every `n`.
/// When `n` is a power of two exactly one word is drawn.
///
/// # Panics
///
/// Panics if `n == 0`.
///
/// # Example
///
/// ```
/// use rand_bounded::mock::StepSource;
///
/// let mut src = StepSource::new(0x8000_0000, 0x1000_0000);
/// assert_eq!(rand_bounded::sample::<u32, _>(&mut src, 6), 3);
/// ```
#[inline]
pub fn sample<W, S>(source: &mut S, n: W) -> W
where
    W: Word,
    S: UniformSource<W> + ?Sized,
{
    assert!(n != W::ZERO, "sample: bound n must be non-zero");

    let (high, low) = source.next_word().wmul(n);
    if low >= n {
        return high;
    }

    let threshold = n.wrapping_neg() % n;
    if low >= threshold {
        return high;
    }

    loop {
        trace!("sample: rejected draw (n = {}, threshold = {})", n, threshold);
        let (high, low) = source.next_word().wmul(n);
        if low >= threshold {
            return high;
        }
    }
}

/// Return a uniformly-distributed value in `[0, n)`, or the first error
/// reported by `source`.
///
/// This is [`sample`] for fallible sources; with an infallible source both
/// consume the same draws and return the same values. A failed draw is not
/// retried and the partially sampled value is discarded.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn try_sample<W, S>(source: &mut S, n: W) -> Result<W, S::Error>
where
    W: Word,
    S: TryUniformSource<W> + ?Sized,
{
    assert!(n != W::ZERO, "try_sample: bound n must be non-zero");

    let (high, low) = source.try_next_word()?.wmul(n);
    if low >= n {
        return Ok(high);
    }

    let threshold = n.wrapping_neg() % n;
    if low >= threshold {
        return Ok(high);
    }

    loop {
        trace!("try_sample: rejected draw (n = {}, threshold = {})", n, threshold);
        let (high, low) = source.try_next_word()?.wmul(n);
        if low >= threshold {
            return Ok(high);
        }
    }
}

/// Return a uniformly-distributed value in `[0, n)` using only the low
/// `bits` bits of each draw.
///
/// This runs the same algorithm as [`sample`] with `W` replaced by `bits`:
/// the draw is masked to `bits` bits, the candidate is `(v * n) >> bits` and
/// the threshold is `2^bits mod n`. Narrow widths make it feasible to
/// enumerate every possible draw.
///
/// # Panics
///
/// Panics if `n == 0`, if `bits` is not in `1..W::BITS`, or if `n` does not
/// fit in `bits` bits.
pub fn sample_bits<W, S>(source: &mut S, n: W, bits: u32) -> W
where
    W: Word,
    S: UniformSource<W> + ?Sized,
{
    assert!(n != W::ZERO, "sample_bits: bound n must be non-zero");
    assert!(
        bits > 0 && bits < W::BITS,
        "sample_bits: bits must be at least 1 and less than {}",
        W::BITS
    );
    let mask = W::low_mask(bits);
    assert!(n <= mask, "sample_bits: bound n must fit in {} bits", bits);

    let (high, low) = narrow_wmul(source.next_word() & mask, n, bits, mask);
    if low >= n {
        return high;
    }

    // (2^bits - n) < 2^bits, so no wrapping is needed here.
    let threshold = (mask - n + W::ONE) % n;
    if low >= threshold {
        return high;
    }

    loop {
        trace!("sample_bits: rejected draw (n = {}, bits = {})", n, bits);
        let (high, low) = narrow_wmul(source.next_word() & mask, n, bits, mask);
        if low >= threshold {
            return high;
        }
    }
}

/// Split the product of two `bits`-wide values at bit `bits`.
#[inline(always)]
fn narrow_wmul<W: Word>(v: W, n: W, bits: u32, mask: W) -> (W, W) {
    let (hi, lo) = v.wmul(n);
    let high = (hi << (W::BITS - bits)) | (lo >> bits);
    (high, lo & mask)
}

/// A sampler of values in `[0, n)` for a fixed bound `n`
///
/// Where [`sample`] computes its threshold lazily, and only when the first
/// draw lands near a bucket boundary, `Bounded` computes it once on
/// construction. Each sample then costs one multiplication per draw and no
/// remainder. For the same words, `Bounded::sample` and [`sample`] return
/// the same values.
///
/// # Example
///
/// ```
/// use rand_bounded::{Bounded, mock::StepSource};
///
/// let die = Bounded::new(6u32).unwrap();
/// let mut src = StepSource::new(0, 0x2aaa_aaab);
/// let rolls: Vec<u32> = (0..6).map(|_| die.sample(&mut src)).collect();
/// assert!(rolls.iter().all(|&r| r < 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BoundedRepr<W>",
        bound(deserialize = "W: Word + Deserialize<'de>")
    )
)]
pub struct Bounded<W> {
    n: W,
    threshold: W,
    bits: u32,
}

impl<W: Word> Bounded<W> {
    /// Create a sampler for `[0, n)` over full `W`-bit draws.
    pub fn new(n: W) -> Result<Self, Error> {
        if n == W::ZERO {
            return Err(Error::ZeroBound);
        }
        let threshold = n.wrapping_neg() % n;
        debug!("Bounded::new: n = {}, threshold = {}", n, threshold);
        Ok(Bounded {
            n,
            threshold,
            bits: W::BITS,
        })
    }

    /// Create a sampler for `[0, n)` using only the low `bits` bits of each
    /// draw, like [`sample_bits`].
    pub fn with_width(n: W, bits: u32) -> Result<Self, Error> {
        if n == W::ZERO {
            return Err(Error::ZeroBound);
        }
        if bits == 0 || bits >= W::BITS {
            return Err(Error::WidthOutOfRange);
        }
        let mask = W::low_mask(bits);
        if n > mask {
            return Err(Error::BoundTooWide);
        }
        let threshold = (mask - n + W::ONE) % n;
        debug!(
            "Bounded::with_width: n = {}, bits = {}, threshold = {}",
            n, bits, threshold
        );
        Ok(Bounded { n, threshold, bits })
    }

    /// The exclusive upper bound `n`.
    #[inline]
    pub fn bound(&self) -> W {
        self.n
    }

    /// The smallest accepted low word, `2^bits mod n`.
    #[inline]
    pub fn threshold(&self) -> W {
        self.threshold
    }

    /// The number of bits used from each draw.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Return a uniformly-distributed value in `[0, n)`.
    #[inline]
    pub fn sample<S: UniformSource<W> + ?Sized>(&self, source: &mut S) -> W {
        loop {
            let (high, low) = self.split(source.next_word());
            if low >= self.threshold {
                return high;
            }
            trace!("Bounded::sample: rejected draw (n = {})", self.n);
        }
    }

    /// Return a uniformly-distributed value in `[0, n)`, or the first error
    /// reported by `source`.
    #[inline]
    pub fn try_sample<S: TryUniformSource<W> + ?Sized>(
        &self, source: &mut S,
    ) -> Result<W, S::Error> {
        loop {
            let (high, low) = self.split(source.try_next_word()?);
            if low >= self.threshold {
                return Ok(high);
            }
            trace!("Bounded::try_sample: rejected draw (n = {})", self.n);
        }
    }

    #[inline(always)]
    fn split(&self, v: W) -> (W, W) {
        if self.bits == W::BITS {
            v.wmul(self.n)
        } else {
            let mask = W::low_mask(self.bits);
            narrow_wmul(v & mask, self.n, self.bits, mask)
        }
    }
}

/// Unchecked fields of a deserialized [`Bounded`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Bounded")]
struct BoundedRepr<W> {
    n: W,
    threshold: W,
    bits: u32,
}

#[cfg(feature = "serde")]
impl<W: Word> TryFrom<BoundedRepr<W>> for Bounded<W> {
    type Error = Error;

    fn try_from(repr: BoundedRepr<W>) -> Result<Self, Error> {
        let bounded = if repr.bits == W::BITS {
            Bounded::new(repr.n)?
        } else {
            Bounded::with_width(repr.n, repr.bits)?
        };
        if bounded.threshold != repr.threshold {
            return Err(Error::ThresholdMismatch);
        }
        Ok(bounded)
    }
}
