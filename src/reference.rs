// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Straightforward unbiased samplers, for comparison
//!
//! These are slower than [`sample`](crate::sample) and exist to test and
//! benchmark it.

use crate::{UniformSource, Word};

/// Multiply-and-reject without the fast path.
///
/// Computes `threshold = 2^W mod n` before the first draw, then draws until
/// the low word of `v * n` is at least `threshold`. It accepts and rejects
/// exactly the same draws as [`sample`](crate::sample), and returns the same
/// values.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn sample_by_threshold<W, S>(source: &mut S, n: W) -> W
where
    W: Word,
    S: UniformSource<W> + ?Sized,
{
    assert!(n != W::ZERO, "sample_by_threshold: bound n must be non-zero");
    let threshold = n.wrapping_neg() % n;
    loop {
        let (high, low) = source.next_word().wmul(n);
        if low >= threshold {
            return high;
        }
    }
}

/// Discard-then-remainder: two remainders per call.
///
/// Draws until `v < 2^W - (2^W mod n)`, the largest multiple of `n` that
/// fits, then returns `v % n`. Unbiased, but it maps draws to results
/// differently from the multiply method.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn sample_by_cutoff<W, S>(source: &mut S, n: W) -> W
where
    W: Word,
    S: UniformSource<W> + ?Sized,
{
    assert!(n != W::ZERO, "sample_by_cutoff: bound n must be non-zero");
    let rejected = n.wrapping_neg() % n;
    if rejected == W::ZERO {
        // n divides 2^W: every draw is kept
        return source.next_word() % n;
    }
    // 2^W - rejected, which is at most W::MAX since rejected > 0
    let cutoff = W::MAX - rejected + W::ONE;
    loop {
        let v = source.next_word();
        if v < cutoff {
            return v % n;
        }
    }
}
