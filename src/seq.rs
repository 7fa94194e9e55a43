// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Slice shuffling

use crate::{sample, UniformSource};

/// Shuffle a slice in place.
///
/// Each of the `len!` permutations is equally likely, given a uniform
/// source. One bounded value is sampled per element; nothing is drawn for
/// slices of length 0 or 1.
///
/// # Example
///
/// ```
/// use rand_bounded::mock::StepSource;
/// use rand_bounded::seq::shuffle;
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// shuffle(&mut deck, &mut StepSource::new(1, 0x9e37_79b9_7f4a_7c15));
/// deck.sort();
/// assert_eq!(deck, (0..52).collect::<Vec<u32>>());
/// ```
pub fn shuffle<T, S>(slice: &mut [T], source: &mut S)
where
    S: UniformSource<u32> + ?Sized,
{
    if slice.len() <= 1 {
        return;
    }
    let len = slice.len();
    partial_shuffle(slice, source, len);
}

/// Shuffle a slice in place, but exit early.
///
/// Returns two mutable slices from the source slice. The first contains
/// `amount` elements randomly permuted. The second has the remaining
/// elements that are not fully shuffled.
///
/// If `amount` is greater than the number of elements in the slice, this
/// will perform a full shuffle.
pub fn partial_shuffle<'a, T, S>(
    slice: &'a mut [T], source: &mut S, amount: usize,
) -> (&'a mut [T], &'a mut [T])
where
    S: UniformSource<u32> + ?Sized,
{
    let len = slice.len();
    let m = len.saturating_sub(amount);

    // Durstenfeld's Fisher-Yates, filling the tail: after step `i` the
    // elements in `i..` are a uniform selection from the whole slice.
    for i in m..len {
        let index = sample_index(source, i + 1);
        slice.swap(i, index);
    }
    let (rest, chosen) = slice.split_at_mut(m);
    (chosen, rest)
}

/// Uniform index in `0..n`, using one `u32` draw per try when `n` fits.
fn sample_index<S>(source: &mut S, n: usize) -> usize
where
    S: UniformSource<u32> + ?Sized,
{
    if n <= u32::MAX as usize {
        sample(source, n as u32) as usize
    } else {
        sample(&mut Pair(source), n as u64) as usize
    }
}

/// Two `u32` draws joined into one `u64`, little-endian.
struct Pair<'a, S: ?Sized>(&'a mut S);

impl<'a, S: UniformSource<u32> + ?Sized> UniformSource<u64> for Pair<'a, S> {
    fn next_word(&mut self) -> u64 {
        let x = self.0.next_word() as u64;
        let y = self.0.next_word() as u64;
        (y << 32) | x
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mock::{SeqSource, StepSource};

    #[test]
    fn test_shuffle_short() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut SeqSource::<u32>::new(&[]));
        let mut one = [7];
        shuffle(&mut one, &mut SeqSource::<u32>::new(&[]));
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_shuffle_draws() {
        // u32::MAX is never rejected and maps to n - 1 for every bound.
        let words = [u32::MAX; 4];
        let mut src = SeqSource::new(&words);
        let mut xs = [0, 1, 2, 3];
        shuffle(&mut xs, &mut src);
        assert_eq!(src.draws(), 4);
        assert_eq!(xs, [0, 1, 2, 3]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut src = StepSource::new(5, 0x2545_f491_4f6c_dd1d);
        let mut xs: [u16; 100] = core::array::from_fn(|i| i as u16);
        shuffle(&mut xs, &mut src);
        let mut seen = [false; 100];
        for &x in &xs {
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
        }
        assert_ne!(xs, core::array::from_fn::<u16, 100, _>(|i| i as u16));
    }

    #[test]
    fn test_partial_shuffle() {
        let mut src = StepSource::new(9, 0x9e37_79b9_7f4a_7c15);
        let mut xs = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let (chosen, rest) = partial_shuffle(&mut xs, &mut src, 3);
        assert_eq!(chosen.len(), 3);
        assert_eq!(rest.len(), 7);

        let mut xs = [0u8, 1, 2];
        let (chosen, rest) = partial_shuffle(&mut xs, &mut src, 10);
        assert_eq!(chosen.len(), 3);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_pair_little_endian() {
        let words = [0x0123_4567u32, 0x89ab_cdef];
        let mut src = SeqSource::new(&words);
        let mut pair = Pair(&mut src);
        assert_eq!(pair.next_word(), 0x89ab_cdef_0123_4567);
    }
}
