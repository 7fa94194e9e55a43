// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock sources yielding very predictable output

use crate::{UniformSource, Word};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mock source yielding an arithmetic sequence
///
/// This adds a constant each step over a `u64` number, using wrapping
/// arithmetic. If the increment is 0 the source yields a constant.
///
/// Narrower words are produced via truncating cast from `u64`.
///
/// # Example
///
/// ```
/// use rand_bounded::mock::StepSource;
/// use rand_bounded::UniformSource;
///
/// let mut src = StepSource::new(2, 1);
/// let words: [u32; 3] = [src.next_word(), src.next_word(), src.next_word()];
/// assert_eq!(words, [2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepSource {
    v: u64,
    a: u64,
}

impl StepSource {
    /// Create a `StepSource`, yielding an arithmetic sequence starting with
    /// `initial` and incremented by `increment` each time.
    pub fn new(initial: u64, increment: u64) -> Self {
        StepSource {
            v: initial,
            a: increment,
        }
    }
}

impl<W: Word> UniformSource<W> for StepSource {
    #[inline]
    fn next_word(&mut self) -> W {
        let res = self.v;
        self.v = self.v.wrapping_add(self.a);
        W::truncate(res)
    }
}

/// A mock source replaying a fixed list of words
///
/// Every draw is counted, so tests can check exactly how many words a
/// sampler consumed. Drawing past the end of the list panics.
///
/// # Example
///
/// ```
/// use rand_bounded::mock::SeqSource;
///
/// // For a bound of 5, the first word is rejected and the second accepted.
/// let mut src = SeqSource::new(&[0u32, u32::MAX]);
/// assert_eq!(rand_bounded::sample(&mut src, 5), 4);
/// assert_eq!(src.draws(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqSource<'a, W> {
    words: &'a [W],
    pos: usize,
}

impl<'a, W: Word> SeqSource<'a, W> {
    /// Create a source yielding `words` in order.
    pub fn new(words: &'a [W]) -> Self {
        SeqSource { words, pos: 0 }
    }

    /// Number of words drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }

    /// Number of words left before the source is exhausted.
    pub fn remaining(&self) -> usize {
        self.words.len() - self.pos
    }
}

impl<'a, W: Word> UniformSource<W> for SeqSource<'a, W> {
    fn next_word(&mut self) -> W {
        match self.words.get(self.pos) {
            Some(&w) => {
                self.pos += 1;
                w
            }
            None => panic!("SeqSource exhausted after {} draws", self.pos),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_step_truncates() {
        let mut src = StepSource::new(0x1_0000_00ff, 1);
        let a: u8 = src.next_word();
        let b: u32 = src.next_word();
        let c: u64 = src.next_word();
        assert_eq!((a, b, c), (0xff, 0x100, 0x1_0000_0101));
    }

    #[test]
    fn test_step_constant() {
        let mut src = StepSource::new(9, 0);
        for _ in 0..4 {
            assert_eq!(UniformSource::<u16>::next_word(&mut src), 9);
        }
    }

    #[test]
    fn test_seq_counts_draws() {
        let words = [3u16, 1, 4];
        let mut src = SeqSource::new(&words);
        assert_eq!(src.remaining(), 3);
        assert_eq!(src.next_word(), 3);
        assert_eq!(src.next_word(), 1);
        assert_eq!(src.draws(), 2);
        assert_eq!(src.remaining(), 1);
    }

    #[test]
    #[should_panic(expected = "SeqSource exhausted")]
    fn test_seq_exhausted() {
        let mut src = SeqSource::new(&[1u32]);
        src.next_word();
        src.next_word();
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialization_step_source() {
        let some_src = StepSource::new(42, 7);
        let de_some_src: StepSource =
            bincode::deserialize(&bincode::serialize(&some_src).unwrap()).unwrap();
        assert_eq!(some_src.v, de_some_src.v);
        assert_eq!(some_src.a, de_some_src.a);
    }
}
