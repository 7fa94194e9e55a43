// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width unsigned words

use core::fmt::{Debug, Display};
use core::ops::{Add, BitAnd, BitOr, Rem, Shl, Shr, Sub};

mod private {
    pub trait Sealed {}
}

/// An unsigned integer type which sources can draw and samplers can bound.
///
/// This trait is sealed: it is implemented for `u8`, `u16`, `u32` and `u64`
/// only. Each of these has a double-width type available to compute the full
/// product of a draw and a bound.
pub trait Word:
    private::Sealed
    + Copy
    + Ord
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Rem<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the type in bits (the `W` of the sampling algorithm).
    const BITS: u32;
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Full product of `self` and `x`, returned as `(high, low)` words.
    fn wmul(self, x: Self) -> (Self, Self);

    /// Negation modulo `2^BITS`.
    fn wrapping_neg(self) -> Self;

    /// Mask of the lowest `bits` bits. Requires `bits < Self::BITS`.
    #[inline]
    fn low_mask(bits: u32) -> Self {
        (Self::ONE << bits) - Self::ONE
    }

    /// Truncating conversion from `u64`.
    fn truncate(x: u64) -> Self;
}

macro_rules! word_impl {
    ($ty:ty, $wide:ty) => {
        impl private::Sealed for $ty {}

        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;

            #[inline(always)]
            fn wmul(self, x: $ty) -> ($ty, $ty) {
                let tmp = (self as $wide) * (x as $wide);
                ((tmp >> <$ty>::BITS) as $ty, tmp as $ty)
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$ty>::wrapping_neg(self)
            }

            #[inline(always)]
            fn truncate(x: u64) -> Self {
                x as $ty
            }
        }
    };
}

word_impl! { u8, u16 }
word_impl! { u16, u32 }
word_impl! { u32, u64 }
word_impl! { u64, u128 }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wmul() {
        assert_eq!(0xffu8.wmul(0xff), (0xfe, 0x01));
        assert_eq!(5u32.wmul(0x3333_3334), (1, 4));
        assert_eq!(u32::MAX.wmul(u32::MAX), (0xffff_fffe, 1));
        assert_eq!(u64::MAX.wmul(2), (1, u64::MAX - 1));
        assert_eq!(0u16.wmul(0xffff), (0, 0));
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(u32::low_mask(1), 1);
        assert_eq!(u32::low_mask(9), 0x1ff);
        assert_eq!(u8::low_mask(7), 0x7f);
        assert_eq!(u64::low_mask(63), u64::MAX >> 1);
    }

    #[test]
    fn test_neg_mod_is_full_range_mod() {
        // 2^W mod n, without a double-width remainder
        for n in 1..=1000u32 {
            let expected = ((1u64 << 32) % n as u64) as u32;
            assert_eq!(Word::wrapping_neg(n) % n, expected, "n = {}", n);
        }
        assert_eq!(Word::wrapping_neg(5u32) % 5, 1);
        assert_eq!(Word::wrapping_neg(3u8) % 3, 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(u8::truncate(0x1234), 0x34);
        assert_eq!(u32::truncate(u64::MAX), u32::MAX);
    }
}
