// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration with `rand`'s `Distribution` trait

use rand::distr::Distribution;
use rand::Rng;

use crate::adapter::RngSource;
use crate::Bounded;

macro_rules! distribution_impl {
    ($($ty:ty),*) => {$(
        impl Distribution<$ty> for Bounded<$ty> {
            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                Bounded::sample(self, &mut RngSource::new(rng))
            }
        }
    )*};
}

distribution_impl! { u8, u16, u32, u64 }
