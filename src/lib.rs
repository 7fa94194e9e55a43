// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unbiased random integers below a bound.
//!
//! This crate turns a source of uniform fixed-width words into uniform
//! integers in `[0, n)`, with no bias and, in most calls, no division. It
//! implements Lemire's multiply-and-reject method ("nearly divisionless"
//! sampling, [arXiv:1805.10941]).
//!
//! # Quick start
//!
//! ```
//! use rand_bounded::adapter::RngSource;
//! use rand_core::SeedableRng;
//!
//! let mut src = RngSource::new(rand_pcg::Pcg32::seed_from_u64(1));
//! let roll = rand_bounded::sample(&mut src, 6u32) + 1;
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! # Sources
//!
//! Words come from a [`UniformSource`], a single-method trait. The crate
//! does not generate entropy itself. Use:
//!
//! -   [`adapter::RngSource`] for any [`rand_core::RngCore`] generator,
//! -   [`adapter::TopBits`] for generators producing 63-bit integers,
//!     taking the top bits of each draw,
//! -   [`adapter::TryRngSource`] and [`try_sample`] for fallible generators,
//! -   [`mock`] sources for deterministic tests.
//!
//! # Sampling
//!
//! -   [`sample`] draws one value with the lazily-computed threshold; this is
//!     the main entry point.
//! -   [`Bounded`] precomputes the threshold for repeated sampling with one
//!     bound, and implements `rand::distr::Distribution` with the `rand`
//!     feature.
//! -   [`sample_bits`] restricts draws to fewer bits than the word; it exists
//!     so every possible draw can be enumerated in tests.
//! -   [`seq::shuffle`] permutes a slice.
//! -   [`reference`] holds slower textbook samplers for comparison.
//!
//! A bound of zero is a contract violation and panics; [`Bounded::new`]
//! reports it as an [`Error`] instead.
//!
//! # Crate features
//!
//! -   `std` (default): implements `std::error::Error` for [`Error`]
//! -   `alloc`: `Box<S>` sources
//! -   `rand_core` (default): the `rand_core` adapters
//! -   `rand`: `rand::distr::Distribution` for [`Bounded`]
//! -   `serde`: serialization of [`Bounded`] and [`mock::StepSource`]
//! -   `log`: trace rejected draws through the `log` crate
//!
//! [arXiv:1805.10941]: https://arxiv.org/abs/1805.10941

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://rust-random.github.io/rand/"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod log_macros;

pub mod adapter;
#[cfg(feature = "rand")]
mod distr;
mod error;
pub mod mock;
pub mod reference;
mod sampler;
pub mod seq;
mod source;
mod word;

#[cfg(feature = "rand_core")]
pub use rand_core;

pub use error::Error;
pub use sampler::{sample, sample_bits, try_sample, Bounded};
pub use source::{Int63Source, TryUniformSource, UniformSource};
pub use word::Word;
