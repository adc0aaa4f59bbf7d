//! Material catalog: the closed set of waste categories the scanner can
//! report, and the fixed disposal metadata for each.
//!
//! This crate is `no_std` and allocation-free; every [`MaterialInfo`] is a
//! `static` compiled into the binary.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod material;

pub use material::{lookup, MaterialCategory, MaterialInfo, ParseCategoryError, Swatch};
