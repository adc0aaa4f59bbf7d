//! Scanner device link: tracks whether the paired scanner is reachable.
//!
//! This crate is `no_std`; it only uses `core`.

#![cfg_attr(not(test), no_std)]

pub mod state;

pub use state::LinkState;
