//! Application UI layer: tabs, the scan simulator, deferred tasks, toasts,
//! and the view model the front-ends draw from.
//!
//! This crate is `no_std` by default. Randomness comes in through a caller
//! supplied `rand::Rng`; time comes in as plain milliseconds.
//!
//! # Layout
//!
//! ```text
//! shell (App) ─┬─ scan        idle → scanning → result
//!              ├─ timer       one-shot tasks with cancel handles
//!              ├─ toast       notification outbox + banner
//!              ├─ navigation  selected tab
//!              ├─ settings    toggles
//!              └─ content     history rows, eco tips, help card
//! view         frame model built from the shell
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod content;
pub mod navigation;
pub mod scan;
pub mod settings;
pub mod shell;
pub mod tab;
pub mod timer;
pub mod toast;
pub mod view;

pub use config::ShellConfig;
pub use scan::{ScanError, ScanState, StartOutcome};
pub use shell::{App, Command};
pub use tab::Tab;
