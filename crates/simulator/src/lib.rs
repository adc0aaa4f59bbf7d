//! Desktop simulator for the waste scanner.
//!
//! Runs the `ui` shell on a single-threaded tokio runtime, reads commands from
//! stdin and prints each screen as text. `snapshot` renders the e-paper frame
//! through the `render` crate into a PNG.

// Canvas coordinates are a few hundred pixels at most; u32 -> i32 cannot wrap.
#![allow(clippy::cast_possible_wrap)]

pub mod canvas;
pub mod cli;
pub mod command;
pub mod console;
pub mod session;

pub use cli::Cli;
pub use command::{Input, ParseCommandError};
pub use session::{run, runtime, Session};
