//! render - E-paper front-end for the waste scanner
//!
//! Draws a [`ui::view::View`] onto any `DrawTarget<Color = Gray4>`: the
//! display driver on a device, the emulator window on the desktop, or a
//! framebuffer in tests.
//!
//! # Frame layout
//!
//! ```text
//! +--------------------------------+
//! | header: name, tagline, status  |
//! +--------------------------------+
//! | toast banner (overlay, if any) |
//! | body: scan / result /          |
//! |       history / settings       |
//! +--------------------------------+
//! | nav bar: Scanner Storia Impo.. |
//! +--------------------------------+
//! ```
//!
//! Every interactive or testable element is reported through a registration
//! callback `|id, type, (x, y), (w, h)|` so hit-testing and visual tests can
//! find it without scanning pixels.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
// Rendering casts display dimensions (u32 from embedded-graphics) to i32 for
// coordinate arithmetic. Panels are at most a few hundred pixels per side, so
// the casts cannot wrap and the sums cannot overflow i32.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects
)]

pub mod layout;
pub mod screen;
pub mod theme;
pub mod widgets;

pub use screen::{render_view, render_view_to};
