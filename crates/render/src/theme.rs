//! Palette and fonts.
//!
//! Colour fills from the catalog are reduced to 4-bit grey by luma, so each
//! material still gets a distinct tone on e-paper.

use catalog::Swatch;
use embedded_graphics::mono_font::iso_8859_1::{
    FONT_6X10, FONT_6X13_BOLD, FONT_8X13_BOLD, FONT_9X15_BOLD,
};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::{Gray4, GrayColor};

/// Page background.
pub const PAPER: Gray4 = Gray4::WHITE;
/// Primary text and filled controls.
pub const INK: Gray4 = Gray4::BLACK;
/// Secondary text, outlines, disabled captions.
pub const MUTED: Gray4 = Gray4::new(0x8);
/// Card and disabled-button fill.
pub const SURFACE: Gray4 = Gray4::new(0xE);
/// Header bar fill.
pub const HEADER: Gray4 = Gray4::new(0x2);
/// Tagline on the header bar.
pub const HEADER_MUTED: Gray4 = Gray4::new(0xB);

/// Header title.
pub const TITLE_FONT: &MonoFont<'static> = &FONT_9X15_BOLD;
/// Panel headings and material names.
pub const HEADING_FONT: &MonoFont<'static> = &FONT_8X13_BOLD;
/// Buttons, row titles.
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X13_BOLD;
/// Body copy, captions, pills.
pub const BODY_FONT: &MonoFont<'static> = &FONT_6X10;

/// Grey level for an `0xRRGGBB` fill.
#[must_use]
pub fn gray_from_rgb(rgb: u32) -> Gray4 {
    gray_for(Swatch {
        fill: rgb,
        light_text: false,
    })
}

/// Grey level for a catalog swatch.
#[must_use]
pub fn gray_for(swatch: Swatch) -> Gray4 {
    Gray4::new(swatch.luma() >> 4)
}

/// Readable text colour on top of `fill`.
#[must_use]
pub fn text_on(fill: Gray4) -> Gray4 {
    if fill.luma() < 0x8 {
        Gray4::WHITE
    } else {
        Gray4::BLACK
    }
}
