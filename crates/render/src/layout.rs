//! Frame regions, derived from the display bounds.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Header bar height.
pub const HEADER_HEIGHT: u32 = 44;
/// Nav bar height.
pub const NAV_HEIGHT: u32 = 32;
/// Inner margin of the body.
pub const MARGIN: u32 = 8;

/// The regions of one frame.
///
/// On displays too small for the fixed bars the regions collapse to zero
/// height instead of overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Top bar.
    pub header: Rectangle,
    /// Area between the bars, inset by [`MARGIN`].
    pub body: Rectangle,
    /// Space the toast overlay may use, from the top of the body down.
    pub banner: Rectangle,
    /// Bottom bar.
    pub nav: Rectangle,
}

impl Frame {
    /// Split `bounds` into header, body and nav bar.
    #[must_use]
    pub fn new(bounds: Rectangle) -> Self {
        let Size { width, height } = bounds.size;
        let origin = bounds.top_left;
        let header_h = HEADER_HEIGHT.min(height);
        let nav_h = NAV_HEIGHT.min(height.saturating_sub(header_h));
        let body_h = height.saturating_sub(header_h).saturating_sub(nav_h);

        let header = Rectangle::new(origin, Size::new(width, header_h));
        let nav = Rectangle::new(
            origin + Point::new(0, (header_h + body_h) as i32),
            Size::new(width, nav_h),
        );
        let body = Rectangle::new(
            origin + Point::new(MARGIN as i32, (header_h + MARGIN) as i32),
            Size::new(
                width.saturating_sub(2 * MARGIN),
                body_h.saturating_sub(2 * MARGIN),
            ),
        );
        let banner = Rectangle::new(
            origin + Point::new(MARGIN as i32, (header_h + 4) as i32),
            Size::new(
                width.saturating_sub(2 * MARGIN),
                body_h.saturating_sub(4),
            ),
        );
        Frame {
            header,
            body,
            banner,
            nav,
        }
    }
}

/// Vertical cursor for stacking elements inside a region.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Left edge.
    pub x: i32,
    /// Next free row.
    pub y: i32,
    /// Usable width.
    pub width: u32,
    /// First row past the region.
    pub bottom: i32,
}

impl Column {
    /// Cursor at the top of `area`.
    #[must_use]
    pub fn new(area: Rectangle) -> Self {
        Column {
            x: area.top_left.x,
            y: area.top_left.y,
            width: area.size.width,
            bottom: area.top_left.y + area.size.height as i32,
        }
    }

    /// Whether `height` more pixels fit.
    #[must_use]
    pub fn fits(&self, height: u32) -> bool {
        self.y + height as i32 <= self.bottom
    }

    /// Claim a full-width strip of `height` pixels.
    pub fn take(&mut self, height: u32) -> Rectangle {
        let rect = Rectangle::new(Point::new(self.x, self.y), Size::new(self.width, height));
        self.y += height as i32;
        rect
    }

    /// Skip `gap` pixels.
    pub fn gap(&mut self, gap: u32) {
        self.y += gap as i32;
    }

    /// Rows left before the bottom edge.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        u32::try_from(self.bottom - self.y).unwrap_or(0)
    }
}
