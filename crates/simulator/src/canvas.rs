//! Offscreen Gray4 canvas for e-paper snapshots.

use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::{Gray4, GrayColor};
use embedded_graphics::prelude::*;
use image::{GrayImage, Luma};

/// Panel width of the target device.
pub const DISPLAY_WIDTH: u32 = 240;
/// Panel height of the target device.
pub const DISPLAY_HEIGHT: u32 = 320;

/// In-memory framebuffer. Pixels outside the bounds are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Gray4>,
}

impl Canvas {
    /// White canvas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            pixels: vec![Gray4::WHITE; len],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)
    }

    /// Colour at `(x, y)`, if inside the canvas.
    #[must_use]
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Gray4> {
        self.index(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// 8-bit greyscale copy (0..15 stretched to 0..255).
    #[must_use]
    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width, self.height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let luma = self
                .pixel_at(x as i32, y as i32)
                .map_or(0xFF, |c| c.luma().saturating_mul(17));
            *px = Luma([luma]);
        }
        img
    }

    /// Write the canvas as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_image()
            .save(path)
            .with_context(|| format!("writing snapshot {}", path.display()))
    }
}

impl DrawTarget for Canvas {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(slot) = self
                .index(point.x, point.y)
                .and_then(|i| self.pixels.get_mut(i))
            {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_draw_and_read_back() {
        let mut canvas = Canvas::new(8, 4);
        Rectangle::new(Point::new(2, 1), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
            .draw(&mut canvas)
            .expect("infallible");
        assert_eq!(canvas.pixel_at(2, 1), Some(Gray4::BLACK));
        assert_eq!(canvas.pixel_at(0, 0), Some(Gray4::WHITE));
        assert_eq!(canvas.pixel_at(8, 0), None);
        assert_eq!(canvas.pixel_at(-1, 0), None);
    }

    #[test]
    fn test_off_canvas_pixels_are_dropped() {
        let mut canvas = Canvas::new(4, 4);
        Rectangle::new(Point::new(-10, -10), Size::new(30, 30))
            .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
            .draw(&mut canvas)
            .expect("infallible");
        assert_eq!(canvas.pixel_at(3, 3), Some(Gray4::BLACK));
    }

    #[test]
    fn test_image_stretches_levels() {
        let mut canvas = Canvas::new(2, 1);
        Pixel(Point::new(0, 0), Gray4::BLACK)
            .draw(&mut canvas)
            .expect("infallible");
        let img = canvas.to_image();
        assert_eq!(img.get_pixel(0, 0), &Luma([0]));
        assert_eq!(img.get_pixel(1, 0), &Luma([255]));
    }

    #[test]
    fn test_save_png_round_trips_size() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("frame.png");
        Canvas::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
            .save_png(&path)
            .expect("png written");
        let img = image::open(&path).expect("png readable");
        assert_eq!(img.width(), DISPLAY_WIDTH);
        assert_eq!(img.height(), DISPLAY_HEIGHT);
    }
}
