//! Visual tests for the full frame.
//! Renders real shell states into an in-memory framebuffer and checks
//! registered components and pixel colours.
//!
//! Run: cargo test -p render --test render_view

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use std::collections::HashMap;

use embedded_graphics::pixelcolor::{Gray4, GrayColor};
use embedded_graphics::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ui::settings::SettingKey;
use ui::{App, Command, ShellConfig, Tab};

/// Gray4 framebuffer that ignores off-screen pixels.
struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Gray4>,
}

impl Framebuffer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Gray4::WHITE; (width * height) as usize],
        }
    }

    fn pixel_at(&self, x: i32, y: i32) -> Option<Gray4> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.pixels.get((y as u32 * self.width + x as u32) as usize).copied()
    }
}

impl DrawTarget for Framebuffer {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height {
                let idx = (p.y as u32 * self.width + p.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

type Components = HashMap<String, ((i32, i32), (u32, u32))>;

fn render(fb: &mut Framebuffer, app: &App<ChaCha8Rng>, now_ms: u64) -> Components {
    let mut regs = Components::new();
    render::render_view_to(fb, &app.view(now_ms), |id, _ty, pos, size| {
        regs.insert(id.to_owned(), (pos, size));
    })
    .unwrap();
    regs
}

fn app() -> App<ChaCha8Rng> {
    App::new(ShellConfig::default(), ChaCha8Rng::seed_from_u64(11))
}

fn connected() -> App<ChaCha8Rng> {
    let mut app = app();
    app.start(0);
    app.advance(1_500);
    app
}

fn with_result() -> App<ChaCha8Rng> {
    let mut app = connected();
    app.start_scan(2_000).unwrap();
    app.advance(5_000);
    app
}

#[test]
fn idle_frame_registers_scan_controls() {
    let mut fb = Framebuffer::new(240, 320);
    let regs = render(&mut fb, &app(), 0);
    for id in ["header", "status-pill", "scan-ring", "scan-button", "nav-scan", "nav-history", "nav-settings"] {
        assert!(regs.contains_key(id), "missing component {id}");
    }
    assert!(!regs.contains_key("toast-banner"));
}

#[test]
fn header_is_dark() {
    let mut fb = Framebuffer::new(240, 320);
    let regs = render(&mut fb, &app(), 0);
    let ((x, y), (w, _)) = regs["header"];
    let dark = (x..x + w as i32).any(|px| fb.pixel_at(px, y + 2).is_some_and(|c| c.luma() < 4));
    assert!(dark, "header band should be dark");
}

#[test]
fn scan_button_greys_out_while_scanning() {
    let mut fb = Framebuffer::new(240, 320);
    let mut app = connected();
    let regs = render(&mut fb, &app, 12_000);
    let ((x, y), (_, h)) = regs["scan-button"];
    assert_eq!(fb.pixel_at(x + 4, y + h as i32 / 2), Some(Gray4::BLACK));

    app.start_scan(12_000).unwrap();
    let regs = render(&mut fb, &app, 12_000);
    let ((x, y), (_, h)) = regs["scan-button"];
    assert_eq!(fb.pixel_at(x + 4, y + h as i32 / 2), Some(render::theme::SURFACE));
}

#[test]
fn result_card_uses_material_tone() {
    let mut fb = Framebuffer::new(240, 320);
    let app = with_result();
    let material = app.result().expect("scan produced a result");
    let regs = render(&mut fb, &app, 20_000);
    for id in ["result-card", "result-swatch", "result-bin", "retry-button", "done-button"] {
        assert!(regs.contains_key(id), "missing component {id}");
    }
    let ((x, y), (w, h)) = regs["result-swatch"];
    let expected = render::theme::gray_for(catalog::lookup(material).swatch);
    assert_eq!(fb.pixel_at(x + w as i32 - 4, y + h as i32 / 2), Some(expected));
}

#[test]
fn banner_shows_while_toast_is_fresh() {
    let mut fb = Framebuffer::new(240, 320);
    let app = with_result();
    let regs = render(&mut fb, &app, 5_000);
    assert!(regs.contains_key("toast-banner"));
    let regs = render(&mut fb, &app, 60_000);
    assert!(!regs.contains_key("toast-banner"));
}

#[test]
fn history_tab_lists_rows_and_tips() {
    let mut fb = Framebuffer::new(240, 400);
    let mut app = app();
    app.handle(Command::SelectTab(Tab::History), 0).unwrap();
    let regs = render(&mut fb, &app, 0);
    let (_, (_, h)) = regs["history-list"];
    assert!(h >= 4 * 22, "all seeded rows fit on a tall display");
    assert!(regs.contains_key("tip-card"));
}

#[test]
fn settings_toggle_reflects_value() {
    let mut fb = Framebuffer::new(240, 320);
    let mut app = app();
    app.handle(Command::SelectTab(Tab::Settings), 0).unwrap();
    let regs = render(&mut fb, &app, 0);
    let ((x, y), (w, h)) = regs["setting-auto-connect"];
    // Track is dark when on.
    assert_eq!(fb.pixel_at(x + w as i32 / 2, y + 1), Some(Gray4::BLACK));

    app.handle(Command::ToggleSetting(SettingKey::AutoConnect), 0).unwrap();
    render(&mut fb, &app, 0);
    assert_eq!(fb.pixel_at(x + w as i32 / 2, y + h as i32 - 2), Some(Gray4::WHITE));
    assert!(regs.contains_key("help-card"));
}

#[test]
fn active_nav_slot_is_filled() {
    let mut fb = Framebuffer::new(240, 320);
    let mut app = app();
    app.handle(Command::SelectTab(Tab::Settings), 0).unwrap();
    let regs = render(&mut fb, &app, 0);
    let ((x, y), _) = regs["nav-settings"];
    assert_eq!(fb.pixel_at(x + 2, y + 2), Some(Gray4::BLACK));
    let ((x, y), _) = regs["nav-scan"];
    assert_eq!(fb.pixel_at(x + 2, y + 2), Some(Gray4::WHITE));
}

#[test]
fn every_body_survives_tiny_displays() {
    let mut a = app();
    let mut b = with_result();
    b.handle(Command::SelectTab(Tab::Scan), 0).unwrap();
    for (w, h) in [(0, 0), (1, 1), (40, 40), (120, 60), (64, 480)] {
        let mut fb = Framebuffer::new(w, h);
        for tab in Tab::ALL {
            a.handle(Command::SelectTab(tab), 0).unwrap();
            render(&mut fb, &a, 0);
        }
        render(&mut fb, &b, 5_000);
    }
}
