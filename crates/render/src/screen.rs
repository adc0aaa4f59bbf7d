//! Full-frame rendering of a [`View`].

use core::fmt::Write as _;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_text::alignment::HorizontalAlignment;
use ui::settings::SettingKey;
use ui::tab::Tab;
use ui::toast::{Toast, ToastLevel};
use ui::view::{
    Body, Header, HistoryPanel, NavBar, ResultPanel, ScanPanel, SettingsPanel, View,
};

use crate::layout::{Column, Frame};
use crate::theme::{self, HEADER, HEADER_MUTED, INK, MUTED, PAPER, SURFACE};
use crate::widgets::{self, ButtonKind};

const BUTTON_HEIGHT: u32 = 28;
const ROW_HEIGHT: u32 = 22;
const SWATCH_HEIGHT: u32 = 48;

/// Draw `view` onto `display`.
///
/// # Errors
///
/// Returns `D::Error` if any drawing operation fails.
pub fn render_view<D>(display: &mut D, view: &View<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    render_view_to(display, view, |_, _, _, _| {})
}

/// Draw `view` onto `display`, reporting each component to `register` as
/// `(id, type, (x, y), (width, height))`.
///
/// # Errors
///
/// Returns `D::Error` if any drawing operation fails.
pub fn render_view_to<D, F>(display: &mut D, view: &View<'_>, mut register: F) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let bounds = display.bounding_box();
    let frame = Frame::new(bounds);

    display.clear(PAPER)?;
    draw_header(display, &view.header, frame.header, &mut register)?;
    match &view.body {
        Body::Scan(panel) => draw_scan(display, panel, frame.body, &mut register)?,
        Body::Result(panel) => draw_result(display, panel, frame.body, &mut register)?,
        Body::History(panel) => draw_history(display, panel, frame.body, &mut register)?,
        Body::Settings(panel) => draw_settings(display, panel, frame.body, &mut register)?,
    }
    draw_nav(display, &view.nav, frame.nav, &mut register)?;
    if let Some(toast) = &view.banner {
        draw_banner(display, toast, frame.banner, &mut register)?;
    }
    Ok(())
}

fn emit<F>(register: &mut F, id: &str, ty: &str, rect: Rectangle)
where
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    register(
        id,
        ty,
        (rect.top_left.x, rect.top_left.y),
        (rect.size.width, rect.size.height),
    );
}

fn draw_header<D, F>(
    display: &mut D,
    header: &Header,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    area.into_styled(PrimitiveStyle::with_fill(HEADER))
        .draw(display)?;
    emit(register, "header", "Header", area);

    let x = area.top_left.x + 8;
    widgets::label(
        display,
        header.title,
        Point::new(x, area.top_left.y + 6),
        theme::TITLE_FONT,
        PAPER,
    )?;
    widgets::label(
        display,
        header.tagline,
        Point::new(x, area.top_left.y + 26),
        theme::BODY_FONT,
        HEADER_MUTED,
    )?;

    let right = area.top_left.x + area.size.width as i32 - 8;
    let pill = widgets::pill(
        display,
        header.status.label(),
        right,
        area.top_left.y + 6,
        header.status.is_connected(),
    )?;
    emit(register, "status-pill", "Pill", pill);
    Ok(())
}

fn draw_scan<D, F>(
    display: &mut D,
    panel: &ScanPanel,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let mut col = Column::new(area);
    let cx = area.center().x;

    // Ring takes what is left after the button, heading and two hint lines.
    let reserved = BUTTON_HEIGHT + 16 + 15 + 2 * 12 + 16;
    let diameter = area
        .size
        .width
        .min(col.remaining().saturating_sub(reserved))
        .min(120);
    let ring = Rectangle::new(
        Point::new(cx - diameter as i32 / 2, col.y + 8),
        Size::new(diameter, diameter),
    );
    if diameter > 0 {
        let (stroke, width) = if panel.scanning { (INK, 4) } else { (MUTED, 2) };
        Circle::new(ring.top_left, diameter)
            .into_styled(PrimitiveStyle::with_stroke(stroke, width))
            .draw(display)?;
        if panel.scanning {
            Circle::with_center(ring.center(), diameter.saturating_sub(20))
                .into_styled(PrimitiveStyle::with_fill(SURFACE))
                .draw(display)?;
        }
        let font = theme::LABEL_FONT;
        widgets::centered(
            display,
            panel.ring_label,
            cx,
            ring.center().y - font.character_size.height as i32 / 2,
            font,
            INK,
        )?;
    }
    emit(register, "scan-ring", "Ring", ring);
    col.gap(diameter + 16);

    widgets::centered(display, panel.heading, cx, col.y, theme::HEADING_FONT, INK)?;
    col.gap(theme::HEADING_FONT.character_size.height + 4);

    let button_top = col.bottom - BUTTON_HEIGHT as i32;
    let hint_area = Rectangle::new(
        Point::new(col.x, col.y),
        Size::new(col.width, u32::try_from(button_top - 8 - col.y).unwrap_or(0)),
    );
    widgets::paragraph(
        display,
        panel.hint,
        hint_area,
        theme::BODY_FONT,
        MUTED,
        HorizontalAlignment::Center,
    )?;

    let button = Rectangle::new(
        Point::new(col.x, button_top),
        Size::new(col.width, BUTTON_HEIGHT.min(area.size.height)),
    );
    let kind = if panel.button_enabled {
        ButtonKind::Primary
    } else {
        ButtonKind::Disabled
    };
    widgets::button(display, button, panel.button_label, kind)?;
    emit(register, "scan-button", "Button", button);
    Ok(())
}

fn draw_result<D, F>(
    display: &mut D,
    panel: &ResultPanel,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let info = panel.info;
    let fill = theme::gray_for(info.swatch);
    let ink = theme::text_on(fill);
    let mut col = Column::new(area);

    widgets::card(display, area, PAPER, Some(INK))?;
    emit(register, "result-card", "Card", area);

    // Swatch band with pictogram, name and badge.
    let band = col.take(SWATCH_HEIGHT.min(area.size.height));
    band.into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)?;
    emit(register, "result-swatch", "Swatch", band);
    let disc: u32 = 30;
    let letter = info.name.chars().next().unwrap_or('?');
    widgets::glyph_disc(
        display,
        Point::new(band.top_left.x + 8 + disc as i32 / 2, band.center().y),
        disc,
        letter,
        PAPER,
    )?;
    let text_x = band.top_left.x + 16 + disc as i32;
    widgets::label(
        display,
        info.name,
        Point::new(text_x, band.top_left.y + 8),
        theme::HEADING_FONT,
        ink,
    )?;
    widgets::label(
        display,
        panel.badge,
        Point::new(text_x, band.top_left.y + 26),
        theme::BODY_FONT,
        ink,
    )?;

    let inner_x = col.x + 8;
    let inner_w = col.width.saturating_sub(16);
    col.gap(8);
    widgets::label(
        display,
        panel.bin_caption,
        Point::new(inner_x, col.y),
        theme::BODY_FONT,
        MUTED,
    )?;
    col.gap(12);
    let bin = Rectangle::new(
        Point::new(inner_x, col.y),
        Size::new(inner_w, theme::HEADING_FONT.character_size.height),
    );
    widgets::label(display, info.bin, bin.top_left, theme::HEADING_FONT, INK)?;
    emit(register, "result-bin", "Label", bin);
    col.gap(bin.size.height + 8);

    widgets::label(
        display,
        panel.instructions_caption,
        Point::new(inner_x, col.y),
        theme::BODY_FONT,
        MUTED,
    )?;
    col.gap(12);

    // Buttons and disclaimer are pinned to the bottom of the card.
    let disclaimer_h = widgets::paragraph_height(panel.disclaimer, inner_w, theme::BODY_FONT);
    let footer_top = col.bottom - 8 - disclaimer_h as i32 - 6 - BUTTON_HEIGHT as i32;
    let instructions = Rectangle::new(
        Point::new(inner_x, col.y),
        Size::new(inner_w, u32::try_from(footer_top - 6 - col.y).unwrap_or(0)),
    );
    widgets::paragraph(
        display,
        info.instructions,
        instructions,
        theme::BODY_FONT,
        INK,
        HorizontalAlignment::Left,
    )?;

    let half = inner_w.saturating_sub(8) / 2;
    let retry = Rectangle::new(
        Point::new(inner_x, footer_top),
        Size::new(half, BUTTON_HEIGHT),
    );
    let done = Rectangle::new(
        Point::new(inner_x + half as i32 + 8, footer_top),
        Size::new(half, BUTTON_HEIGHT),
    );
    widgets::button(display, retry, panel.retry_label, ButtonKind::Secondary)?;
    widgets::button(display, done, panel.done_label, ButtonKind::Primary)?;
    emit(register, "retry-button", "Button", retry);
    emit(register, "done-button", "Button", done);

    let disclaimer = Rectangle::new(
        Point::new(inner_x, footer_top + BUTTON_HEIGHT as i32 + 6),
        Size::new(inner_w, disclaimer_h),
    );
    widgets::paragraph(
        display,
        panel.disclaimer,
        disclaimer,
        theme::BODY_FONT,
        MUTED,
        HorizontalAlignment::Center,
    )?;
    Ok(())
}

fn draw_history<D, F>(
    display: &mut D,
    panel: &HistoryPanel<'_>,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let mut col = Column::new(area);
    let right = col.x + col.width as i32;

    widgets::label(
        display,
        panel.heading,
        Point::new(col.x, col.y + 2),
        theme::HEADING_FONT,
        INK,
    )?;
    widgets::pill(display, panel.badge, right, col.y, false)?;
    col.gap(24);

    let list_top = col.y;
    let mut when = heapless::String::<32>::new();
    for entry in panel.history.iter() {
        if !col.fits(ROW_HEIGHT) {
            break;
        }
        let row = col.take(ROW_HEIGHT);
        let info = catalog::lookup(entry.category);
        let chip = Rectangle::new(row.top_left + Point::new(0, 3), Size::new(16, 16));
        widgets::card(display, chip, theme::gray_for(info.swatch), Some(INK))?;
        widgets::label(
            display,
            entry.label,
            row.top_left + Point::new(24, 5),
            theme::LABEL_FONT,
            INK,
        )?;
        when.clear();
        // Timestamps are at most "Sessione +" plus a few digits.
        write!(when, "{}", entry.when).ok();
        let w = widgets::text_width(&when, theme::BODY_FONT) as i32;
        widgets::label(
            display,
            &when,
            Point::new(right - w, row.top_left.y + 7),
            theme::BODY_FONT,
            MUTED,
        )?;
    }
    emit(
        register,
        "history-list",
        "List",
        Rectangle::new(
            Point::new(col.x, list_top),
            Size::new(col.width, u32::try_from(col.y - list_top).unwrap_or(0)),
        ),
    );

    col.gap(8);
    if !col.fits(15) {
        return Ok(());
    }
    widgets::label(
        display,
        panel.tips_heading,
        Point::new(col.x, col.y),
        theme::HEADING_FONT,
        INK,
    )?;
    col.gap(18);
    for tip in panel.tips {
        let body_w = col.width.saturating_sub(16);
        let height = 24 + widgets::paragraph_height(tip.body, body_w, theme::BODY_FONT) + 6;
        if !col.fits(height) {
            break;
        }
        let card = col.take(height);
        let fill = theme::gray_from_rgb(tip.fill);
        let ink = theme::text_on(fill);
        widgets::card(display, card, fill, None)?;
        widgets::label(
            display,
            tip.title,
            card.top_left + Point::new(8, 6),
            theme::LABEL_FONT,
            ink,
        )?;
        widgets::paragraph(
            display,
            tip.body,
            Rectangle::new(
                card.top_left + Point::new(8, 24),
                Size::new(body_w, height.saturating_sub(24)),
            ),
            theme::BODY_FONT,
            ink,
            HorizontalAlignment::Left,
        )?;
        emit(register, "tip-card", "Card", card);
        col.gap(6);
    }
    Ok(())
}

fn setting_id(key: SettingKey) -> &'static str {
    match key {
        SettingKey::AutoConnect => "setting-auto-connect",
        SettingKey::RecyclingTips => "setting-recycling-tips",
    }
}

fn draw_settings<D, F>(
    display: &mut D,
    panel: &SettingsPanel,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let mut col = Column::new(area);
    widgets::label(
        display,
        panel.heading,
        Point::new(col.x, col.y),
        theme::HEADING_FONT,
        INK,
    )?;
    col.gap(22);

    for row in &panel.rows {
        if !col.fits(36) {
            return Ok(());
        }
        let rect = col.take(36);
        widgets::label(
            display,
            row.title,
            rect.top_left + Point::new(0, 4),
            theme::LABEL_FONT,
            INK,
        )?;
        widgets::label(
            display,
            row.description,
            rect.top_left + Point::new(0, 20),
            theme::BODY_FONT,
            MUTED,
        )?;
        let switch = Rectangle::new(
            Point::new(rect.top_left.x + rect.size.width as i32 - 30, rect.top_left.y + 10),
            Size::new(30, 16),
        );
        widgets::toggle(display, switch, row.enabled)?;
        emit(register, setting_id(row.key), "Toggle", switch);
        col.gap(4);
    }

    col.gap(8);
    let body_w = col.width.saturating_sub(16);
    let height = 24 + widgets::paragraph_height(panel.help.body, body_w, theme::BODY_FONT) + 6;
    if !col.fits(height) {
        return Ok(());
    }
    let card = col.take(height);
    widgets::card(display, card, SURFACE, Some(MUTED))?;
    widgets::label(
        display,
        panel.help.title,
        card.top_left + Point::new(8, 6),
        theme::LABEL_FONT,
        INK,
    )?;
    widgets::paragraph(
        display,
        panel.help.body,
        Rectangle::new(
            card.top_left + Point::new(8, 24),
            Size::new(body_w, height.saturating_sub(24)),
        ),
        theme::BODY_FONT,
        INK,
        HorizontalAlignment::Left,
    )?;
    emit(register, "help-card", "Card", card);
    Ok(())
}

fn nav_id(tab: Tab) -> &'static str {
    match tab {
        Tab::Scan => "nav-scan",
        Tab::History => "nav-history",
        Tab::Settings => "nav-settings",
    }
}

fn draw_nav<D, F>(
    display: &mut D,
    nav: &NavBar,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    if area.size.height == 0 {
        return Ok(());
    }
    let top = area.top_left.y;
    area.into_styled(PrimitiveStyle::with_stroke(INK, 1))
        .draw(display)?;

    let count = Tab::ALL.len() as u32;
    let slot_w = area.size.width / count;
    for (tab, active) in nav.items() {
        let slot = Rectangle::new(
            Point::new(area.top_left.x + (slot_w * tab.index() as u32) as i32, top),
            Size::new(slot_w, area.size.height),
        );
        let ink = if active {
            slot.into_styled(PrimitiveStyle::with_fill(INK))
                .draw(display)?;
            PAPER
        } else {
            INK
        };
        let font = theme::BODY_FONT;
        widgets::centered(
            display,
            tab.label(),
            slot.center().x,
            slot.center().y - font.character_size.height as i32 / 2,
            font,
            ink,
        )?;
        emit(register, nav_id(tab), "NavItem", slot);
    }
    Ok(())
}

fn draw_banner<D, F>(
    display: &mut D,
    toast: &Toast,
    area: Rectangle,
    register: &mut F,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    if area.size.height == 0 {
        return Ok(());
    }
    let (fill, outline) = match toast.level {
        ToastLevel::Success => (HEADER, None),
        ToastLevel::Error => (INK, Some(PAPER)),
        ToastLevel::Info => (SURFACE, Some(INK)),
    };
    let ink = theme::text_on(fill);
    let font = theme::BODY_FONT;
    let text_w = area.size.width.saturating_sub(24);
    let title_h = widgets::paragraph_height(toast.title, text_w, font);
    let desc_h = toast
        .description
        .map_or(0, |d| widgets::paragraph_height(d, text_w, font));
    let area = Rectangle::new(
        area.top_left,
        Size::new(area.size.width, (title_h + desc_h + 8).min(area.size.height)),
    );
    widgets::card(display, area, fill, outline)?;
    let marker = match toast.level {
        ToastLevel::Success => "+",
        ToastLevel::Error => "!",
        ToastLevel::Info => "i",
    };
    widgets::label(
        display,
        marker,
        area.top_left + Point::new(6, 4),
        theme::LABEL_FONT,
        ink,
    )?;
    let bottom = area.top_left.y + area.size.height as i32;
    let title = Rectangle::new(
        area.top_left + Point::new(18, 4),
        Size::new(text_w, title_h.min(area.size.height)),
    );
    let next = widgets::paragraph(display, toast.title, title, font, ink, HorizontalAlignment::Left)?;
    if let Some(description) = toast.description {
        let rest = Rectangle::new(
            Point::new(title.top_left.x, next),
            Size::new(text_w, u32::try_from(bottom - next).unwrap_or(0)),
        );
        widgets::paragraph(display, description, rest, font, ink, HorizontalAlignment::Left)?;
    }
    emit(register, "toast-banner", "Toast", area);
    Ok(())
}
