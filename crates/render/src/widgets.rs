//! Drawing helpers shared by the panels.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::{Alignment, Baseline, LineHeight, Text, TextStyleBuilder};
use embedded_text::alignment::HorizontalAlignment;
use embedded_text::style::{HeightMode, TextBoxStyle, TextBoxStyleBuilder, VerticalOverdraw};
use embedded_text::TextBox;

use crate::theme::{self, INK, MUTED, PAPER, SURFACE};

/// Corner radius of cards and buttons.
pub const RADIUS: u32 = 4;

/// Pixel width of `text` in `font`.
#[must_use]
pub fn text_width(text: &str, font: &MonoFont<'_>) -> u32 {
    let advance = font.character_size.width + font.character_spacing;
    (text.chars().count() as u32).saturating_mul(advance)
}

/// Single line of text with its top-left corner at `pos`.
pub fn label<D>(
    display: &mut D,
    text: &str,
    pos: Point,
    font: &MonoFont<'_>,
    color: Gray4,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    Text::with_baseline(text, pos, MonoTextStyle::new(font, color), Baseline::Top).draw(display)?;
    Ok(())
}

/// Single line of text horizontally centred on `center_x`, top at `y`.
pub fn centered<D>(
    display: &mut D,
    text: &str,
    center_x: i32,
    y: i32,
    font: &MonoFont<'_>,
    color: Gray4,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(
        text,
        Point::new(center_x, y),
        MonoTextStyle::new(font, color),
        style,
    )
    .draw(display)?;
    Ok(())
}

/// Spacing between wrapped rows.
pub const LINE_GAP: u32 = 2;

fn text_box_style(align: HorizontalAlignment, height_mode: HeightMode, font: &MonoFont<'_>) -> TextBoxStyle {
    TextBoxStyleBuilder::new()
        .alignment(align)
        .height_mode(height_mode)
        .line_height(LineHeight::Pixels(font.character_size.height + LINE_GAP))
        .build()
}

/// A box narrower than one glyph cannot lay out any text.
fn too_narrow(width: u32, font: &MonoFont<'_>) -> bool {
    width < font.character_size.width
}

/// Word-wrapped text inside `area`. Rows that would spill past the bottom
/// are dropped. Returns the row below the last line drawn.
pub fn paragraph<D>(
    display: &mut D,
    text: &str,
    area: Rectangle,
    font: &MonoFont<'_>,
    color: Gray4,
    align: HorizontalAlignment,
) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    if too_narrow(area.size.width, font) {
        return Ok(area.top_left.y);
    }
    let text_box = TextBox::with_textbox_style(
        text,
        area,
        MonoTextStyle::new(font, color),
        text_box_style(
            align,
            HeightMode::ShrinkToText(VerticalOverdraw::FullRowsOnly),
            font,
        ),
    );
    text_box.draw(display)?;
    let bounds = text_box.bounding_box();
    Ok(bounds.top_left.y + bounds.size.height as i32)
}

/// Height `paragraph` needs for all of `text` at `width`.
#[must_use]
pub fn paragraph_height(text: &str, width: u32, font: &MonoFont<'_>) -> u32 {
    if too_narrow(width, font) {
        return 0;
    }
    TextBox::with_textbox_style(
        text,
        Rectangle::new(Point::zero(), Size::new(width, 0)),
        MonoTextStyle::new(font, INK),
        text_box_style(HorizontalAlignment::Left, HeightMode::FitToText, font),
    )
    .bounding_box()
    .size
    .height
}

/// Filled rounded card with an optional outline.
pub fn card<D>(
    display: &mut D,
    rect: Rectangle,
    fill: Gray4,
    outline: Option<Gray4>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let mut style = PrimitiveStyleBuilder::new().fill_color(fill);
    if let Some(stroke) = outline {
        style = style.stroke_color(stroke).stroke_width(1);
    }
    RoundedRectangle::with_equal_corners(rect, Size::new(RADIUS, RADIUS))
        .into_styled(style.build())
        .draw(display)
}

/// Button look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Dark fill, light caption.
    Primary,
    /// Light fill, dark caption, outline.
    Secondary,
    /// Greyed out; ignores presses.
    Disabled,
}

/// Button with a centred caption.
pub fn button<D>(
    display: &mut D,
    rect: Rectangle,
    caption: &str,
    kind: ButtonKind,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let (fill, outline, ink) = match kind {
        ButtonKind::Primary => (INK, None, PAPER),
        ButtonKind::Secondary => (PAPER, Some(INK), INK),
        ButtonKind::Disabled => (SURFACE, Some(MUTED), MUTED),
    };
    card(display, rect, fill, outline)?;
    let font = theme::LABEL_FONT;
    let y = rect.center().y - font.character_size.height as i32 / 2;
    centered(display, caption, rect.center().x, y, font, ink)
}

/// Rounded pill sized to `text`, right edge at `right`, top at `y`.
/// Returns the pill's bounds.
pub fn pill<D>(
    display: &mut D,
    text: &str,
    right: i32,
    y: i32,
    filled: bool,
) -> Result<Rectangle, D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let font = theme::BODY_FONT;
    let size = Size::new(
        text_width(text, font) + 12,
        font.character_size.height + 6,
    );
    let rect = Rectangle::new(Point::new(right - size.width as i32, y), size);
    let (fill, ink) = if filled { (PAPER, INK) } else { (INK, PAPER) };
    let radius = size.height / 2;
    RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(fill)
                .stroke_color(PAPER)
                .stroke_width(1)
                .build(),
        )
        .draw(display)?;
    label(display, text, rect.top_left + Point::new(6, 3), font, ink)?;
    Ok(rect)
}

/// Two-state switch. The knob sits right and the track is dark when on.
pub fn toggle<D>(display: &mut D, rect: Rectangle, on: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let radius = rect.size.height / 2;
    let track = if on { INK } else { PAPER };
    RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(track)
                .stroke_color(INK)
                .stroke_width(1)
                .build(),
        )
        .draw(display)?;
    let knob_d = rect.size.height.saturating_sub(4);
    let knob_x = if on {
        rect.top_left.x + rect.size.width as i32 - 2 - knob_d as i32
    } else {
        rect.top_left.x + 2
    };
    let knob = if on { PAPER } else { MUTED };
    Circle::new(Point::new(knob_x, rect.top_left.y + 2), knob_d)
        .into_styled(PrimitiveStyle::with_fill(knob))
        .draw(display)
}

/// Disc with a letter in it; stands in for the material pictograms.
pub fn glyph_disc<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    letter: char,
    fill: Gray4,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let ink = theme::text_on(fill);
    Circle::with_center(center, diameter)
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(fill)
                .stroke_color(ink)
                .stroke_width(1)
                .build(),
        )
        .draw(display)?;
    let mut buf = [0u8; 4];
    let text: &str = letter.encode_utf8(&mut buf);
    let font = theme::HEADING_FONT;
    centered(
        display,
        text,
        center.x,
        center.y - font.character_size.height as i32 / 2,
        font,
        ink,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_text_width_counts_chars() {
        let font = theme::BODY_FONT;
        assert_eq!(text_width("più", font), 3 * font.character_size.width);
        assert_eq!(text_width("", font), 0);
    }

    #[test]
    fn test_paragraph_height_grows_with_wrapped_rows() {
        let font = theme::BODY_FONT;
        let one = paragraph_height("uno", 24, font);
        let three = paragraph_height("uno due tre", 24, font);
        assert!(one >= font.character_size.height);
        assert!(three > 2 * one);
        assert_eq!(paragraph_height("uno due tre", 240, font), one);
    }

    #[test]
    fn test_paragraph_height_zero_when_no_glyph_fits() {
        let font = theme::BODY_FONT;
        assert_eq!(paragraph_height("uno", 0, font), 0);
        assert_eq!(paragraph_height("uno", font.character_size.width - 1, font), 0);
    }

    #[test]
    fn test_paragraph_drops_rows_past_the_bottom() {
        let font = theme::BODY_FONT;
        let row = font.character_size.height + LINE_GAP;
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let area = Rectangle::new(Point::zero(), Size::new(24, row));
        let next = paragraph(
            &mut display,
            "uno due tre",
            area,
            font,
            INK,
            HorizontalAlignment::Left,
        )
        .unwrap();
        assert!(next <= row as i32);
        let drawn = |y0: i32, y1: i32| {
            (0..24).any(|x| (y0..y1).any(|y| display.get_pixel(Point::new(x, y)).is_some()))
        };
        assert!(drawn(0, row as i32), "first row is drawn");
        assert!(!drawn(row as i32, 64), "rows past the box are dropped");
    }

    #[test]
    fn test_paragraph_in_zero_width_box_draws_nothing() {
        let font = theme::BODY_FONT;
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        let area = Rectangle::new(Point::new(3, 5), Size::new(0, 40));
        let next = paragraph(
            &mut display,
            "uno",
            area,
            font,
            INK,
            HorizontalAlignment::Center,
        )
        .unwrap();
        assert_eq!(next, 5);
        let any = (0..64).any(|x| (0..64).any(|y| display.get_pixel(Point::new(x, y)).is_some()));
        assert!(!any);
    }
}
