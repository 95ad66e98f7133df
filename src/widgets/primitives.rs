//! Low-level drawing primitives shared across widgets.
//!
//! The geometry helpers (`inset`, `horizontal_fill`, `vertical_fill`,
//! `segment_rect`) are pure and return the rectangle to paint; the `draw_*`
//! functions paint it. Keeping the math separate makes it testable without a
//! display.
//!
//! # Panel Inset
//!
//! Gauge content is laid out inside the panel rectangle shrunk by
//! [`PANEL_PADDING`](crate::config::layout::PANEL_PADDING) on every side. A
//! rectangle too small to inset collapses to zero size instead of underflowing.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};

use crate::colors::{ALERT, PANEL};
use crate::config::layout::{PANEL_RADIUS, PIXEL_SEGMENT_GAP};
use crate::styles::{BASELINE_LEFT, UNIT_STYLE, text_width};

/// Diameter of the accent dot in front of gauge labels.
pub const ACCENT_DOT_DIAMETER: u32 = 8;

/// Stroke width of the alert ring.
const ALERT_RING_WIDTH: u32 = 3;

/// Space between a value and its unit.
const UNIT_SPACING: i32 = 4;

/// Alert ring stroke style.
const ALERT_RING_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ALERT, ALERT_RING_WIDTH);

/// Gauge panel fill style.
const PANEL_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL);

// =============================================================================
// Geometry
// =============================================================================

/// Shrink `area` by `by` pixels on every side.
pub fn inset(
    area: Rectangle,
    by: u32,
) -> Rectangle {
    let size = Size::new(
        area.size.width.saturating_sub(2 * by),
        area.size.height.saturating_sub(2 * by),
    );
    Rectangle::new(area.top_left + Point::new(by as i32, by as i32), size)
}

/// Fill length for `pct` of `length`, bounded to `0..=length`.
pub fn fill_length(
    pct: f32,
    length: u32,
) -> u32 {
    let filled = (pct / 100.0 * length as f32).round();
    if filled.is_nan() || filled <= 0.0 {
        0
    } else {
        (filled as u32).min(length)
    }
}

/// Left-anchored fill of `track` covering `pct` of its width.
pub fn horizontal_fill(
    track: Rectangle,
    pct: f32,
) -> Rectangle {
    Rectangle::new(
        track.top_left,
        Size::new(fill_length(pct, track.size.width), track.size.height),
    )
}

/// Bottom-anchored fill of `track` covering `pct` of its height.
pub fn vertical_fill(
    track: Rectangle,
    pct: f32,
) -> Rectangle {
    let height = fill_length(pct, track.size.height);
    let top = track.top_left.y + (track.size.height - height) as i32;
    Rectangle::new(Point::new(track.top_left.x, top), Size::new(track.size.width, height))
}

/// Rectangle of segment `index` when `track` is split into `segments` cells.
///
/// Segment edges are spread proportionally so the gap stays exactly
/// [`PIXEL_SEGMENT_GAP`] and the last segment ends flush with the track;
/// widths differ by at most one pixel.
pub fn segment_rect(
    track: Rectangle,
    index: u16,
    segments: u16,
) -> Rectangle {
    let n = u32::from(segments.max(1));
    let i = u32::from(index).min(n - 1);
    let pitch_total = track.size.width + PIXEL_SEGMENT_GAP;
    let start = i * pitch_total / n;
    let next = (i + 1) * pitch_total / n;
    let width = next.saturating_sub(start + PIXEL_SEGMENT_GAP);
    Rectangle::new(
        Point::new(track.top_left.x + start as i32, track.top_left.y),
        Size::new(width, track.size.height),
    )
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw a gauge panel background.
pub fn draw_panel<D>(
    display: &mut D,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new(PANEL_RADIUS, PANEL_RADIUS))
        .into_styled(PANEL_FILL_STYLE)
        .draw(display)
        .ok();
}

/// Draw a red ring just inside the panel border.
pub fn draw_alert_ring<D>(
    display: &mut D,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new(PANEL_RADIUS, PANEL_RADIUS))
        .into_styled(ALERT_RING_STYLE)
        .draw(display)
        .ok();
}

/// Draw a rounded track (or fill) rectangle in `color`.
pub fn draw_bar<D>(
    display: &mut D,
    area: Rectangle,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if area.is_zero_sized() {
        return;
    }
    // Radius must not exceed half the short side or the corners overlap
    let radius = radius.min(area.size.width / 2).min(area.size.height / 2);
    RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw the accent dot with its top-left corner at `top_left`.
pub fn draw_accent_dot<D>(
    display: &mut D,
    top_left: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::new(top_left, ACCENT_DOT_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw `value` followed by `unit`, left-aligned on the baseline at `origin`.
///
/// Returns the total width drawn.
pub fn draw_value_with_unit<D>(
    display: &mut D,
    origin: Point,
    value: &str,
    unit: &str,
    value_style: MonoTextStyle<'_, Rgb565>,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(value, origin, value_style, BASELINE_LEFT)
        .draw(display)
        .ok();
    let value_width = text_width(value_style.font, value);
    if unit.is_empty() {
        return value_width;
    }
    let unit_origin = origin + Point::new(value_width as i32 + UNIT_SPACING, 0);
    Text::with_text_style(unit, unit_origin, UNIT_STYLE, BASELINE_LEFT)
        .draw(display)
        .ok();
    value_width + UNIT_SPACING as u32 + text_width(UNIT_STYLE.font, unit)
}

/// Width [`draw_value_with_unit`] will use, for right-aligning or centering.
pub fn value_with_unit_width(
    value: &str,
    unit: &str,
    value_style: MonoTextStyle<'_, Rgb565>,
) -> u32 {
    let value_width = text_width(value_style.font, value);
    if unit.is_empty() {
        value_width
    } else {
        value_width + UNIT_SPACING as u32 + text_width(UNIT_STYLE.font, unit)
    }
}
