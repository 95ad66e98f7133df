//! Gauge widgets: one drawing routine per [`GaugeVisual`] variant.
//!
//! Every gauge sits on a rounded panel and starts with a header row (accent
//! dot + label). The accent dot and label turn red when the channel warns,
//! whatever the visual kind.
//!
//! ```text
//! Progress bar                     Thermometer   Block
//! ┌──────────────────────────────┐ ┌────────┐    ┌──────────────┐
//! │ ● AFR                14.7 :1 │ │ ● Oil  │    │ ● AFR        │
//! │ ██████████████░░░░░░░░░░░░░░ │ │  ░░░░  │    │              │
//! └──────────────────────────────┘ │  ████  │    │    14.7 :1   │
//!                                  │  ████  │    │              │
//! Pixel bar                        │ 90.0°C │    └──────────────┘
//! ┌──────────────────────────────┐ └────────┘
//! │ ● Throttle Position   15.0 % │
//! │ ▮▮▮▮▮▮▮▮▮▮▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯ │
//! └──────────────────────────────┘
//! ```

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};

use super::primitives::{
    ACCENT_DOT_DIAMETER,
    draw_accent_dot,
    draw_alert_ring,
    draw_bar,
    draw_panel,
    draw_value_with_unit,
    horizontal_fill,
    inset,
    segment_rect,
    value_with_unit_width,
    vertical_fill,
};
use crate::colors::{TRACK, WHITE};
use crate::config::layout::{PANEL_PADDING, PIXEL_SEGMENT_HEIGHT, PROGRESS_TRACK_HEIGHT, THERMO_TRACK_WIDTH};
use crate::gauge::{GaugeDescriptor, GaugeVisual, accent_color, segment_color};
use crate::styles::{BLOCK_VALUE_STYLE, LABEL_FONT, TOP_LEFT, VALUE_STYLE};

/// Height reserved for the header row (dot + label).
const HEADER_ROW_HEIGHT: u32 = 16;

/// Space between the accent dot and the label.
const LABEL_OFFSET: i32 = ACCENT_DOT_DIAMETER as i32 + 6;

/// Height reserved under the thermometer tube for the value.
const THERMO_VALUE_HEIGHT: u32 = 28;

/// Corner radius of progress and thermometer tracks.
const TRACK_RADIUS: u32 = 6;

// =============================================================================
// Track Geometry
// =============================================================================

/// Progress bar track along the bottom of the panel content.
pub fn progress_track(content: Rectangle) -> Rectangle {
    let height = PROGRESS_TRACK_HEIGHT.min(content.size.height);
    Rectangle::new(
        Point::new(content.top_left.x, bottom(content) - height as i32),
        Size::new(content.size.width, height),
    )
}

/// Thermometer tube, centered horizontally between header and value.
pub fn thermometer_track(content: Rectangle) -> Rectangle {
    let width = THERMO_TRACK_WIDTH.min(content.size.width);
    let height = content
        .size
        .height
        .saturating_sub(HEADER_ROW_HEIGHT + THERMO_VALUE_HEIGHT + 8);
    let x = content.top_left.x + (content.size.width - width) as i32 / 2;
    let y = content.top_left.y + HEADER_ROW_HEIGHT as i32 + 8;
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

/// Pixel bar strip along the bottom of the panel content.
pub fn pixel_track(content: Rectangle) -> Rectangle {
    let height = PIXEL_SEGMENT_HEIGHT.min(content.size.height);
    Rectangle::new(
        Point::new(content.top_left.x, bottom(content) - height as i32),
        Size::new(content.size.width, height),
    )
}

/// Y coordinate just past the last row of `rect`.
fn bottom(rect: Rectangle) -> i32 { rect.top_left.y + rect.size.height as i32 }

/// X coordinate just past the last column of `rect`.
fn right(rect: Rectangle) -> i32 { rect.top_left.x + rect.size.width as i32 }

// =============================================================================
// Gauge Drawing
// =============================================================================

/// Draw one gauge into the panel rectangle `area`.
pub fn draw_gauge<D>(
    display: &mut D,
    gauge: &GaugeDescriptor<'_>,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, area);
    let content = inset(area, PANEL_PADDING);
    draw_header_row(display, gauge, content);

    match gauge.visual() {
        GaugeVisual::Thermometer { fill_pct, color } => {
            let tube = thermometer_track(content);
            draw_bar(display, tube, TRACK_RADIUS, TRACK);
            draw_bar(display, vertical_fill(tube, fill_pct), TRACK_RADIUS, color);
            if gauge.shows_value() {
                let baseline = bottom(content) - 6;
                draw_centered_value(display, gauge, content, baseline, VALUE_STYLE);
            }
            if gauge.warning {
                draw_alert_ring(display, area);
            }
        }
        GaugeVisual::ProgressBar { fill_pct, color } => {
            let track = progress_track(content);
            draw_bar(display, track, TRACK_RADIUS, TRACK);
            draw_bar(display, horizontal_fill(track, fill_pct), TRACK_RADIUS, color);
            if gauge.shows_value() {
                draw_header_value(display, gauge, content);
            }
        }
        GaugeVisual::PixelBar { active, segments } => {
            let strip = pixel_track(content);
            for i in 0..segments {
                draw_bar(display, segment_rect(strip, i, segments), 1, segment_color(i, active, segments));
            }
            if gauge.shows_value() {
                draw_header_value(display, gauge, content);
            }
        }
        GaugeVisual::Block { alert_ring } => {
            let baseline = content.center().y + 10;
            draw_centered_value(display, gauge, content, baseline, BLOCK_VALUE_STYLE);
            if alert_ring {
                draw_alert_ring(display, area);
            }
        }
    }
}

/// Accent dot and label; both switch to the alert color when warning.
fn draw_header_row<D>(
    display: &mut D,
    gauge: &GaugeDescriptor<'_>,
    content: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let accent = accent_color(gauge.warning);
    draw_accent_dot(display, content.top_left + Point::new(0, 3), accent);

    let label_color = if gauge.warning { accent } else { WHITE };
    let label_style = MonoTextStyle::new(LABEL_FONT, label_color);
    Text::with_text_style(gauge.label, content.top_left + Point::new(LABEL_OFFSET, 0), label_style, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Value + unit right-aligned on the header row.
fn draw_header_value<D>(
    display: &mut D,
    gauge: &GaugeDescriptor<'_>,
    content: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let text = gauge.value_text();
    let width = value_with_unit_width(&text, gauge.unit, VALUE_STYLE);
    let origin = Point::new(right(content) - width as i32, content.top_left.y + 14);
    draw_value_with_unit(display, origin, &text, gauge.unit, VALUE_STYLE);
}

/// Value + unit centered horizontally on `baseline`.
fn draw_centered_value<D>(
    display: &mut D,
    gauge: &GaugeDescriptor<'_>,
    content: Rectangle,
    baseline: i32,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let text = gauge.value_text();
    let width = value_with_unit_width(&text, gauge.unit, style);
    let origin = Point::new(content.center().x - width as i32 / 2, baseline);
    draw_value_with_unit(display, origin, &text, gauge.unit, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{ALERT, GAUGE_NORMAL, ICON_NORMAL, RAMP_AMBER, RAMP_GREEN, RAMP_RED, TEXT_MUTED};
    use crate::config::DashboardConfig;
    use crate::config::layout::{PIXEL_SLOT, progress_slot, thermometer_slot};
    use crate::gauge::GaugeKind;
    use crate::telemetry::{Channel, Reading};
    use crate::test_support::TestCanvas;

    fn draw(
        config: &DashboardConfig,
        channel: Channel,
        value: f32,
        kind: GaugeKind,
        area: Rectangle,
    ) -> TestCanvas {
        let spec = config.channel(channel);
        let reading = Reading::new(channel, value, spec.min, spec.max);
        let gauge = GaugeDescriptor::build(reading, spec, kind, config.units);
        let mut canvas = TestCanvas::new();
        draw_gauge(&mut canvas, &gauge, area);
        canvas
    }

    fn block_area() -> Rectangle { Rectangle::new(Point::new(8, 56), Size::new(256, 204)) }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tracks_inside_content() {
        for area in [progress_slot(0), thermometer_slot(1), PIXEL_SLOT] {
            let content = inset(area, PANEL_PADDING);
            for track in [progress_track(content), thermometer_track(content), pixel_track(content)] {
                assert!(track.top_left.y >= content.top_left.y, "{track:?} above {content:?}");
                assert!(bottom(track) <= bottom(content), "{track:?} below {content:?}");
                assert!(right(track) <= right(content), "{track:?} right of {content:?}");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Kind Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_progress_bar_normal_fill() {
        let config = DashboardConfig::default();
        let area = progress_slot(0);
        let canvas = draw(&config, Channel::Afr, 14.7, GaugeKind::ProgressBar, area);

        let track = progress_track(inset(area, PANEL_PADDING));
        assert!(canvas.count_in(track, GAUGE_NORMAL) > 0, "normal fill expected");
        assert_eq!(canvas.count(ALERT), 0, "14.7 AFR must not draw alert color");
    }

    #[test]
    fn test_progress_bar_warning_fill() {
        let config = DashboardConfig::default();
        let area = progress_slot(0);
        let canvas = draw(&config, Channel::Afr, 13.9, GaugeKind::ProgressBar, area);

        let track = progress_track(inset(area, PANEL_PADDING));
        assert!(canvas.count_in(track, ALERT) > 0, "alert fill expected");
        assert_eq!(canvas.count_in(track, GAUGE_NORMAL), 0);
    }

    #[test]
    fn test_thermometer_fill_and_ring() {
        let config = DashboardConfig::default();
        let area = thermometer_slot(1);

        let warm = draw(&config, Channel::OilTemp, 90.0, GaugeKind::Thermometer, area);
        let tube = thermometer_track(inset(area, PANEL_PADDING));
        assert!(warm.count_in(tube, GAUGE_NORMAL) > 0);
        assert_eq!(warm.count(ALERT), 0);

        let hot = draw(&config, Channel::OilTemp, 130.0, GaugeKind::Thermometer, area);
        assert!(hot.count_in(tube, ALERT) > 0, "hot oil fills red");
        let ring_pixel = hot.pixel(Point::new(area.center().x, area.top_left.y + 1));
        assert_eq!(ring_pixel, Some(ALERT), "alert ring along the panel edge");
    }

    #[test]
    fn test_thermometer_empty_at_minimum() {
        let config = DashboardConfig::default();
        let area = thermometer_slot(0);
        let canvas = draw(&config, Channel::IntakeTemp, 0.0, GaugeKind::Thermometer, area);
        let tube = thermometer_track(inset(area, PANEL_PADDING));
        assert_eq!(canvas.count_in(tube, GAUGE_NORMAL), 0);
    }

    #[test]
    fn test_pixel_bar_half_is_green_only() {
        let config = DashboardConfig::default();
        let kind = GaugeKind::PixelBar { segments: 70 };
        let canvas = draw(&config, Channel::ThrottlePosition, 50.0, kind, PIXEL_SLOT);

        let strip = pixel_track(inset(PIXEL_SLOT, PANEL_PADDING));
        assert!(canvas.count_in(strip, RAMP_GREEN) > 0);
        assert_eq!(canvas.count_in(strip, RAMP_AMBER), 0);
        assert_eq!(canvas.count_in(strip, RAMP_RED), 0);
        assert!(canvas.count_in(strip, TRACK) > 0, "upper half unlit");
    }

    #[test]
    fn test_pixel_bar_full_reaches_red() {
        let config = DashboardConfig::default();
        let kind = GaugeKind::PixelBar { segments: 20 };
        let canvas = draw(&config, Channel::ThrottlePosition, 100.0, kind, block_area());

        let strip = pixel_track(inset(block_area(), PANEL_PADDING));
        assert!(canvas.count_in(strip, RAMP_AMBER) > 0);
        assert!(canvas.count_in(strip, RAMP_RED) > 0);
    }

    #[test]
    fn test_header_accent_follows_warning() {
        let kind = GaugeKind::PixelBar { segments: 70 };
        let content = inset(PIXEL_SLOT, PANEL_PADDING);
        // RAMP_RED == ALERT, so only the header row is inspected
        let header = Rectangle::new(content.top_left, Size::new(content.size.width, HEADER_ROW_HEIGHT));

        let calm = draw(&DashboardConfig::default(), Channel::ThrottlePosition, 50.0, kind, PIXEL_SLOT);
        assert_eq!(calm.count_in(header, ALERT), 0);
        assert!(calm.count_in(header, ICON_NORMAL) > 0, "normal accent dot");

        let config = DashboardConfig::from_toml_str(
            "[[channels]]\nchannel = \"throttle_position\"\nwarning = { above = 10.0 }\n",
        )
        .unwrap();
        let warned = draw(&config, Channel::ThrottlePosition, 50.0, kind, PIXEL_SLOT);
        assert!(warned.count_in(header, ALERT) > 0, "accent dot and label turn red");
        assert_eq!(warned.count_in(header, ICON_NORMAL), 0);
        assert!(warned.count_in(header, WHITE) < calm.count_in(header, WHITE), "label no longer white");
    }

    #[test]
    fn test_block_ring_only_when_warning() {
        let config = DashboardConfig::default();
        let edge = Point::new(block_area().center().x, block_area().top_left.y + 1);

        let ok = draw(&config, Channel::Afr, 14.7, GaugeKind::Block, block_area());
        assert_ne!(ok.pixel(edge), Some(ALERT));

        let lean = draw(&config, Channel::Afr, 16.0, GaugeKind::Block, block_area());
        assert_eq!(lean.pixel(edge), Some(ALERT));
    }

    #[test]
    fn test_hidden_value_draws_no_unit() {
        let mut config = DashboardConfig::from_toml_str("[[channels]]\nchannel = \"map\"\nshow_value = false\n").unwrap();
        let canvas = draw(&config, Channel::Map, 1.0, GaugeKind::ProgressBar, progress_slot(1));
        assert_eq!(canvas.count(TEXT_MUTED), 0, "unit text should be hidden");

        config = DashboardConfig::default();
        let canvas = draw(&config, Channel::Map, 1.0, GaugeKind::ProgressBar, progress_slot(1));
        assert!(canvas.count(TEXT_MUTED) > 0, "unit text should be drawn");
    }

    #[test]
    fn test_degenerate_range_draws_empty() {
        let config = DashboardConfig::default();
        let spec = config.channel(Channel::Map);
        let reading = Reading::new(Channel::Map, 5.0, 5.0, 5.0);
        let gauge = GaugeDescriptor::build(reading, spec, GaugeKind::ProgressBar, config.units);

        let mut canvas = TestCanvas::new();
        draw_gauge(&mut canvas, &gauge, progress_slot(1));
        let track = progress_track(inset(progress_slot(1), PANEL_PADDING));
        assert_eq!(canvas.count_in(track, GAUGE_NORMAL), 0, "degenerate range draws as 0%");
    }
}
