//! Settings screen.
//!
//! A read-only view of the loaded [`DashboardConfig`]: nothing on this screen
//! reacts to input except the close button. Values are formatted into
//! `heapless` buffers, so a frame allocates nothing.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Settings                                                 [X] │
//! ├──────────────────────────────┬───────────────────────────────┤
//! │ Display Units                │ Display Configuration         │
//! │  Temperature       Celsius   │  Brightness             80%   │
//! │  Pressure              Bar   │  Update Frequency      1 Hz   │
//! │ Warning Thresholds           │  [1 Hz][2 Hz][5 Hz][10 Hz]    │
//! │  Intake             > 80.0 °C│ Presets                       │
//! │  AFR          14.0 - 15.0 :1 │  Preset 1   Default, 3 gauges │
//! │  Oil               > 110.0 °C│  ...                          │
//! └──────────────────────────────┴───────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};
use heapless::String;

use crate::colors::{DIVIDER, PANEL, SELECTED, TRACK, WHITE};
use crate::config::layout::{MARGIN, SETTINGS_CLOSE_BUTTON, SETTINGS_HEADER_HEIGHT};
use crate::config::{ChannelSpec, DashboardConfig, DisplayUnits, SCREEN_WIDTH, UPDATE_FREQUENCIES_HZ};
use crate::styles::{BUTTON_STYLE, CENTERED, HEADING_STYLE, TITLE_STYLE, TOP_LEFT, TOP_RIGHT};
use crate::thresholds::WarningSpec;

/// Formatted settings value.
pub type SettingText = String<32>;

// =============================================================================
// Settings Layout Constants
// =============================================================================

/// Width of each of the two columns.
const COLUMN_WIDTH: u32 = (SCREEN_WIDTH - 3 * MARGIN) / 2;

const LEFT_COLUMN_X: i32 = MARGIN as i32;
const RIGHT_COLUMN_X: i32 = (2 * MARGIN + COLUMN_WIDTH) as i32;

/// First section heading.
const FIRST_SECTION_Y: i32 = (SETTINGS_HEADER_HEIGHT + MARGIN) as i32;

const HEADING_HEIGHT: i32 = 24;
const ROW_HEIGHT: u32 = 28;
const ROW_STRIDE: i32 = 32;
const SECTION_GAP: i32 = 12;
const ROW_TEXT_INSET: i32 = 10;

const TITLE_POS: Point = Point::new(MARGIN as i32 + 4, 22);

const DIVIDER_START: Point = Point::new(0, SETTINGS_HEADER_HEIGHT as i32 - 1);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, SETTINGS_HEADER_HEIGHT as i32 - 1);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DIVIDER, 1);

const ROW_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL);
const OPTION_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(TRACK);
const OPTION_SELECTED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SELECTED);
const CLOSE_ICON_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);

const CORNER: Size = Size::new(6, 6);

// =============================================================================
// Value Formatting
// =============================================================================

/// Human-readable threshold in display units, e.g. `"> 110.0 °C"` or
/// `"14.0 - 15.0 :1"`.
pub fn warning_text(
    spec: &ChannelSpec,
    units: DisplayUnits,
) -> SettingText {
    let warning = spec.warning.map_limits(|limit| units.convert(spec, limit).0);
    let (_, unit) = units.convert(spec, 0.0);
    let d = usize::from(spec.decimals);
    let mut text = SettingText::new();
    let _ = match warning {
        WarningSpec::None => write!(text, "off"),
        WarningSpec::Above(limit) => write!(text, "> {limit:.d$} {unit}"),
        WarningSpec::Below(limit) => write!(text, "< {limit:.d$} {unit}"),
        WarningSpec::Outside { low, high } => write!(text, "{low:.d$} - {high:.d$} {unit}"),
    };
    text
}

/// Update frequency option closest to the configured tick rate.
fn selected_frequency(config: &DashboardConfig) -> Option<u32> {
    let hz = config.update_frequency_hz();
    UPDATE_FREQUENCIES_HZ
        .into_iter()
        .find(|&option| (option as f32 - hz).abs() < 0.01)
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the settings screen for `config`.
pub fn draw_settings<D>(
    display: &mut D,
    config: &DashboardConfig,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display);

    // Left column: units and thresholds
    let mut y = FIRST_SECTION_Y;
    y = draw_heading(display, LEFT_COLUMN_X, y, "Display Units");
    y = draw_row(display, LEFT_COLUMN_X, y, "Temperature", config.units.temperature.label());
    y = draw_row(display, LEFT_COLUMN_X, y, "Pressure", config.units.pressure.label());

    y = draw_heading(display, LEFT_COLUMN_X, y + SECTION_GAP, "Warning Thresholds");
    for spec in config.channels().filter(|spec| spec.warning != WarningSpec::None) {
        let value = warning_text(spec, config.units);
        y = draw_row(display, LEFT_COLUMN_X, y, &spec.label, &value);
    }

    // Right column: display configuration and presets
    let mut y = FIRST_SECTION_Y;
    y = draw_heading(display, RIGHT_COLUMN_X, y, "Display Configuration");

    let mut brightness = SettingText::new();
    let _ = write!(brightness, "{}%", config.brightness);
    y = draw_row(display, RIGHT_COLUMN_X, y, "Brightness", &brightness);

    let mut frequency = SettingText::new();
    let _ = write!(frequency, "{:.1} Hz", config.update_frequency_hz());
    y = draw_row(display, RIGHT_COLUMN_X, y, "Update Frequency", &frequency);
    y = draw_frequency_options(display, RIGHT_COLUMN_X, y, selected_frequency(config));

    y = draw_heading(display, RIGHT_COLUMN_X, y + SECTION_GAP, "Presets");
    for preset in &config.presets {
        let mut summary = SettingText::new();
        let _ = write!(summary, "{}, {} gauges", preset.layout.label(), preset.channels.len());
        y = draw_row(display, RIGHT_COLUMN_X, y, &preset.name, &summary);
    }
}

fn draw_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Settings", TITLE_POS, TITLE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    RoundedRectangle::with_equal_corners(SETTINGS_CLOSE_BUTTON, CORNER)
        .into_styled(OPTION_FILL)
        .draw(display)
        .ok();
    // "X" icon
    let c = SETTINGS_CLOSE_BUTTON.center();
    let r = 8;
    for (from, to) in [
        (Point::new(c.x - r, c.y - r), Point::new(c.x + r, c.y + r)),
        (Point::new(c.x - r, c.y + r), Point::new(c.x + r, c.y - r)),
    ] {
        Line::new(from, to).into_styled(CLOSE_ICON_STYLE).draw(display).ok();
    }

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

/// Returns the y coordinate of the next element.
fn draw_heading<D>(
    display: &mut D,
    x: i32,
    y: i32,
    title: &str,
) -> i32
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(title, Point::new(x, y), HEADING_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
    y + HEADING_HEIGHT
}

/// Label left, value right, on a panel-colored row. Returns the next y.
fn draw_row<D>(
    display: &mut D,
    x: i32,
    y: i32,
    label: &str,
    value: &str,
) -> i32
where
    D: DrawTarget<Color = Rgb565>,
{
    let row = Rectangle::new(Point::new(x, y), Size::new(COLUMN_WIDTH, ROW_HEIGHT));
    RoundedRectangle::with_equal_corners(row, CORNER)
        .into_styled(ROW_FILL)
        .draw(display)
        .ok();

    let text_y = y + 8;
    Text::with_text_style(label, Point::new(x + ROW_TEXT_INSET, text_y), BUTTON_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
    let value_x = x + COLUMN_WIDTH as i32 - ROW_TEXT_INSET;
    Text::with_text_style(value, Point::new(value_x, text_y), BUTTON_STYLE, TOP_RIGHT)
        .draw(display)
        .ok();
    y + ROW_STRIDE
}

/// The 1/2/5/10 Hz option buttons. Returns the next y.
fn draw_frequency_options<D>(
    display: &mut D,
    x: i32,
    y: i32,
    selected: Option<u32>,
) -> i32
where
    D: DrawTarget<Color = Rgb565>,
{
    let count = UPDATE_FREQUENCIES_HZ.len() as u32;
    let width = (COLUMN_WIDTH - (count - 1) * MARGIN) / count;
    for (i, hz) in (0u32..).zip(UPDATE_FREQUENCIES_HZ) {
        let button = Rectangle::new(
            Point::new(x + (i * (width + MARGIN)) as i32, y),
            Size::new(width, ROW_HEIGHT),
        );
        let fill = if selected == Some(hz) { OPTION_SELECTED_FILL } else { OPTION_FILL };
        RoundedRectangle::with_equal_corners(button, CORNER)
            .into_styled(fill)
            .draw(display)
            .ok();

        let mut caption: String<8> = String::new();
        let _ = write!(caption, "{hz} Hz");
        Text::with_text_style(&caption, button.center(), BUTTON_STYLE, CENTERED)
            .draw(display)
            .ok();
    }
    y + ROW_STRIDE
}
