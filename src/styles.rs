//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in
//! embedded-graphics 0.8, so every fixed style lives here and widgets only
//! build a style at runtime when the color depends on state (the alert
//! accent on gauge labels).
//!
//! Unit labels use ISO 8859-1 fonts so that `°C` / `°F` render; the large
//! value fonts come from `profont`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        iso_8859_1::{FONT_7X13, FONT_8X13, FONT_9X15_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{TEXT_HEADING, TEXT_MUTED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally, middle baseline. Buttons and block readouts.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, top baseline. Labels and settings rows.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, top baseline. Settings values.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, alphabetic baseline. Value followed by its unit.
pub const BASELINE_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Alphabetic)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Gauge label font. Exposed for dynamic-color label styles.
pub const LABEL_FONT: &MonoFont = &FONT_8X13;

/// Value font for thermometer, progress and pixel bars.
pub const VALUE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Larger value font for block readouts.
pub const BLOCK_VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Unit font (ISO 8859-1 for the degree sign).
pub const UNIT_FONT: &MonoFont = &FONT_7X13;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// White value text.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, WHITE);

/// White block value text.
pub const BLOCK_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(BLOCK_VALUE_FONT, WHITE);

/// Muted unit text.
pub const UNIT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, TEXT_MUTED);

/// Settings screen title.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Settings section heading.
pub const HEADING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15_BOLD, TEXT_HEADING);

/// Button captions and settings row text.
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_8X13, WHITE);

/// Pixel width of `text` in a monospace `font`.
pub fn text_width(
    font: &MonoFont,
    text: &str,
) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    count * font.character_size.width + (count - 1) * font.character_spacing
}
