//! Color palette for the dashboard.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red (0-31), 6 bits green (0-63),
//! 5 bits blue (0-31). The palette is a dark slate theme; values are the
//! 8-bit design colors shifted down (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure white. Value text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Surfaces
// =============================================================================

/// Screen background (#111827).
pub const BACKGROUND: Rgb565 = Rgb565::new(2, 6, 4);

/// Gauge panel and settings row background (#1F2937).
pub const PANEL: Rgb565 = Rgb565::new(3, 10, 6);

/// Unfilled gauge track, idle buttons, input boxes (#374151).
pub const TRACK: Rgb565 = Rgb565::new(6, 16, 10);

/// Divider under the top bar and settings header.
pub const DIVIDER: Rgb565 = PANEL;

// =============================================================================
// Text
// =============================================================================

/// Unit labels (#9CA3AF).
pub const TEXT_MUTED: Rgb565 = Rgb565::new(19, 40, 21);

/// Settings section headings (#D1D5DB).
pub const TEXT_HEADING: Rgb565 = Rgb565::new(26, 53, 27);

// =============================================================================
// Gauge States
// =============================================================================

/// Normal fill for thermometer and progress bar (#3B82F6).
pub const GAUGE_NORMAL: Rgb565 = Rgb565::new(7, 32, 30);

/// Alert fill, alert ring and alert accent (#EF4444).
pub const ALERT: Rgb565 = Rgb565::new(29, 17, 8);

/// Accent dot next to gauge labels when not warning (#60A5FA).
pub const ICON_NORMAL: Rgb565 = Rgb565::new(12, 41, 31);

/// Selected preset button (#2563EB).
pub const SELECTED: Rgb565 = Rgb565::new(4, 24, 29);

// =============================================================================
// Pixel Bar Ramp
// =============================================================================

/// First tier of lit segments (#22C55E).
pub const RAMP_GREEN: Rgb565 = Rgb565::new(4, 49, 11);

/// Second tier of lit segments (#EAB308).
pub const RAMP_AMBER: Rgb565 = Rgb565::new(29, 44, 1);

/// Last tier of lit segments, same red as alerts.
pub const RAMP_RED: Rgb565 = ALERT;
