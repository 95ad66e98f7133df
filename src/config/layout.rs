//! Display and layout configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! The dashboard grid mirrors a 12-column layout: progress bars take the left
//! 8 columns, thermometers the right 4, and the pixel bar spans the bottom row.
//! Every rectangle below is `const` so nothing is re-derived per frame.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ [All][P1][P2][P3][P4]                                   [≡]  │  48px
//! ├────────────────────────────────────────────┬────────┬────────┤
//! │  AFR ████████████░░░░░░░░                  │        │        │
//! ├────────────────────────────────────────────┤ Intake │  Oil   │
//! │  MAP ██████████░░░░░░░░░░                  │  ▓▓▓   │  ▓▓▓   │  312px
//! ├────────────────────────────────────────────┤  ▓▓▓   │  ▓▓▓   │
//! │  Absolute Load ███████░░░░░                │        │        │
//! ├────────────────────────────────────────────┴────────┴────────┤
//! │  Throttle Position ▮▮▮▮▮▮▮▮▮▮▮▮▮▮▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯▯   │  96px
//! └──────────────────────────────────────────────────────────────┘
//! ```

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

// =============================================================================
// Display Configuration
// =============================================================================

/// Logical canvas width in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Logical canvas height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// The whole canvas as a rectangle.
pub const SCREEN_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Spacing
// =============================================================================

/// Outer margin around the content area.
pub const MARGIN: u32 = 8;

/// Gap between neighbouring gauge panels.
pub const GAP: u32 = 8;

/// Inner padding of a gauge panel.
pub const PANEL_PADDING: u32 = 12;

/// Corner radius of gauge panels.
pub const PANEL_RADIUS: u32 = 8;

// =============================================================================
// Top Bar
// =============================================================================

/// Height of the preset/menu bar on the dashboard.
pub const TOP_BAR_HEIGHT: u32 = 48;

/// Preset button size (`All`, `P1`..`P4`).
pub const PRESET_BUTTON_SIZE: Size = Size::new(48, 32);

/// Horizontal distance between preset buttons.
pub const PRESET_BUTTON_STRIDE: i32 = 56;

/// Menu button (opens settings) in the top-right corner.
pub const MENU_BUTTON: Rectangle = Rectangle::new(
    Point::new((SCREEN_WIDTH - MARGIN - 36) as i32, 6),
    Size::new(36, 36),
);

/// Number of preset buttons including `All`.
pub const PRESET_BUTTON_COUNT: u8 = 5;

/// Rectangle of preset button `index` (0 = `All`).
pub const fn preset_button(index: u8) -> Rectangle {
    Rectangle::new(
        Point::new(MARGIN as i32 + index as i32 * PRESET_BUTTON_STRIDE, 8),
        PRESET_BUTTON_SIZE,
    )
}

// =============================================================================
// Content Area
// =============================================================================

/// Left edge of the gauge area.
pub const CONTENT_X: i32 = MARGIN as i32;

/// Top edge of the gauge area (below the top bar).
pub const CONTENT_Y: i32 = (TOP_BAR_HEIGHT + MARGIN) as i32;

/// Width of the gauge area.
pub const CONTENT_WIDTH: u32 = SCREEN_WIDTH - 2 * MARGIN;

/// Height of the gauge area.
pub const CONTENT_HEIGHT: u32 = SCREEN_HEIGHT - TOP_BAR_HEIGHT - 2 * MARGIN;

// =============================================================================
// Default Layout (12-column grid)
// =============================================================================

/// Width of one of the 12 grid columns.
pub const GRID_COL_WIDTH: u32 = (CONTENT_WIDTH - 11 * GAP) / 12;

/// Width of the left 8-column block (progress bars).
pub const LEFT_WIDTH: u32 = 8 * GRID_COL_WIDTH + 7 * GAP;

/// Left edge of the right 4-column block (thermometers).
pub const RIGHT_X: i32 = CONTENT_X + (LEFT_WIDTH + GAP) as i32;

/// Width of the right 4-column block.
pub const RIGHT_WIDTH: u32 = 4 * GRID_COL_WIDTH + 3 * GAP;

/// Height of the bottom pixel-bar row.
pub const PIXEL_ROW_HEIGHT: u32 = 96;

/// Height of the upper block (progress bars + thermometers).
pub const UPPER_HEIGHT: u32 = CONTENT_HEIGHT - PIXEL_ROW_HEIGHT - GAP;

/// Height of one progress-bar row (three rows stacked).
pub const PROGRESS_ROW_HEIGHT: u32 = (UPPER_HEIGHT - 2 * GAP) / 3;

/// Width of one thermometer column (two side by side).
pub const THERMO_WIDTH: u32 = (RIGHT_WIDTH - GAP) / 2;

/// Progress bar slot `row` (0..3) in the left block.
pub const fn progress_slot(row: u32) -> Rectangle {
    Rectangle::new(
        Point::new(CONTENT_X, CONTENT_Y + (row * (PROGRESS_ROW_HEIGHT + GAP)) as i32),
        Size::new(LEFT_WIDTH, PROGRESS_ROW_HEIGHT),
    )
}

/// Thermometer slot `col` (0..2) in the right block.
pub const fn thermometer_slot(col: u32) -> Rectangle {
    Rectangle::new(
        Point::new(RIGHT_X + (col * (THERMO_WIDTH + GAP)) as i32, CONTENT_Y),
        Size::new(THERMO_WIDTH, UPPER_HEIGHT),
    )
}

/// Full-width pixel bar slot at the bottom.
pub const PIXEL_SLOT: Rectangle = Rectangle::new(
    Point::new(CONTENT_X, CONTENT_Y + (UPPER_HEIGHT + GAP) as i32),
    Size::new(CONTENT_WIDTH, PIXEL_ROW_HEIGHT),
);

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Segment count of the pixel bar on the default layout.
pub const PIXEL_BAR_SEGMENTS: u16 = 70;

/// Segment count of the pixel bar on the compact layout.
pub const COMPACT_PIXEL_BAR_SEGMENTS: u16 = 20;

/// Gap between pixel bar segments.
pub const PIXEL_SEGMENT_GAP: u32 = 2;

/// Height of the pixel bar segments.
pub const PIXEL_SEGMENT_HEIGHT: u32 = 24;

/// Height of the progress bar track.
pub const PROGRESS_TRACK_HEIGHT: u32 = 12;

/// Width of the thermometer track.
pub const THERMO_TRACK_WIDTH: u32 = 48;

// =============================================================================
// Settings Screen
// =============================================================================

/// Height of the settings title bar.
pub const SETTINGS_HEADER_HEIGHT: u32 = 64;

/// Close button on the settings screen.
pub const SETTINGS_CLOSE_BUTTON: Rectangle = Rectangle::new(
    Point::new((SCREEN_WIDTH - MARGIN - 40) as i32, 12),
    Size::new(40, 40),
);

// Layout sanity: everything must fit on the canvas
const _: () = assert!(LEFT_WIDTH + GAP + RIGHT_WIDTH == CONTENT_WIDTH);
const _: () = assert!(CONTENT_Y as u32 + CONTENT_HEIGHT + MARGIN == SCREEN_HEIGHT);
const _: () = assert!(PROGRESS_ROW_HEIGHT * 3 + 2 * GAP <= UPPER_HEIGHT);
const _: () = assert!(PRESET_BUTTON_COUNT as i32 * PRESET_BUTTON_STRIDE < MENU_BUTTON.top_left.x);
