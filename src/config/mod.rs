//! Application configuration.
//!
//! - `layout`: canvas dimensions and pre-computed gauge/button rectangles
//! - `file`: runtime [`DashboardConfig`] (channel table, units, presets,
//!   cadence) with its TOML loader
//!
//! Timing constants live here.

pub mod file;
pub mod layout;

use std::time::Duration;

pub use file::{ChannelSpec, DashboardConfig, DisplayUnits, PresetSpec, PressureUnit, TemperatureUnit};
pub use layout::{SCREEN_AREA, SCREEN_HEIGHT, SCREEN_WIDTH};

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time of the simulator loop (~50 FPS event polling).
/// Repaints only happen when state changed.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Default interval between telemetry ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Shortest accepted tick interval (10 Hz).
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

/// Longest accepted tick interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;

/// Update frequencies offered on the settings screen.
pub const UPDATE_FREQUENCIES_HZ: [u32; 4] = [1, 2, 5, 10];

/// Default display brightness shown on the settings screen (percent).
pub const DEFAULT_BRIGHTNESS: u8 = 80;

/// Number of user presets (`P1`..`P4`); preset 0 is always "All".
pub const PRESET_COUNT: usize = 4;

const _: () = assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
const _: () = assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
