// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in gauge geometry
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for canvas coordinates
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is known non-negative
#![allow(clippy::module_name_repetitions)]

//! Simulated engine telemetry dashboard.
//!
//! Six synthetic channels (AFR, MAP, throttle, absolute load, intake and oil
//! temperature) random-walk inside their ranges and are drawn on an 800×480
//! canvas as thermometers, pixel bars, progress bars or numeric blocks. Four
//! configurable presets select which gauges are shown; a settings screen shows
//! the active configuration.
//!
//! # Architecture
//!
//! ```text
//!   keys / clicks ──► input ──► view (Dashboard{preset} ⇄ Settings)
//!                                  │
//!   TickSchedule ──► telemetry ────┤
//!                      │ snapshot  ▼
//!                      └──────► render ──► layout ──► gauge ──► widgets ──► DrawTarget
//! ```
//!
//! [`session::Session`] owns all state and is driven from a single thread by
//! the host loop (the `dashboard` binary runs it in an SDL simulator window).
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `1`-`4` | Select preset `P1`-`P4` |
//! | `Escape` | Back to "All" / close settings |
//! | `M` | Open settings |
//!
//! # Modules
//!
//! - [`config`]: layout and timing constants, runtime [`config::DashboardConfig`]
//! - [`telemetry`]: channels, readings and the random-walk state holder
//! - [`gauge`]: reading → visual encoding (pure)
//! - [`layout`]: gauge placement per preset layout
//! - [`view`] / [`input`]: view state machine and its input router
//! - [`render`] / [`widgets`]: frame composition and drawing
//! - [`session`]: the single-threaded event entry points

pub mod colors;
pub mod config;
pub mod error;
pub mod gauge;
pub mod input;
pub mod layout;
pub mod render;
pub mod session;
pub mod styles;
pub mod telemetry;
pub mod thresholds;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod test_support;

pub use config::DashboardConfig;
pub use error::DashError;
pub use session::Session;
