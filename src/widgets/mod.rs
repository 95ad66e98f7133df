//! Widget components for the telemetry dashboard.
//!
//! - [`gauges`]: the four gauge kinds (thermometer, pixel bar, progress bar, block)
//! - [`top_bar`]: preset buttons and the settings menu button
//! - [`settings`]: the read-only settings screen
//! - [`primitives`]: shared geometry and low-level drawing helpers
//!
//! Every widget is generic over `DrawTarget<Color = Rgb565>`, so the same code
//! draws into the simulator window and into the in-memory canvas used by the
//! tests. Draw errors are discarded with `.ok()`; both targets are infallible.

mod gauges;
mod primitives;
mod settings;
mod top_bar;

pub use gauges::draw_gauge;
pub use settings::{draw_settings, warning_text};
pub use top_bar::draw_top_bar;
