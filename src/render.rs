//! Frame composition and repaint tracking.
//!
//! Any state change (telemetry tick, view transition) marks the frame dirty;
//! a dirty frame is repainted in full. There is no partial update: gauge
//! values move on every tick and the settings overlay covers the whole canvas,
//! so a full clear + redraw is both simpler and free of remnants.
//!
//! # Update Strategy
//!
//! | Trigger | Effect |
//! |---------|--------|
//! | First frame | full repaint |
//! | Telemetry tick | full repaint |
//! | View transition | full repaint |
//! | Nothing changed | no drawing at all |

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::colors::BACKGROUND;
use crate::config::DashboardConfig;
use crate::gauge::GaugeDescriptor;
use crate::layout::{arrange, visible_channels};
use crate::telemetry::ReadingSet;
use crate::view::ViewState;
use crate::widgets::{draw_gauge, draw_settings, draw_top_bar};

// =============================================================================
// Render State
// =============================================================================

/// Tracks whether the canvas needs repainting.
pub struct RenderState {
    /// Whether this is the first frame (nothing drawn yet).
    first_frame: bool,

    /// Whether state changed since the last repaint.
    dirty: bool,

    /// Frames repainted so far.
    frames: u64,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            dirty: false,
            frames: 0,
        }
    }

    /// Check if the next frame must be repainted.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.first_frame || self.dirty }

    /// Request a repaint on the next frame.
    #[inline]
    pub const fn mark_dirty(&mut self) { self.dirty = true; }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Number of repainted frames.
    #[inline]
    pub const fn frames_drawn(&self) -> u64 { self.frames }

    /// Call after a repaint to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.dirty = false;
        self.frames += 1;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Frame Composition
// =============================================================================

/// Repaint the whole canvas for `view`.
///
/// Gauge descriptors are rebuilt from `snapshot` on every call; nothing from
/// the previous frame is reused.
pub fn draw_frame<D>(
    display: &mut D,
    snapshot: &ReadingSet,
    view: ViewState,
    config: &DashboardConfig,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();

    match view {
        ViewState::Settings => draw_settings(display, config),
        ViewState::Dashboard { preset } => {
            draw_top_bar(display, preset);

            let (layout, channels) = visible_channels(view, config);
            for slot in arrange(layout, &channels) {
                let descriptor = GaugeDescriptor::build(
                    *snapshot.get(slot.channel),
                    config.channel(slot.channel),
                    slot.kind,
                    config.units,
                );
                draw_gauge(display, &descriptor, slot.area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{ALERT, PANEL, SELECTED};
    use crate::config::layout::{PIXEL_SLOT, preset_button, progress_slot};
    use crate::telemetry::TelemetryState;
    use crate::test_support::TestCanvas;
    use crate::view::PresetIndex;

    fn dashboard(n: u8) -> ViewState {
        ViewState::Dashboard {
            preset: PresetIndex::clamped(n),
        }
    }

    // -------------------------------------------------------------------------
    // RenderState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame(), "is_first_frame should be true initially");
        assert!(state.needs_redraw(), "first frame must be drawn");
        assert_eq!(state.frames_drawn(), 0);
    }

    #[test]
    fn test_render_state_clean_after_frame() {
        let mut state = RenderState::new();
        state.end_frame();
        assert!(!state.needs_redraw(), "nothing changed since the first frame");
        assert_eq!(state.frames_drawn(), 1);
    }

    #[test]
    fn test_mark_dirty_requests_redraw() {
        let mut state = RenderState::default();
        state.end_frame();
        state.mark_dirty();
        assert!(state.needs_redraw());
        state.end_frame();
        assert!(!state.needs_redraw());
    }

    // -------------------------------------------------------------------------
    // Frame Composition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_dashboard_frame_draws_panels_and_selected_button() {
        let config = DashboardConfig::default();
        let snapshot = TelemetryState::new(&config, Some(1)).snapshot();
        let mut canvas = TestCanvas::new();

        draw_frame(&mut canvas, &snapshot, dashboard(0), &config);

        assert!(canvas.count_in(progress_slot(0), PANEL) > 0, "AFR panel missing");
        assert!(canvas.count_in(PIXEL_SLOT, PANEL) > 0, "throttle panel missing");
        assert!(canvas.count_in(preset_button(0), SELECTED) > 0, "All button should be selected");
        assert_eq!(canvas.count_in(preset_button(1), SELECTED), 0);
    }

    #[test]
    fn test_preset_hides_channels() {
        let config = DashboardConfig::default();
        let snapshot = TelemetryState::new(&config, Some(1)).snapshot();
        let mut canvas = TestCanvas::new();

        // P2 = intake + oil; the progress rows stay empty
        draw_frame(&mut canvas, &snapshot, dashboard(2), &config);

        assert_eq!(canvas.count_in(progress_slot(0), PANEL), 0, "AFR should be hidden");
        assert_eq!(canvas.count_in(PIXEL_SLOT, PANEL), 0, "throttle should be hidden");
        assert!(canvas.count_in(preset_button(2), SELECTED) > 0);
    }

    #[test]
    fn test_settings_frame_replaces_dashboard() {
        let config = DashboardConfig::default();
        let snapshot = TelemetryState::new(&config, Some(1)).snapshot();
        let mut canvas = TestCanvas::new();

        draw_frame(&mut canvas, &snapshot, dashboard(0), &config);
        draw_frame(&mut canvas, &snapshot, ViewState::Settings, &config);

        assert_eq!(canvas.count_in(preset_button(0), SELECTED), 0, "top bar is gone");
        assert!(canvas.count(PANEL) > 0, "settings rows are drawn");
    }

    #[test]
    fn test_warning_draws_alert_color() {
        let config = DashboardConfig::from_toml_str(
            "[[channels]]\nchannel = \"oil_temp\"\nseed = 130.0\nstep = 0.0\n",
        )
        .unwrap();
        let snapshot = TelemetryState::new(&config, Some(1)).snapshot();
        let mut canvas = TestCanvas::new();

        draw_frame(&mut canvas, &snapshot, dashboard(0), &config);
        assert!(canvas.count(ALERT) > 0, "oil at 130C must be drawn in alert color");
    }
}
