//! Session: everything one dashboard run owns, behind single-threaded entry
//! points.
//!
//! The host loop feeds input through [`Session::handle_key`] and
//! [`Session::handle_click`], polls [`Session::poll`] with the current time,
//! and calls [`Session::draw`] every frame. Drawing is a no-op unless
//! something changed.
//!
//! # Tick Scheduling
//!
//! [`TickSchedule`] is a plain value: it holds the next due instant and
//! re-arms from the poll time. A stalled loop therefore produces one tick
//! when it resumes, not a burst of catch-up ticks.

use std::time::{Duration, Instant};

use embedded_graphics::{geometry::Point, pixelcolor::Rgb565, prelude::DrawTarget};

use crate::config::DashboardConfig;
use crate::input::{Key, route_click, route_key};
use crate::render::{RenderState, draw_frame};
use crate::telemetry::{ReadingSet, TelemetryState};
use crate::view::{Action, ViewState};

// =============================================================================
// Tick Schedule
// =============================================================================

/// Fixed-interval tick timer without catch-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    next_due: Instant,
}

impl TickSchedule {
    /// First tick is due one `interval` after `now`.
    pub fn new(
        interval: Duration,
        now: Instant,
    ) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns `true` at most once per call when a tick is due, and re-arms
    /// one interval after `now`.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    #[inline]
    pub const fn interval(&self) -> Duration { self.interval }

    /// Time left until the next tick (zero if overdue).
    pub fn time_until_due(
        &self,
        now: Instant,
    ) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

// =============================================================================
// Session
// =============================================================================

/// Owns configuration, telemetry, view state, tick schedule and repaint
/// tracking for one run.
pub struct Session {
    config: DashboardConfig,
    telemetry: TelemetryState,
    view: ViewState,
    schedule: TickSchedule,
    render: RenderState,
}

impl Session {
    /// Start a session at `now`. `seed` makes the telemetry reproducible.
    pub fn new(
        config: DashboardConfig,
        seed: Option<u64>,
        now: Instant,
    ) -> Self {
        tracing::info!(
            tick_ms = config.tick_interval.as_millis() as u64,
            seeded = seed.is_some(),
            "dashboard session started"
        );
        Self {
            telemetry: TelemetryState::new(&config, seed),
            schedule: TickSchedule::new(config.tick_interval, now),
            view: ViewState::default(),
            render: RenderState::new(),
            config,
        }
    }

    /// Route a key press. Returns `true` if the view changed.
    pub fn handle_key(
        &mut self,
        key: Key,
    ) -> bool {
        match route_key(key, self.view) {
            Some(action) => self.dispatch(action),
            None => {
                tracing::trace!(?key, "unmapped key");
                false
            }
        }
    }

    /// Route a pointer click. Returns `true` if the view changed.
    pub fn handle_click(
        &mut self,
        point: Point,
    ) -> bool {
        route_click(point, self.view).is_some_and(|action| self.dispatch(action))
    }

    /// Apply a view action directly.
    pub fn dispatch(
        &mut self,
        action: Action,
    ) -> bool {
        let changed = self.view.dispatch(action);
        if changed {
            self.render.mark_dirty();
        }
        changed
    }

    /// Run the telemetry tick if one is due. Returns `true` if it ran.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> bool {
        if !self.schedule.poll(now) {
            return false;
        }
        self.telemetry.tick();
        self.render.mark_dirty();
        true
    }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.render.needs_redraw() }

    /// Repaint if anything changed. Returns `true` if a frame was drawn.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.render.needs_redraw() {
            return false;
        }
        draw_frame(display, &self.telemetry.snapshot(), self.view, &self.config);
        self.render.end_frame();
        true
    }

    #[inline]
    pub const fn view(&self) -> ViewState { self.view }

    #[inline]
    pub const fn config(&self) -> &DashboardConfig { &self.config }

    #[inline]
    pub const fn schedule(&self) -> &TickSchedule { &self.schedule }

    pub fn snapshot(&self) -> ReadingSet { self.telemetry.snapshot() }

    #[inline]
    pub const fn tick_count(&self) -> u64 { self.telemetry.tick_count() }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::info!(
            ticks = self.telemetry.tick_count(),
            frames = self.render.frames_drawn(),
            "dashboard session closed"
        );
    }
}
