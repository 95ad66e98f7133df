//! Telemetry state: the current reading of every channel and the random walk
//! that keeps them moving.
//!
//! There is no acquisition hardware behind the dashboard. Each channel starts
//! at a configured seed value and every [`TelemetryState::tick`] perturbs it:
//!
//! ```text
//! new = clamp(old + (U(0,1) - 0.5) * step, min, max)
//! ```
//!
//! Channels are independent (no correlation, no momentum). The clamp keeps the
//! `min <= value <= max` invariant that the gauge renderer relies on.
//!
//! `tick()` and `snapshot()` are the only mutation and read entry points, so a
//! host that moves ticking to another thread only has to synchronize there.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::config::DashboardConfig;
use crate::error::DashError;
use crate::gauge::percentage;

/// Number of telemetry channels.
pub const CHANNEL_COUNT: usize = 6;

// =============================================================================
// Channel Keys
// =============================================================================

/// Telemetry channel key.
///
/// Declaration order is the order of [`Channel::ALL`] and of every
/// [`ReadingSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    IntakeTemp,
    Afr,
    Map,
    ThrottlePosition,
    AbsLoad,
    OilTemp,
}

/// Physical quantity of a channel, used for display unit conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Pressure,
    Ratio,
    Percent,
}

impl Channel {
    /// All channels in canonical order.
    pub const ALL: [Self; CHANNEL_COUNT] = [
        Self::IntakeTemp,
        Self::Afr,
        Self::Map,
        Self::ThrottlePosition,
        Self::AbsLoad,
        Self::OilTemp,
    ];

    /// Position of this channel in [`Channel::ALL`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Configuration key (matches the serde representation).
    pub const fn key(self) -> &'static str {
        match self {
            Self::IntakeTemp => "intake_temp",
            Self::Afr => "afr",
            Self::Map => "map",
            Self::ThrottlePosition => "throttle_position",
            Self::AbsLoad => "abs_load",
            Self::OilTemp => "oil_temp",
        }
    }

    pub const fn quantity(self) -> Quantity {
        match self {
            Self::IntakeTemp | Self::OilTemp => Quantity::Temperature,
            Self::Map => Quantity::Pressure,
            Self::Afr => Quantity::Ratio,
            Self::ThrottlePosition | Self::AbsLoad => Quantity::Percent,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Reading
// =============================================================================

/// One channel's bounded value.
///
/// Fields are private so the `min <= value <= max` invariant cannot be broken
/// from outside; every constructor and mutation clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    channel: Channel,
    value: f32,
    min: f32,
    max: f32,
}

impl Reading {
    /// Create a reading, clamping `value` into `[min, max]`.
    ///
    /// `min > max` is a configuration error caught by
    /// [`DashboardConfig::validate`]; here the bounds are taken as given and
    /// the value is pinned to `min`.
    pub fn new(
        channel: Channel,
        value: f32,
        min: f32,
        max: f32,
    ) -> Self {
        Self {
            channel,
            value: clamp(value, min, max),
            min,
            max,
        }
    }

    #[inline]
    pub const fn channel(&self) -> Channel { self.channel }

    #[inline]
    pub const fn value(&self) -> f32 { self.value }

    #[inline]
    pub const fn min(&self) -> f32 { self.min }

    #[inline]
    pub const fn max(&self) -> f32 { self.max }

    /// Position of the value within its range, 0-100.
    pub fn percentage(&self) -> Result<f32, DashError> { percentage(self.value, self.min, self.max) }

    /// Move the value by `delta`, clamped to the range.
    fn nudge(
        &mut self,
        delta: f32,
    ) {
        self.value = clamp(self.value + delta, self.min, self.max);
    }
}

/// `f32::clamp` panics when `min > max`; pin to `min` instead.
fn clamp(
    value: f32,
    min: f32,
    max: f32,
) -> f32 {
    if min > max { min } else { value.clamp(min, max) }
}

// =============================================================================
// Reading Set
// =============================================================================

/// Ordered mapping from [`Channel`] to its [`Reading`], one entry per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingSet {
    readings: [Reading; CHANNEL_COUNT],
}

impl ReadingSet {
    /// Seed a reading set from the configured channel table.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            readings: Channel::ALL.map(|channel| {
                let spec = config.channel(channel);
                Reading::new(channel, spec.seed, spec.min, spec.max)
            }),
        }
    }

    /// Reading of `channel`.
    #[inline]
    pub fn get(
        &self,
        channel: Channel,
    ) -> &Reading {
        &self.readings[channel.index()]
    }

    /// Readings in channel order.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> { self.readings.iter() }
}

// =============================================================================
// Telemetry State Holder
// =============================================================================

/// Owns the live [`ReadingSet`] and advances it with a bounded random walk.
pub struct TelemetryState {
    readings: ReadingSet,

    /// Per-channel jitter magnitude, indexed like [`Channel::ALL`].
    steps: [f32; CHANNEL_COUNT],

    rng: StdRng,

    /// Ticks applied since creation.
    ticks: u64,
}

impl TelemetryState {
    /// Create the state holder from configuration.
    ///
    /// With `seed = Some(..)` the random walk is reproducible; otherwise the
    /// generator is seeded from OS entropy.
    pub fn new(
        config: &DashboardConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            readings: ReadingSet::from_config(config),
            steps: Channel::ALL.map(|channel| config.channel(channel).step),
            rng,
            ticks: 0,
        }
    }

    /// Advance every channel by one random perturbation step.
    pub fn tick(&mut self) {
        for (reading, step) in self.readings.readings.iter_mut().zip(self.steps) {
            let jitter = self.rng.gen_range(0.0f32..1.0) - 0.5;
            reading.nudge(jitter * step);
        }
        self.ticks = self.ticks.wrapping_add(1);
        tracing::trace!(ticks = self.ticks, "telemetry tick");
    }

    /// Read-only copy of the current readings.
    pub fn snapshot(&self) -> ReadingSet { self.readings.clone() }

    /// Number of ticks applied so far.
    #[inline]
    pub const fn tick_count(&self) -> u64 { self.ticks }
}
