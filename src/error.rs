//! Error types for the dashboard core and its configuration.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::telemetry::Channel;

/// Errors raised by gauge math, view dispatch and configuration loading.
///
/// None of these reach the display as a crash: the renderer falls back to an
/// empty gauge, the dispatcher falls back to the `All` preset, and invalid
/// configuration is rejected before the first frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashError {
    #[error("degenerate range: min and max are both {0}")]
    DegenerateRange(f32),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f32, max: f32 },

    #[error("seed value {seed} lies outside [{min}, {max}]")]
    InvalidSeed { seed: f32, min: f32, max: f32 },

    #[error("step magnitude must be finite and non-negative, got {0}")]
    InvalidStep(f32),

    #[error("warning window is reversed: low {low} > high {high}")]
    InvalidWarning { low: f32, high: f32 },

    #[error("channel `{channel}`: {source}")]
    Channel {
        channel: Channel,
        #[source]
        source: Box<DashError>,
    },

    #[error("invalid preset index {0}, expected 0..=4")]
    InvalidPresetIndex(u8),

    #[error("at most 4 presets can be configured, got {0}")]
    TooManyPresets(usize),

    #[error("tick interval {0} ms outside 100..=10000 ms")]
    InvalidTickInterval(u64),

    #[error("I/O error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoSource,
    },

    #[error("config parse error: {0}")]
    Parse(String),
}

/// Shared `io::Error` that keeps `DashError` cloneable and comparable.
/// Two sources compare equal when their error kinds match.
#[derive(Debug, Clone)]
pub struct IoSource(Arc<io::Error>);

impl IoSource {
    #[inline]
    pub fn kind(&self) -> io::ErrorKind { self.0.kind() }
}

impl From<io::Error> for IoSource {
    fn from(err: io::Error) -> Self { Self(Arc::new(err)) }
}

impl PartialEq for IoSource {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.kind() == other.kind()
    }
}

impl fmt::Display for IoSource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for IoSource {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { std::error::Error::source(&*self.0) }
}

impl DashError {
    /// Attach the offending channel to a validation error.
    pub fn for_channel(
        self,
        channel: Channel,
    ) -> Self {
        Self::Channel {
            channel,
            source: Box::new(self),
        }
    }
}
