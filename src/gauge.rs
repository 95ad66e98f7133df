//! Gauge model: maps a bounded reading onto one of four visual encodings.
//!
//! Everything here is pure. [`GaugeDescriptor`] is rebuilt from the current
//! snapshot on every frame and [`GaugeDescriptor::visual`] turns it into a
//! [`GaugeVisual`] that the widgets in [`crate::widgets`] draw.
//!
//! # Percentage
//!
//! ```text
//! pct = (value - min) / (max - min) * 100
//! ```
//!
//! The renderer does not clamp; the state holder's clamp is what keeps the
//! result in `0..=100`. A channel with `min == max` has no defined percentage:
//! [`percentage`] returns [`DashError::DegenerateRange`]. Configuration with
//! such a channel is rejected at load time, and if one still reaches the
//! renderer it is drawn as 0 % with a warning in the log.
//!
//! # Pixel Bar Ramp
//!
//! Active segments are colored by *position*, not by the warning flag:
//!
//! | Segment index | Color |
//! |---------------|-------|
//! | `< 50%` of segments | green |
//! | `< 80%` of segments | amber |
//! | rest | red |

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{ALERT, GAUGE_NORMAL, ICON_NORMAL, RAMP_AMBER, RAMP_GREEN, RAMP_RED, TRACK};
use crate::config::{ChannelSpec, DisplayUnits};
use crate::error::DashError;
use crate::telemetry::Reading;

/// Fraction of pixel bar segments drawn green.
const RAMP_GREEN_END: f32 = 0.5;

/// Fraction of pixel bar segments drawn green or amber.
const RAMP_AMBER_END: f32 = 0.8;

/// Formatted value text (e.g. `"14.7"`).
pub type ValueText = String<16>;

// =============================================================================
// Gauge Kinds
// =============================================================================

/// Visual encoding of a gauge. Each variant carries only what it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeKind {
    /// Vertical track filled from the bottom.
    Thermometer,
    /// Row of discrete segments with a positional color ramp.
    PixelBar { segments: u16 },
    /// Single horizontal fill.
    ProgressBar,
    /// Numeric readout only.
    Block,
}

/// Drawable result of a [`GaugeDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GaugeVisual {
    Thermometer { fill_pct: f32, color: Rgb565 },
    PixelBar { active: u16, segments: u16 },
    ProgressBar { fill_pct: f32, color: Rgb565 },
    Block { alert_ring: bool },
}

// =============================================================================
// Gauge Math
// =============================================================================

/// Position of `value` in `[min, max]` as a percentage (unclamped).
pub fn percentage(
    value: f32,
    min: f32,
    max: f32,
) -> Result<f32, DashError> {
    let span = max - min;
    if span == 0.0 {
        return Err(DashError::DegenerateRange(min));
    }
    Ok((value - min) / span * 100.0)
}

/// Percentage used for drawing: degenerate ranges draw as empty.
pub fn fill_percentage(reading: &Reading) -> f32 {
    match reading.percentage() {
        Ok(pct) => pct,
        Err(err) => {
            tracing::warn!(channel = %reading.channel(), %err, "drawing gauge as 0%");
            0.0
        }
    }
}

/// Number of lit segments: `floor(pct / 100 * segments)`, within `0..=segments`.
pub fn active_segments(
    pct: f32,
    segments: u16,
) -> u16 {
    let lit = (pct / 100.0 * f32::from(segments)).floor();
    if lit.is_nan() || lit <= 0.0 {
        0
    } else {
        (lit as u16).min(segments)
    }
}

/// Ramp color of an active segment at `index`.
pub fn ramp_color(
    index: u16,
    segments: u16,
) -> Rgb565 {
    let i = f32::from(index);
    let n = f32::from(segments);
    if i < n * RAMP_GREEN_END {
        RAMP_GREEN
    } else if i < n * RAMP_AMBER_END {
        RAMP_AMBER
    } else {
        RAMP_RED
    }
}

/// Color of segment `index`, lit or not.
pub fn segment_color(
    index: u16,
    active: u16,
    segments: u16,
) -> Rgb565 {
    if index < active { ramp_color(index, segments) } else { TRACK }
}

/// Fill color for thermometer and progress bar.
#[inline]
pub const fn fill_color(warning: bool) -> Rgb565 { if warning { ALERT } else { GAUGE_NORMAL } }

/// Accent color for the gauge icon dot and label.
#[inline]
pub const fn accent_color(warning: bool) -> Rgb565 { if warning { ALERT } else { ICON_NORMAL } }

// =============================================================================
// Descriptor
// =============================================================================

/// Everything needed to draw one gauge for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeDescriptor<'a> {
    pub reading: Reading,
    pub label: &'a str,
    /// Unit label after display-unit conversion.
    pub unit: &'a str,
    /// Value after display-unit conversion.
    pub display_value: f32,
    pub decimals: u8,
    pub kind: GaugeKind,
    pub warning: bool,
    pub show_value: bool,
}

impl<'a> GaugeDescriptor<'a> {
    /// Build a descriptor for `reading`, evaluating the warning predicate and
    /// converting the displayed number to the configured units.
    ///
    /// The warning predicate and the gauge fill always use native units.
    pub fn build(
        reading: Reading,
        spec: &'a ChannelSpec,
        kind: GaugeKind,
        units: DisplayUnits,
    ) -> Self {
        let native = reading.value();
        let (display_value, unit) = units.convert(spec, native);

        Self {
            reading,
            label: &spec.label,
            unit,
            display_value,
            decimals: spec.decimals,
            kind,
            warning: spec.warning.is_warning(native),
            show_value: spec.show_value,
        }
    }

    /// Compute the visual encoding.
    pub fn visual(&self) -> GaugeVisual {
        match self.kind {
            GaugeKind::Thermometer => GaugeVisual::Thermometer {
                fill_pct: fill_percentage(&self.reading),
                color: fill_color(self.warning),
            },
            GaugeKind::PixelBar { segments } => GaugeVisual::PixelBar {
                active: active_segments(fill_percentage(&self.reading), segments),
                segments,
            },
            GaugeKind::ProgressBar => GaugeVisual::ProgressBar {
                fill_pct: fill_percentage(&self.reading),
                color: fill_color(self.warning),
            },
            GaugeKind::Block => GaugeVisual::Block {
                alert_ring: self.warning,
            },
        }
    }

    /// Value formatted with the channel's fixed decimals.
    pub fn value_text(&self) -> ValueText {
        let mut text = ValueText::new();
        let _ = write!(text, "{:.*}", usize::from(self.decimals), self.display_value);
        text
    }

    /// Whether the numeric value is drawn. Blocks always show it.
    #[inline]
    pub const fn shows_value(&self) -> bool { self.show_value || matches!(self.kind, GaugeKind::Block) }
}
