//! Runtime configuration: channel table, display units, presets and cadence.
//!
//! Every key is optional. A missing file, or an empty one, yields
//! [`DashboardConfig::default`], which reproduces the stock dashboard. A file
//! only needs to name what it changes:
//!
//! ```toml
//! tick_interval_ms = 500
//!
//! [units]
//! temperature = "fahrenheit"
//!
//! [[channels]]
//! channel = "oil_temp"
//! max = 160.0
//! warning = { above = 115.0 }
//!
//! [[presets]]
//! name = "Track"
//! layout = "compact"
//! channels = ["afr", "oil_temp", "throttle_position"]
//! ```
//!
//! `[[channels]]` entries override the matching channel; `[[presets]]` entries
//! replace `P1`, `P2`, ... in order.
//!
//! Validation is fail-fast: a degenerate range (`min == max`), a seed outside
//! its range or a reversed warning window rejects the whole file before the
//! first frame is drawn.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::{DEFAULT_BRIGHTNESS, DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, PRESET_COUNT};
use crate::error::DashError;
use crate::layout::Layout;
use crate::telemetry::{CHANNEL_COUNT, Channel, Quantity};
use crate::thresholds::{
    AFR_WARN_HIGH, AFR_WARN_LOW, BAR_TO_PSI, INTAKE_TEMP_WARN, OIL_TEMP_WARN, WarningSpec, celsius_to_fahrenheit,
};

// =============================================================================
// Display Units
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    #[default]
    Bar,
    Psi,
}

impl PressureUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Psi => "PSI",
        }
    }
}

/// Units used for displayed numbers. Gauge fills and warnings stay in native
/// units (°C, bar).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
}

impl DisplayUnits {
    /// Convert a native value of `spec`'s channel into display units.
    /// Returns the converted value and its unit label.
    pub fn convert<'a>(
        self,
        spec: &'a ChannelSpec,
        native: f32,
    ) -> (f32, &'a str) {
        match spec.channel.quantity() {
            Quantity::Temperature if self.temperature == TemperatureUnit::Fahrenheit => {
                (celsius_to_fahrenheit(native), "°F")
            }
            Quantity::Pressure if self.pressure == PressureUnit::Psi => (native * BAR_TO_PSI, "psi"),
            _ => (native, spec.unit.as_str()),
        }
    }
}

// =============================================================================
// Channel Table
// =============================================================================

/// Static description of one telemetry channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSpec {
    pub channel: Channel,
    pub label: String,
    pub unit: String,
    pub min: f32,
    pub max: f32,
    /// Value at session start.
    pub seed: f32,
    /// Random-walk step magnitude per tick.
    pub step: f32,
    pub warning: WarningSpec,
    /// Decimals shown in the value readout.
    pub decimals: u8,
    pub show_value: bool,
}

impl ChannelSpec {
    /// Stock parameters for `channel`.
    pub fn default_for(channel: Channel) -> Self {
        // (label, unit, min, max, seed, step, warning, decimals)
        let (label, unit, min, max, seed, step, warning, decimals) = match channel {
            Channel::IntakeTemp => (
                "Intake",
                "°C",
                0.0,
                100.0,
                25.0,
                2.0,
                WarningSpec::Above(INTAKE_TEMP_WARN),
                1,
            ),
            Channel::Afr => (
                "AFR",
                ":1",
                10.0,
                20.0,
                14.7,
                0.2,
                WarningSpec::Outside {
                    low: AFR_WARN_LOW,
                    high: AFR_WARN_HIGH,
                },
                1,
            ),
            Channel::Map => ("MAP", "bar", 0.0, 2.0, 1.0, 0.1, WarningSpec::None, 2),
            Channel::ThrottlePosition => ("Throttle Position", "%", 0.0, 100.0, 15.0, 20.0, WarningSpec::None, 1),
            Channel::AbsLoad => ("Absolute Load", "%", 0.0, 100.0, 45.0, 3.0, WarningSpec::None, 1),
            Channel::OilTemp => (
                "Oil",
                "°C",
                0.0,
                150.0,
                90.0,
                1.0,
                WarningSpec::Above(OIL_TEMP_WARN),
                1,
            ),
        };
        Self {
            channel,
            label: label.to_owned(),
            unit: unit.to_owned(),
            min,
            max,
            seed,
            step,
            warning,
            decimals,
            show_value: true,
        }
    }

    fn validate(&self) -> Result<(), DashError> {
        let check = || {
            if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
                return Err(DashError::InvalidRange {
                    min: self.min,
                    max: self.max,
                });
            }
            if self.min == self.max {
                return Err(DashError::DegenerateRange(self.min));
            }
            if !(self.min..=self.max).contains(&self.seed) {
                return Err(DashError::InvalidSeed {
                    seed: self.seed,
                    min: self.min,
                    max: self.max,
                });
            }
            if !self.step.is_finite() || self.step < 0.0 {
                return Err(DashError::InvalidStep(self.step));
            }
            match self.warning {
                WarningSpec::Outside { low, high } if !self.warning.is_well_formed() => {
                    Err(DashError::InvalidWarning { low, high })
                }
                _ => Ok(()),
            }
        };
        check().map_err(|err| err.for_channel(self.channel))
    }
}

// =============================================================================
// Presets
// =============================================================================

/// A named gauge subset with its layout (`P1`..`P4`).
#[derive(Clone, Debug, PartialEq)]
pub struct PresetSpec {
    pub name: String,
    pub layout: Layout,
    pub channels: Vec<Channel>,
}

impl PresetSpec {
    /// Stock preset `number` (1-based).
    pub fn default_for(number: usize) -> Self {
        let channels = match number {
            1 => vec![Channel::Afr, Channel::Map, Channel::ThrottlePosition],
            2 => vec![Channel::IntakeTemp, Channel::OilTemp],
            3 => vec![Channel::Afr, Channel::AbsLoad, Channel::OilTemp],
            _ => vec![Channel::ThrottlePosition, Channel::Map],
        };
        Self {
            name: format!("Preset {number}"),
            layout: Layout::Default,
            channels,
        }
    }

    /// Whether `channel` is part of this preset.
    pub fn shows(
        &self,
        channel: Channel,
    ) -> bool {
        self.channels.contains(&channel)
    }
}

// =============================================================================
// Dashboard Configuration
// =============================================================================

/// Complete, validated configuration consumed by the core.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Interval between telemetry ticks.
    pub tick_interval: Duration,
    /// Display brightness (percent). Shown on the settings screen only.
    pub brightness: u8,
    pub units: DisplayUnits,
    channels: [ChannelSpec; CHANNEL_COUNT],
    pub presets: [PresetSpec; PRESET_COUNT],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            brightness: DEFAULT_BRIGHTNESS,
            units: DisplayUnits::default(),
            channels: Channel::ALL.map(ChannelSpec::default_for),
            presets: core::array::from_fn(|i| PresetSpec::default_for(i + 1)),
        }
    }
}

impl DashboardConfig {
    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, DashError> {
        let text = fs::read_to_string(path).map_err(|err| DashError::Io {
            path: path.to_path_buf(),
            source: err.into(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Parse, merge over the defaults, and validate.
    pub fn from_toml_str(text: &str) -> Result<Self, DashError> {
        let raw: RawConfig = toml::from_str(text).map_err(|err| DashError::Parse(err.to_string()))?;
        let config = Self::default().merge(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the tick interval (e.g. from the command line).
    pub fn with_tick_interval_ms(
        mut self,
        ms: u64,
    ) -> Result<Self, DashError> {
        check_tick_interval(ms)?;
        self.tick_interval = Duration::from_millis(ms);
        Ok(self)
    }

    /// Spec of `channel`.
    #[inline]
    pub fn channel(
        &self,
        channel: Channel,
    ) -> &ChannelSpec {
        &self.channels[channel.index()]
    }

    /// Channel specs in channel order.
    pub fn channels(&self) -> impl Iterator<Item = &ChannelSpec> { self.channels.iter() }

    /// Preset `number` (1..=4); `None` for 0 ("All") or out of range.
    pub fn preset(
        &self,
        number: u8,
    ) -> Option<&PresetSpec> {
        usize::from(number).checked_sub(1).and_then(|i| self.presets.get(i))
    }

    /// Tick rate in Hz.
    pub fn update_frequency_hz(&self) -> f32 { 1000.0 / self.tick_interval.as_millis().max(1) as f32 }

    /// Check every invariant the core relies on.
    pub fn validate(&self) -> Result<(), DashError> {
        check_tick_interval(self.tick_interval.as_millis() as u64)?;
        self.channels.iter().try_for_each(ChannelSpec::validate)
    }

    fn merge(
        mut self,
        raw: RawConfig,
    ) -> Result<Self, DashError> {
        if let Some(ms) = raw.tick_interval_ms {
            self.tick_interval = Duration::from_millis(ms);
        }
        if let Some(brightness) = raw.brightness {
            self.brightness = brightness.min(100);
        }
        self.units = raw.units;

        for over in raw.channels {
            let spec = &mut self.channels[over.channel.index()];
            if let Some(label) = over.label {
                spec.label = label;
            }
            if let Some(unit) = over.unit {
                spec.unit = unit;
            }
            spec.min = over.min.unwrap_or(spec.min);
            spec.max = over.max.unwrap_or(spec.max);
            spec.seed = over.seed.unwrap_or(spec.seed);
            spec.step = over.step.unwrap_or(spec.step);
            spec.warning = over.warning.unwrap_or(spec.warning);
            spec.decimals = over.decimals.unwrap_or(spec.decimals);
            spec.show_value = over.show_value.unwrap_or(spec.show_value);
        }

        if raw.presets.len() > PRESET_COUNT {
            return Err(DashError::TooManyPresets(raw.presets.len()));
        }
        for (slot, over) in self.presets.iter_mut().zip(raw.presets) {
            if let Some(name) = over.name {
                slot.name = name;
            }
            if let Some(layout) = over.layout {
                slot.layout = layout;
            }
            if let Some(channels) = over.channels {
                slot.channels = channels;
            }
        }
        Ok(self)
    }
}

fn check_tick_interval(ms: u64) -> Result<(), DashError> {
    if (MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&ms) {
        Ok(())
    } else {
        Err(DashError::InvalidTickInterval(ms))
    }
}

// =============================================================================
// Raw (on-disk) Representation
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    tick_interval_ms: Option<u64>,
    brightness: Option<u8>,
    units: DisplayUnits,
    channels: Vec<RawChannel>,
    presets: Vec<RawPreset>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawChannel {
    channel: Channel,
    label: Option<String>,
    unit: Option<String>,
    min: Option<f32>,
    max: Option<f32>,
    seed: Option<f32>,
    step: Option<f32>,
    warning: Option<WarningSpec>,
    decimals: Option<u8>,
    show_value: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPreset {
    name: Option<String>,
    layout: Option<Layout>,
    channels: Option<Vec<Channel>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DashboardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_file_equals_default() {
        assert_eq!(DashboardConfig::from_toml_str("").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_default_channel_table() {
        let config = DashboardConfig::default();

        let afr = config.channel(Channel::Afr);
        assert_eq!((afr.min, afr.max, afr.seed, afr.step), (10.0, 20.0, 14.7, 0.2));
        assert_eq!(afr.warning, WarningSpec::Outside { low: 14.0, high: 15.0 });

        let oil = config.channel(Channel::OilTemp);
        assert_eq!((oil.min, oil.max, oil.seed, oil.step), (0.0, 150.0, 90.0, 1.0));
        assert_eq!(oil.warning, WarningSpec::Above(110.0));

        let intake = config.channel(Channel::IntakeTemp);
        assert_eq!(intake.warning, WarningSpec::Above(80.0));

        let throttle = config.channel(Channel::ThrottlePosition);
        assert_eq!(throttle.step, 20.0, "throttle jitters hardest");
        assert_eq!(config.channel(Channel::Map).decimals, 2);
    }

    #[test]
    fn test_channel_table_in_channel_order() {
        let config = DashboardConfig::default();
        let order: Vec<Channel> = config.channels().map(|spec| spec.channel).collect();
        assert_eq!(order, Channel::ALL.to_vec());
    }

    #[test]
    fn test_default_cadence_and_presets() {
        let config = DashboardConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(1000));
        assert_eq!(config.update_frequency_hz(), 1.0);
        assert_eq!(config.preset(1).map(|p| p.name.as_str()), Some("Preset 1"));
        assert_eq!(config.preset(4).map(|p| p.name.as_str()), Some("Preset 4"));
        assert!(config.preset(0).is_none(), "preset 0 is All, not a table entry");
        assert!(config.preset(5).is_none());
    }

    #[test]
    fn test_channel_override_merges() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [[channels]]
            channel = "oil_temp"
            max = 160.0
            warning = { above = 115.0 }
            "#,
        )
        .unwrap();

        let oil = config.channel(Channel::OilTemp);
        assert_eq!(oil.max, 160.0);
        assert_eq!(oil.min, 0.0, "untouched keys keep defaults");
        assert_eq!(oil.warning, WarningSpec::Above(115.0));
        assert_eq!(oil.label, "Oil");
    }

    #[test]
    fn test_preset_override_replaces_in_order() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [[presets]]
            name = "Track"
            layout = "compact"
            channels = ["afr", "oil_temp"]
            "#,
        )
        .unwrap();

        let track = config.preset(1).unwrap();
        assert_eq!(track.name, "Track");
        assert_eq!(track.layout, Layout::Compact);
        assert_eq!(track.channels, vec![Channel::Afr, Channel::OilTemp]);
        assert_eq!(config.preset(2).unwrap(), &PresetSpec::default_for(2));
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let err = DashboardConfig::from_toml_str(
            r#"
            [[channels]]
            channel = "map"
            min = 5.0
            max = 5.0
            seed = 5.0
            "#,
        )
        .unwrap_err();
        assert_eq!(err, DashError::DegenerateRange(5.0).for_channel(Channel::Map));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = DashboardConfig::from_toml_str("[[channels]]\nchannel = \"afr\"\nmin = 30.0\n").unwrap_err();
        assert!(matches!(err, DashError::Channel { channel: Channel::Afr, .. }), "{err}");
    }

    #[test]
    fn test_seed_outside_range_rejected() {
        let err = DashboardConfig::from_toml_str("[[channels]]\nchannel = \"afr\"\nseed = 25.0\n").unwrap_err();
        assert_eq!(
            err,
            DashError::InvalidSeed {
                seed: 25.0,
                min: 10.0,
                max: 20.0
            }
            .for_channel(Channel::Afr)
        );
    }

    #[test]
    fn test_negative_step_rejected() {
        let err = DashboardConfig::from_toml_str("[[channels]]\nchannel = \"map\"\nstep = -1.0\n").unwrap_err();
        assert_eq!(err, DashError::InvalidStep(-1.0).for_channel(Channel::Map));
    }

    #[test]
    fn test_reversed_warning_window_rejected() {
        let err = DashboardConfig::from_toml_str(
            "[[channels]]\nchannel = \"afr\"\nwarning = { outside = { low = 15.0, high = 14.0 } }\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            DashError::InvalidWarning { low: 15.0, high: 14.0 }.for_channel(Channel::Afr)
        );
    }

    #[test]
    fn test_tick_interval_bounds() {
        assert_eq!(
            DashboardConfig::from_toml_str("tick_interval_ms = 50").unwrap_err(),
            DashError::InvalidTickInterval(50)
        );
        let config = DashboardConfig::from_toml_str("tick_interval_ms = 500").unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(500));
        assert_eq!(config.update_frequency_hz(), 2.0);
    }

    #[test]
    fn test_with_tick_interval_override() {
        let config = DashboardConfig::default().with_tick_interval_ms(200).unwrap();
        assert_eq!(config.update_frequency_hz(), 5.0);
        assert!(DashboardConfig::default().with_tick_interval_ms(60_000).is_err());
    }

    #[test]
    fn test_too_many_presets_rejected() {
        let text = "[[presets]]\n".repeat(5);
        assert_eq!(
            DashboardConfig::from_toml_str(&text).unwrap_err(),
            DashError::TooManyPresets(5)
        );
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = DashboardConfig::from_toml_str("refresh = 3").unwrap_err();
        assert!(matches!(err, DashError::Parse(_)), "{err}");
    }

    #[test]
    fn test_unknown_channel_is_parse_error() {
        let err = DashboardConfig::from_toml_str("[[channels]]\nchannel = \"boost\"\n").unwrap_err();
        assert!(matches!(err, DashError::Parse(_)), "{err}");
    }

    #[test]
    fn test_brightness_capped() {
        let config = DashboardConfig::from_toml_str("brightness = 250").unwrap();
        assert_eq!(config.brightness, 100);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = DashboardConfig::load(Path::new("/nonexistent/dashboard.toml")).unwrap_err();
        match err {
            DashError::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an I/O error, got {other}"),
        }
    }
}
