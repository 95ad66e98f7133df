//! Warning thresholds and unit conversion constants.
//!
//! The default thresholds are compile-time constants with ordering assertions;
//! the runtime predicate is [`WarningSpec`], which configuration may override
//! per channel.
//!
//! # Compile-Time Validation
//!
//! If a range is configured backwards (e.g. `AFR_WARN_HIGH < AFR_WARN_LOW`),
//! compilation fails.

use serde::Deserialize;

// =============================================================================
// Air-Fuel Ratio
// =============================================================================

/// Below this AFR the mixture is flagged (rich side of the window).
pub const AFR_WARN_LOW: f32 = 14.0;

/// Above this AFR the mixture is flagged (lean side of the window).
pub const AFR_WARN_HIGH: f32 = 15.0;

const _: () = assert!(AFR_WARN_LOW < AFR_WARN_HIGH);

// =============================================================================
// Temperatures (°C)
// =============================================================================

/// Intake air temperature warning (strictly greater than).
pub const INTAKE_TEMP_WARN: f32 = 80.0;

/// Oil temperature warning (strictly greater than).
pub const OIL_TEMP_WARN: f32 = 110.0;

const _: () = assert!(INTAKE_TEMP_WARN < OIL_TEMP_WARN);

// =============================================================================
// Unit Conversion
// =============================================================================

/// Conversion factor from bar to PSI.
pub const BAR_TO_PSI: f32 = 14.503_8;

/// Convert a Celsius temperature to Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 { celsius.mul_add(9.0 / 5.0, 32.0) }

// =============================================================================
// Warning Predicate
// =============================================================================

/// Per-channel predicate that decides whether a value is drawn with alert styling.
///
/// In TOML this is written as `"none"`, `{ above = 80.0 }`, `{ below = 10.0 }`
/// or `{ outside = { low = 14.0, high = 15.0 } }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSpec {
    /// Never warns.
    #[default]
    None,
    /// Warns when the value is strictly greater than the limit.
    Above(f32),
    /// Warns when the value is strictly less than the limit.
    Below(f32),
    /// Warns when the value leaves the inclusive window `[low, high]`.
    Outside { low: f32, high: f32 },
}

impl WarningSpec {
    /// Evaluate the predicate for `value`.
    pub fn is_warning(
        &self,
        value: f32,
    ) -> bool {
        match *self {
            Self::None => false,
            Self::Above(limit) => value > limit,
            Self::Below(limit) => value < limit,
            Self::Outside { low, high } => value < low || value > high,
        }
    }

    /// Apply `convert` to every limit. `convert` must be increasing so that
    /// window bounds stay ordered.
    pub fn map_limits(
        self,
        convert: impl Fn(f32) -> f32,
    ) -> Self {
        match self {
            Self::None => Self::None,
            Self::Above(limit) => Self::Above(convert(limit)),
            Self::Below(limit) => Self::Below(convert(limit)),
            Self::Outside { low, high } => Self::Outside {
                low: convert(low),
                high: convert(high),
            },
        }
    }

    /// Window bounds are ordered (trivially true for single-limit predicates).
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Self::Outside { low, high } => low <= high,
            Self::None | Self::Above(_) | Self::Below(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afr_window_stoich_is_not_warning() {
        let spec = WarningSpec::Outside {
            low: AFR_WARN_LOW,
            high: AFR_WARN_HIGH,
        };
        assert!(!spec.is_warning(14.7), "14.7 AFR is inside the window");
        assert!(!spec.is_warning(14.0), "lower bound is inclusive");
        assert!(!spec.is_warning(15.0), "upper bound is inclusive");
    }

    #[test]
    fn test_map_limits_converts_each_bound() {
        assert_eq!(WarningSpec::Above(100.0).map_limits(celsius_to_fahrenheit), WarningSpec::Above(212.0));
        assert_eq!(
            WarningSpec::Outside { low: 1.0, high: 2.0 }.map_limits(|v| v * 10.0),
            WarningSpec::Outside { low: 10.0, high: 20.0 }
        );
        assert_eq!(WarningSpec::None.map_limits(|v| v + 1.0), WarningSpec::None);
    }

    #[test]
    fn test_afr_window_rich_and_lean() {
        let spec = WarningSpec::Outside {
            low: AFR_WARN_LOW,
            high: AFR_WARN_HIGH,
        };
        assert!(spec.is_warning(13.9), "13.9 AFR is rich");
        assert!(spec.is_warning(15.1), "15.1 AFR is lean");
    }

    #[test]
    fn test_above_is_strict() {
        let spec = WarningSpec::Above(INTAKE_TEMP_WARN);
        assert!(!spec.is_warning(80.0), "80C is not above 80C");
        assert!(spec.is_warning(80.1));
    }

    #[test]
    fn test_below_is_strict() {
        let spec = WarningSpec::Below(10.0);
        assert!(!spec.is_warning(10.0));
        assert!(spec.is_warning(9.9));
    }

    #[test]
    fn test_none_never_warns() {
        assert!(!WarningSpec::None.is_warning(f32::MAX));
        assert!(!WarningSpec::None.is_warning(f32::MIN));
    }

    #[test]
    fn test_well_formed() {
        assert!(WarningSpec::Outside { low: 1.0, high: 2.0 }.is_well_formed());
        assert!(!WarningSpec::Outside { low: 2.0, high: 1.0 }.is_well_formed());
        assert!(WarningSpec::Above(3.0).is_well_formed());
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 0.001);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 0.001);
    }

    #[test]
    fn test_warning_spec_toml_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            warning: WarningSpec,
        }

        let above: Wrapper = toml::from_str("warning = { above = 110.0 }").unwrap();
        assert_eq!(above.warning, WarningSpec::Above(110.0));

        let outside: Wrapper = toml::from_str("warning = { outside = { low = 14.0, high = 15.0 } }").unwrap();
        assert_eq!(outside.warning, WarningSpec::Outside { low: 14.0, high: 15.0 });

        let none: Wrapper = toml::from_str("warning = \"none\"").unwrap();
        assert_eq!(none.warning, WarningSpec::None);
    }
}
