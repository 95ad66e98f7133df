//! View dispatcher: dashboard preset selection and the settings overlay.
//!
//! # States
//!
//! - [`ViewState::Dashboard`]: gauges for the selected preset (0 = "All")
//! - [`ViewState::Settings`]: full-screen settings overlay
//!
//! # Transitions
//!
//! | Action | From `Dashboard{n}` | From `Settings` |
//! |--------|---------------------|-----------------|
//! | `OpenSettings` | `Settings` | `Settings` (no-op) |
//! | `CloseSettings` | `Dashboard{0}` | `Dashboard{0}` |
//! | `SelectPreset(k)` | `Dashboard{k}` | ignored |
//! | `ResetPreset` | `Dashboard{0}` | ignored |
//!
//! Closing settings always lands on "All"; the preset selected before opening
//! is not remembered.

use core::fmt;

use crate::config::PRESET_COUNT;
use crate::error::DashError;

// =============================================================================
// Preset Index
// =============================================================================

/// Validated preset index in `0..=4`; 0 is "All".
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PresetIndex(u8);

impl PresetIndex {
    /// The "All" preset.
    pub const ALL: Self = Self(0);

    /// Highest valid index.
    pub const MAX: u8 = PRESET_COUNT as u8;

    pub fn new(index: u8) -> Result<Self, DashError> {
        if index <= Self::MAX {
            Ok(Self(index))
        } else {
            Err(DashError::InvalidPresetIndex(index))
        }
    }

    /// Like [`PresetIndex::new`], but out-of-range indices fall back to
    /// [`PresetIndex::ALL`] with a warning.
    pub fn clamped(index: u8) -> Self {
        Self::new(index).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to preset All");
            Self::ALL
        })
    }

    #[inline]
    pub const fn get(self) -> u8 { self.0 }

    #[inline]
    pub const fn is_all(self) -> bool { self.0 == 0 }
}

impl fmt::Display for PresetIndex {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_all() { f.write_str("All") } else { write!(f, "P{}", self.0) }
    }
}

// =============================================================================
// View State
// =============================================================================

/// Which screen is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewState {
    Dashboard { preset: PresetIndex },
    Settings,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Dashboard {
            preset: PresetIndex::ALL,
        }
    }
}

/// Requests understood by [`ViewState::dispatch`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    OpenSettings,
    CloseSettings,
    /// Raw preset number; validated on dispatch.
    SelectPreset(u8),
    ResetPreset,
}

impl ViewState {
    /// Apply `action`. Returns `true` if the state changed.
    pub fn dispatch(
        &mut self,
        action: Action,
    ) -> bool {
        let next = match (*self, action) {
            (_, Action::OpenSettings) => Self::Settings,
            (_, Action::CloseSettings) => Self::default(),
            (Self::Settings, Action::SelectPreset(_) | Action::ResetPreset) => Self::Settings,
            (Self::Dashboard { .. }, Action::SelectPreset(n)) => Self::Dashboard {
                preset: PresetIndex::clamped(n),
            },
            (Self::Dashboard { .. }, Action::ResetPreset) => Self::default(),
        };

        let changed = next != *self;
        if changed {
            tracing::debug!(from = ?*self, to = ?next, ?action, "view transition");
            *self = next;
        }
        changed
    }

    /// Whether the settings overlay is showing.
    #[inline]
    pub const fn overlay_visible(self) -> bool { matches!(self, Self::Settings) }

    /// Selected preset number; 0 ("All") while settings are open.
    #[inline]
    pub const fn preset(self) -> u8 {
        match self {
            Self::Dashboard { preset } => preset.get(),
            Self::Settings => 0,
        }
    }
}
