//! Input router: keyboard and pointer events to [`Action`]s.
//!
//! # Key Mapping
//!
//! First matching row wins:
//!
//! | Key | Condition | Action |
//! |-----|-----------|--------|
//! | `Escape` | settings open | `CloseSettings` |
//! | `Escape` | settings closed | `ResetPreset` |
//! | `m` | any | `OpenSettings` |
//! | `1`-`4` | settings closed | `SelectPreset(digit)` |
//! | `1`-`4` | settings open | ignored |
//!
//! Every key-down is routed on its own; auto-repeat events are not filtered.
//!
//! # Pointer
//!
//! On the dashboard the top bar holds `All`, `P1`..`P4` and the menu button;
//! on the settings screen only the close button reacts.

use embedded_graphics::{geometry::Point, primitives::ContainsPoint};

use crate::config::layout::{MENU_BUTTON, PRESET_BUTTON_COUNT, SETTINGS_CLOSE_BUTTON, preset_button};
use crate::view::{Action, ViewState};

/// A key press, decoupled from the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

impl Key {
    /// Parse a backend key name (`"Escape"`, `"M"`, `"3"`, ...).
    ///
    /// Single-character names become [`Key::Char`] in lowercase; other named
    /// keys are not routed.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("escape") {
            return Some(Self::Escape);
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::Char(c.to_ascii_lowercase())),
            _ => None,
        }
    }
}

/// Map a key press to an action for the current view.
pub fn route_key(
    key: Key,
    view: ViewState,
) -> Option<Action> {
    match key {
        Key::Escape if view.overlay_visible() => Some(Action::CloseSettings),
        Key::Escape => Some(Action::ResetPreset),
        Key::Char('m') => Some(Action::OpenSettings),
        Key::Char(c @ '1'..='4') if !view.overlay_visible() => c.to_digit(10).map(|d| Action::SelectPreset(d as u8)),
        Key::Char(_) => None,
    }
}

/// Map a pointer click to an action for the current view.
pub fn route_click(
    point: Point,
    view: ViewState,
) -> Option<Action> {
    if view.overlay_visible() {
        return SETTINGS_CLOSE_BUTTON.contains(point).then_some(Action::CloseSettings);
    }
    if MENU_BUTTON.contains(point) {
        return Some(Action::OpenSettings);
    }
    (0..PRESET_BUTTON_COUNT)
        .find(|&i| preset_button(i).contains(point))
        .map(Action::SelectPreset)
}
