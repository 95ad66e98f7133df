//! Gauge arrangement: which channel goes where, drawn as what.
//!
//! A layout is a pure function from the visible channel list to a list of
//! [`GaugeSlot`]s. The renderer draws exactly the returned slots, so a hidden
//! channel simply produces no slot.
//!
//! | Layout | Arrangement |
//! |--------|-------------|
//! | `default` | fixed positions: progress bars left, thermometers right, 70-segment pixel bar bottom |
//! | `compact` | 3-column grid of block readouts, throttle as a 20-segment pixel bar |
//! | `extended` | one full-width progress bar row per channel |

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use serde::Deserialize;

use crate::config::layout::{
    COMPACT_PIXEL_BAR_SEGMENTS, CONTENT_HEIGHT, CONTENT_WIDTH, CONTENT_X, CONTENT_Y, GAP, PIXEL_BAR_SEGMENTS,
    PIXEL_SLOT, progress_slot, thermometer_slot,
};
use crate::config::DashboardConfig;
use crate::gauge::GaugeKind;
use crate::telemetry::Channel;
use crate::view::ViewState;

/// Columns of the compact block grid.
const COMPACT_COLUMNS: u32 = 3;

// =============================================================================
// Layout
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Default,
    Compact,
    Extended,
}

impl Layout {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Compact => "Compact",
            Self::Extended => "Extended",
        }
    }
}

/// One gauge to draw: channel, visual encoding and panel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaugeSlot {
    pub channel: Channel,
    pub kind: GaugeKind,
    pub area: Rectangle,
}

// =============================================================================
// Arrangement
// =============================================================================

/// Place the `visible` channels according to `layout`.
pub fn arrange(
    layout: Layout,
    visible: &[Channel],
) -> Vec<GaugeSlot> {
    match layout {
        Layout::Default => arrange_default(visible),
        Layout::Compact => arrange_compact(visible),
        Layout::Extended => arrange_extended(visible),
    }
}

/// Layout and visible channels for the current view.
///
/// Preset 0 ("All") and the settings screen show every channel on the
/// default layout.
pub fn visible_channels(
    view: ViewState,
    config: &DashboardConfig,
) -> (Layout, Vec<Channel>) {
    match config.preset(view.preset()) {
        Some(preset) => {
            let channels = Channel::ALL.into_iter().filter(|ch| preset.shows(*ch)).collect();
            (preset.layout, channels)
        }
        None => (Layout::Default, Channel::ALL.to_vec()),
    }
}

fn default_slot(channel: Channel) -> GaugeSlot {
    let (kind, area) = match channel {
        Channel::Afr => (GaugeKind::ProgressBar, progress_slot(0)),
        Channel::Map => (GaugeKind::ProgressBar, progress_slot(1)),
        Channel::AbsLoad => (GaugeKind::ProgressBar, progress_slot(2)),
        Channel::IntakeTemp => (GaugeKind::Thermometer, thermometer_slot(0)),
        Channel::OilTemp => (GaugeKind::Thermometer, thermometer_slot(1)),
        Channel::ThrottlePosition => (
            GaugeKind::PixelBar {
                segments: PIXEL_BAR_SEGMENTS,
            },
            PIXEL_SLOT,
        ),
    };
    GaugeSlot { channel, kind, area }
}

fn arrange_default(visible: &[Channel]) -> Vec<GaugeSlot> { visible.iter().map(|ch| default_slot(*ch)).collect() }

fn arrange_compact(visible: &[Channel]) -> Vec<GaugeSlot> {
    let count = visible.len() as u32;
    if count == 0 {
        return Vec::new();
    }
    let columns = count.min(COMPACT_COLUMNS);
    let rows = count.div_ceil(COMPACT_COLUMNS);
    let width = (CONTENT_WIDTH - (columns - 1) * GAP) / columns;
    let height = (CONTENT_HEIGHT - (rows - 1) * GAP) / rows;

    visible
        .iter()
        .zip(0u32..)
        .map(|(&channel, i)| {
            let col = i % COMPACT_COLUMNS;
            let row = i / COMPACT_COLUMNS;
            let area = Rectangle::new(
                Point::new(
                    CONTENT_X + (col * (width + GAP)) as i32,
                    CONTENT_Y + (row * (height + GAP)) as i32,
                ),
                Size::new(width, height),
            );
            let kind = match channel {
                Channel::ThrottlePosition => GaugeKind::PixelBar {
                    segments: COMPACT_PIXEL_BAR_SEGMENTS,
                },
                _ => GaugeKind::Block,
            };
            GaugeSlot { channel, kind, area }
        })
        .collect()
}

fn arrange_extended(visible: &[Channel]) -> Vec<GaugeSlot> {
    let count = visible.len() as u32;
    if count == 0 {
        return Vec::new();
    }
    let height = (CONTENT_HEIGHT - (count - 1) * GAP) / count;

    visible
        .iter()
        .zip(0u32..)
        .map(|(&channel, i)| GaugeSlot {
            channel,
            kind: GaugeKind::ProgressBar,
            area: Rectangle::new(
                Point::new(CONTENT_X, CONTENT_Y + (i * (height + GAP)) as i32),
                Size::new(CONTENT_WIDTH, height),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::ContainsPoint;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::SCREEN_AREA;
    use crate::view::PresetIndex;

    const LAYOUTS: [Layout; 3] = [Layout::Default, Layout::Compact, Layout::Extended];

    fn inside_canvas(rect: &Rectangle) -> bool {
        match rect.bottom_right() {
            Some(br) => SCREEN_AREA.contains(rect.top_left) && SCREEN_AREA.contains(br),
            None => false,
        }
    }

    fn overlaps(
        a: &Rectangle,
        b: &Rectangle,
    ) -> bool {
        !a.intersection(b).is_zero_sized()
    }

    #[test]
    fn test_every_slot_inside_canvas() {
        for layout in LAYOUTS {
            for n in 1..=Channel::ALL.len() {
                for slot in arrange(layout, &Channel::ALL[..n]) {
                    assert!(inside_canvas(&slot.area), "{layout:?} with {n} channels: {slot:?} off canvas");
                }
            }
        }
    }

    #[test]
    fn test_slots_do_not_overlap() {
        for layout in LAYOUTS {
            let slots = arrange(layout, &Channel::ALL);
            for (i, a) in slots.iter().enumerate() {
                for b in &slots[i + 1..] {
                    assert!(!overlaps(&a.area, &b.area), "{layout:?}: {a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_default_layout_kinds() {
        let slots = arrange(Layout::Default, &Channel::ALL);
        let kind_of = |channel| slots.iter().find(|s| s.channel == channel).map(|s| s.kind);

        assert_eq!(kind_of(Channel::Afr), Some(GaugeKind::ProgressBar));
        assert_eq!(kind_of(Channel::IntakeTemp), Some(GaugeKind::Thermometer));
        assert_eq!(kind_of(Channel::OilTemp), Some(GaugeKind::Thermometer));
        assert_eq!(kind_of(Channel::ThrottlePosition), Some(GaugeKind::PixelBar { segments: 70 }));
    }

    #[test]
    fn test_default_layout_keeps_fixed_positions() {
        let all = arrange(Layout::Default, &Channel::ALL);
        let subset = arrange(Layout::Default, &[Channel::OilTemp]);
        let oil_in_all = all.iter().find(|s| s.channel == Channel::OilTemp);
        assert_eq!(subset.first(), oil_in_all, "hidden channels leave their slot empty");
    }

    #[test]
    fn test_compact_layout_uses_blocks_and_short_pixel_bar() {
        let slots = arrange(Layout::Compact, &Channel::ALL);
        assert_eq!(slots.len(), Channel::ALL.len());
        for slot in &slots {
            let expected = if slot.channel == Channel::ThrottlePosition {
                GaugeKind::PixelBar { segments: 20 }
            } else {
                GaugeKind::Block
            };
            assert_eq!(slot.kind, expected, "{}", slot.channel);
        }
    }

    #[test]
    fn test_extended_layout_one_row_per_channel() {
        let slots = arrange(Layout::Extended, &[Channel::Afr, Channel::Map]);
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|s| s.kind == GaugeKind::ProgressBar));
        assert!(slots.iter().all(|s| s.area.size.width == CONTENT_WIDTH));
    }

    #[test]
    fn test_empty_visible_set() {
        for layout in LAYOUTS {
            assert!(arrange(layout, &[]).is_empty(), "{layout:?}");
        }
    }

    #[test]
    fn test_visible_channels_all_and_presets() {
        let config = DashboardConfig::default();

        let (layout, all) = visible_channels(ViewState::default(), &config);
        assert_eq!(layout, Layout::Default);
        assert_eq!(all, Channel::ALL.to_vec());

        let p2 = ViewState::Dashboard {
            preset: PresetIndex::clamped(2),
        };
        let (_, channels) = visible_channels(p2, &config);
        assert_eq!(channels, vec![Channel::IntakeTemp, Channel::OilTemp]);
    }

    #[test]
    fn test_visible_channels_follow_preset_layout() {
        let config =
            DashboardConfig::from_toml_str("[[presets]]\nlayout = \"compact\"\nchannels = [\"oil_temp\", \"afr\"]\n")
                .unwrap();
        let p1 = ViewState::Dashboard {
            preset: PresetIndex::clamped(1),
        };
        let (layout, channels) = visible_channels(p1, &config);
        assert_eq!(layout, Layout::Compact);
        assert_eq!(channels, vec![Channel::Afr, Channel::OilTemp], "channel order is canonical");
    }
}
