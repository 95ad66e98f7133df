//! Dashboard top bar: preset buttons, menu button and divider.
//!
//! Button rectangles come from [`crate::config::layout`] so the input router
//! hit-tests exactly what is drawn here.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, RoundedRectangle},
    text::Text,
};

use crate::colors::{DIVIDER, SELECTED, TRACK, WHITE};
use crate::config::SCREEN_WIDTH;
use crate::config::layout::{MENU_BUTTON, PRESET_BUTTON_COUNT, TOP_BAR_HEIGHT, preset_button};
use crate::styles::{BUTTON_STYLE, CENTERED};
use crate::view::PresetIndex;

/// Button captions, indexed like [`preset_button`].
const PRESET_LABELS: [&str; PRESET_BUTTON_COUNT as usize] = ["All", "P1", "P2", "P3", "P4"];

/// Corner radius of top bar buttons.
const BUTTON_RADIUS: Size = Size::new(6, 6);

/// Divider line under the top bar.
const DIVIDER_START: Point = Point::new(0, TOP_BAR_HEIGHT as i32);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, TOP_BAR_HEIGHT as i32);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DIVIDER, 1);

/// Menu icon: three 2px bars, 18px wide.
const MENU_BAR_WIDTH: i32 = 18;
const MENU_BAR_SPACING: i32 = 6;
const MENU_ICON_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);

const SELECTED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SELECTED);
const IDLE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(TRACK);

/// Draw the top bar with `selected` highlighted.
pub fn draw_top_bar<D>(
    display: &mut D,
    selected: PresetIndex,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (index, label) in (0u8..).zip(PRESET_LABELS) {
        let button = preset_button(index);
        let fill = if index == selected.get() { SELECTED_FILL } else { IDLE_FILL };
        RoundedRectangle::with_equal_corners(button, BUTTON_RADIUS)
            .into_styled(fill)
            .draw(display)
            .ok();
        Text::with_text_style(label, button.center(), BUTTON_STYLE, CENTERED)
            .draw(display)
            .ok();
    }

    RoundedRectangle::with_equal_corners(MENU_BUTTON, BUTTON_RADIUS)
        .into_styled(IDLE_FILL)
        .draw(display)
        .ok();
    let center = MENU_BUTTON.center();
    for row in [-1, 0, 1] {
        let y = center.y + row * MENU_BAR_SPACING;
        Line::new(
            Point::new(center.x - MENU_BAR_WIDTH / 2, y),
            Point::new(center.x + MENU_BAR_WIDTH / 2, y),
        )
        .into_styled(MENU_ICON_STYLE)
        .draw(display)
        .ok();
    }

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
