//! In-memory draw target for widget and frame tests.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// 800×480 framebuffer that records every pixel drawn.
pub struct TestCanvas {
    pixels: Vec<Rgb565>,
}

impl TestCanvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    fn index(point: Point) -> Option<usize> {
        let inside = (0..SCREEN_WIDTH as i32).contains(&point.x) && (0..SCREEN_HEIGHT as i32).contains(&point.y);
        inside.then(|| point.y as usize * SCREEN_WIDTH as usize + point.x as usize)
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        Self::index(point).map(|i| self.pixels[i])
    }

    /// Pixels of `color` on the whole canvas.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|&p| self.pixel(p) == Some(color)).count()
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
