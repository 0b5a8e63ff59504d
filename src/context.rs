//! Drawing context shared by all effects
//!
//! Every write is bounded by both the strip geometry and the surface length,
//! so a surface shorter than the strip only ever sees in-range indices.

use crate::color::Rgb;
use crate::geometry::StripGeometry;
use crate::surface::StripSurface;

/// Drawing context handed to effects
///
/// Couples a borrowed surface with the strip geometry and the background
/// color. Effects never touch the surface directly: every write goes through
/// [`StripContext::set_pixel_color`], which drops indices outside the strip.
pub struct StripContext<'a, S: StripSurface + ?Sized> {
    surface: &'a mut S,
    geometry: StripGeometry,
    clear_color: Rgb,
}

impl<'a, S: StripSurface + ?Sized> StripContext<'a, S> {
    pub fn new(surface: &'a mut S, geometry: StripGeometry, clear_color: Rgb) -> Self {
        Self {
            surface,
            geometry,
            clear_color,
        }
    }

    pub const fn geometry(&self) -> StripGeometry {
        self.geometry
    }

    pub const fn clear_color(&self) -> Rgb {
        self.clear_color
    }

    /// Number of pixels that can be written
    fn addressable(&self) -> usize {
        self.geometry.nof_leds().min(self.surface.len())
    }

    /// Returns `true` if `index` lies on both the strip and the surface
    pub fn contains(&self, index: i32) -> bool {
        self.geometry.contains(index)
            && usize::try_from(index).is_ok_and(|index| index < self.surface.len())
    }

    /// Set a pixel, ignoring indices outside the strip or the surface
    ///
    /// Worms are partially off-strip while they enter or leave it, so
    /// out-of-range writes are expected and are not an error.
    pub fn set_pixel_color(&mut self, index: i32, color: Rgb) {
        if !self.contains(index) {
            return;
        }
        if let Ok(index) = usize::try_from(index) {
            self.surface.set_pixel(index, color);
        }
    }

    /// LED index covering `position_mm`, possibly outside the strip
    pub fn map_position_to_led_no(&self, position_mm: f32) -> i32 {
        self.geometry.led_at(position_mm)
    }

    /// Paint the whole strip with the clear color
    pub fn clear_strip(&mut self) {
        for index in 0..self.addressable() {
            self.surface.set_pixel(index, self.clear_color);
        }
    }
}
