//! Worm effects
//!
//! A worm is a solid segment of `length` LEDs travelling along the strip.
//! Both variants share the motion and drawing code and only differ in what
//! happens at the travel boundaries:
//! - `LoopingWormEffect` teleports back to the strip start
//! - `BouncingWormEffect` reverses its direction

use embassy_time::Duration;

use super::{Effect, elapsed_ms};
use crate::{StripContext, StripGeometry, StripSurface, color::Rgb};

/// State shared by all worm variants
#[derive(Debug, Clone, PartialEq)]
pub struct Worm {
    /// Head position in mm, may be off-strip
    pub position: f32,
    /// Signed speed in mm/s
    pub speed: f32,
    /// Segment length in LEDs
    pub length: u16,
    pub color: Rgb,
    pub visible: bool,
}

impl Worm {
    pub const fn new(position: f32, speed: f32, length: u16, color: Rgb) -> Self {
        Self {
            position,
            speed,
            length,
            color,
            visible: true,
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        self.position += elapsed_ms(elapsed) * self.speed / 1000.0;
    }

    /// Position past which the whole segment has left the strip
    fn end_threshold(&self, geometry: StripGeometry) -> f32 {
        geometry.strip_length_mm() + f32::from(self.length) * geometry.mm_per_led()
    }

    /// Draw the segment trailing the head LED
    fn draw<S: StripSurface + ?Sized>(&self, ctx: &mut StripContext<'_, S>) {
        let led_no = ctx.map_position_to_led_no(self.position);
        let length = i32::from(self.length);
        for i in 0..length {
            ctx.set_pixel_color(led_no + i - length, self.color);
        }
    }
}

/// Worm that restarts from zero once it has left the strip
#[derive(Debug, Clone, PartialEq)]
pub struct LoopingWormEffect {
    worm: Worm,
}

impl LoopingWormEffect {
    pub const fn new(position: f32, speed: f32, length: u16, color: Rgb) -> Self {
        Self {
            worm: Worm::new(position, speed, length, color),
        }
    }

    pub const fn worm(&self) -> &Worm {
        &self.worm
    }

    pub fn worm_mut(&mut self) -> &mut Worm {
        &mut self.worm
    }
}

impl Effect for LoopingWormEffect {
    fn update(&mut self, elapsed: Duration, geometry: StripGeometry) {
        self.worm.advance(elapsed);
        // Overshoot is dropped, the next lap starts exactly at zero
        if self.worm.position > self.worm.end_threshold(geometry) {
            self.worm.position = 0.0;
        }
    }

    fn draw<S: StripSurface + ?Sized>(&self, ctx: &mut StripContext<'_, S>) {
        self.worm.draw(ctx);
    }

    fn visible(&self) -> bool {
        self.worm.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.worm.visible = visible;
    }
}

/// Worm that reverses at both ends of its travel
#[derive(Debug, Clone, PartialEq)]
pub struct BouncingWormEffect {
    worm: Worm,
}

impl BouncingWormEffect {
    pub const fn new(position: f32, speed: f32, length: u16, color: Rgb) -> Self {
        Self {
            worm: Worm::new(position, speed, length, color),
        }
    }

    pub const fn worm(&self) -> &Worm {
        &self.worm
    }

    pub fn worm_mut(&mut self) -> &mut Worm {
        &mut self.worm
    }
}

impl Effect for BouncingWormEffect {
    fn update(&mut self, elapsed: Duration, geometry: StripGeometry) {
        self.worm.advance(elapsed);
        // Position is left as is; the reversed speed brings it back next frame
        if self.worm.position > self.worm.end_threshold(geometry) || self.worm.position < 0.0 {
            self.worm.speed = -self.worm.speed;
        }
    }

    fn draw<S: StripSurface + ?Sized>(&self, ctx: &mut StripContext<'_, S>) {
        self.worm.draw(ctx);
    }

    fn visible(&self) -> bool {
        self.worm.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.worm.visible = visible;
    }
}
