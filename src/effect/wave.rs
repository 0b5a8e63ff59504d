//! Background wave effect
//!
//! A sine wave of lightness travelling outward from `origin_mm` in both
//! directions. Every LED is written, so the wave fully covers the clear color.

use core::f64::consts::TAU;

use embassy_time::Duration;

use super::{Effect, Layer};
use crate::{
    StripContext, StripGeometry, StripSurface,
    color::Hsl,
};

const DEFAULT_WAVELENGTH_MM: f32 = 250.0;
const DEFAULT_SPEED_MM_PER_SEC: f32 = 500.0;
const DEFAULT_MIN_LIGHTNESS: f32 = 0.4;
const DEFAULT_MAX_LIGHTNESS: f32 = 0.9;
const DEFAULT_HUE: f32 = 180.0 / 360.0;
const DEFAULT_SATURATION: f32 = 1.0;

/// Continuous lightness wave
#[derive(Debug, Clone, PartialEq)]
pub struct WaveEffect {
    wavelength_mm: f32,
    speed_mm_per_sec: f32,
    min_lightness: f32,
    max_lightness: f32,
    /// Phase at the origin, in radians. Grows without bound.
    base_angle: f64,
    origin_mm: f32,
    hue: f32,
    saturation: f32,
    visible: bool,
}

impl Default for WaveEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveEffect {
    /// Cyan wave, 250 mm long, moving at 500 mm/s from the strip start
    pub const fn new() -> Self {
        Self {
            wavelength_mm: DEFAULT_WAVELENGTH_MM,
            speed_mm_per_sec: DEFAULT_SPEED_MM_PER_SEC,
            min_lightness: DEFAULT_MIN_LIGHTNESS,
            max_lightness: DEFAULT_MAX_LIGHTNESS,
            base_angle: 0.0,
            origin_mm: 0.0,
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_wavelength_mm(mut self, wavelength_mm: f32) -> Self {
        self.wavelength_mm = wavelength_mm;
        self
    }

    /// Set the propagation speed in mm/s
    #[must_use]
    pub fn with_speed(mut self, speed_mm_per_sec: f32) -> Self {
        self.speed_mm_per_sec = speed_mm_per_sec;
        self
    }

    /// Set the lightness range the wave oscillates within
    #[must_use]
    pub fn with_lightness_range(mut self, min: f32, max: f32) -> Self {
        self.min_lightness = min;
        self.max_lightness = max;
        self
    }

    /// Set the point the wave emanates from
    #[must_use]
    pub fn with_origin_mm(mut self, origin_mm: f32) -> Self {
        self.origin_mm = origin_mm;
        self
    }

    /// Set the hue (0.0-1.0)
    #[must_use]
    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue;
        self
    }

    /// Set the saturation (0.0-1.0)
    #[must_use]
    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub const fn base_angle(&self) -> f64 {
        self.base_angle
    }

    pub const fn min_lightness(&self) -> f32 {
        self.min_lightness
    }

    pub const fn max_lightness(&self) -> f32 {
        self.max_lightness
    }

    pub fn amplitude(&self) -> f32 {
        self.max_lightness - self.min_lightness
    }

    /// Phase of the wave at `position_mm`
    pub fn angle_at(&self, position_mm: f32) -> f64 {
        let angle_offset =
            f64::from(self.origin_mm - position_mm) / f64::from(self.wavelength_mm) * TAU;
        if position_mm >= self.origin_mm {
            self.base_angle - angle_offset
        } else {
            self.base_angle + angle_offset
        }
    }

    /// Lightness of the wave at `position_mm`
    #[allow(clippy::cast_possible_truncation)]
    pub fn lightness_at(&self, position_mm: f32) -> f32 {
        let half_amplitude = f64::from(self.amplitude()) / 2.0;
        let lightness = f64::from(self.min_lightness)
            + half_amplitude * libm::sin(self.angle_at(position_mm))
            + half_amplitude;
        lightness as f32
    }
}

impl Effect for WaveEffect {
    const LAYER: Layer = Layer::Background;

    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, elapsed: Duration, _geometry: StripGeometry) {
        let elapsed_ms = elapsed.as_micros() as f64 / 1000.0;
        self.base_angle -= f64::from(self.speed_mm_per_sec) / f64::from(self.wavelength_mm)
            * TAU
            * elapsed_ms
            / 1000.0;
    }

    fn draw<S: StripSurface + ?Sized>(&self, ctx: &mut StripContext<'_, S>) {
        let geometry = ctx.geometry();
        for led in 0..geometry.nof_leds() {
            let lightness = self.lightness_at(geometry.position_of(led));
            let color = Hsl::new(self.hue, self.saturation, lightness).to_rgb();
            if let Ok(index) = i32::try_from(led) {
                ctx.set_pixel_color(index, color);
            }
        }
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
