//! HSL to RGB conversion
//!
//! Works in floating point with every component normalized to `0.0..=1.0`.
//! The conversion itself does not quantize: see [`quantize`].

use super::Rgb;

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// Color in the HSL space, all components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to an 8-bit RGB color, rounding each channel
    pub fn to_rgb(self) -> Rgb {
        quantize(hsl_to_rgb(self.hue, self.saturation, self.lightness))
    }
}

/// Convert HSL to RGB
///
/// Returns `[r, g, b]` in `0.0..=255.0`. Values are not rounded.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        // achromatic
        return [l * 255.0, l * 255.0, l * 255.0];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_rgb(p, q, h + ONE_THIRD) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - ONE_THIRD) * 255.0,
    ]
}

/// Evaluate a single channel of the HSL color wheel
///
/// `t` is expected within one turn of `0.0..=1.0` and is wrapped back into it.
pub fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

/// Round float channels to the nearest 8-bit value
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(channels: [f32; 3]) -> Rgb {
    let [r, g, b] = channels.map(|channel| libm::roundf(channel).clamp(0.0, 255.0) as u8);
    Rgb { r, g, b }
}
