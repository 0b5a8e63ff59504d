//! Color model
//!
//! Pixels are plain 8-bit RGB triples. The background wave is computed in HSL
//! and converted with [`hsl_to_rgb`].

mod hsl;

pub use hsl::{Hsl, hsl_to_rgb, hue_to_rgb, quantize};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const MAGENTA: Rgb = Rgb { r: 255, g: 0, b: 255 };

/// Light grey used as the default strip background
pub const SILVER: Rgb = Rgb { r: 200, g: 200, b: 200 };
