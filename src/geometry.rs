//! Physical layout of the strip

/// Reasons a geometry can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The strip must have at least one LED
    ZeroLeds,
    /// The strip length must be finite and positive
    InvalidLength,
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroLeds => f.write_str("strip must have at least one LED"),
            Self::InvalidLength => f.write_str("strip length must be a positive number of millimetres"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// LED count and physical span of the strip
///
/// Positions of effects are expressed in millimetres along the strip and
/// mapped to LED indices through [`StripGeometry::mm_per_led`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    nof_leds: usize,
    strip_length_mm: f32,
}

impl Default for StripGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl StripGeometry {
    /// 144 LEDs over one metre
    pub const DEFAULT: Self = Self {
        nof_leds: 144,
        strip_length_mm: 1000.0,
    };

    pub fn new(nof_leds: usize, strip_length_mm: f32) -> Result<Self, GeometryError> {
        if nof_leds == 0 {
            return Err(GeometryError::ZeroLeds);
        }
        if !strip_length_mm.is_finite() || strip_length_mm <= 0.0 {
            return Err(GeometryError::InvalidLength);
        }

        Ok(Self {
            nof_leds,
            strip_length_mm,
        })
    }

    /// Number of addressable LEDs
    pub const fn nof_leds(self) -> usize {
        self.nof_leds
    }

    /// Physical length in millimetres
    pub const fn strip_length_mm(self) -> f32 {
        self.strip_length_mm
    }

    /// Distance between two neighbouring LEDs
    #[allow(clippy::cast_precision_loss)]
    pub fn mm_per_led(self) -> f32 {
        self.strip_length_mm / self.nof_leds as f32
    }

    /// Map a position to the index of the LED covering it
    ///
    /// The result is not bounded: positions before the strip start give
    /// negative indices, positions past the end give indices `>= nof_leds`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn led_at(self, position_mm: f32) -> i32 {
        libm::floorf(position_mm / self.mm_per_led()) as i32
    }

    /// Position of the given LED
    #[allow(clippy::cast_precision_loss)]
    pub fn position_of(self, led: usize) -> f32 {
        led as f32 * self.mm_per_led()
    }

    /// Returns `true` if `index` addresses a LED on the strip
    pub fn contains(self, index: i32) -> bool {
        usize::try_from(index).is_ok_and(|index| index < self.nof_leds)
    }
}
