//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod wave;
mod worm;

use embassy_time::Duration;
pub use wave::WaveEffect;
pub use worm::{BouncingWormEffect, LoopingWormEffect, Worm};

use crate::{StripContext, StripGeometry, StripSurface};

const EFFECT_NAME_LOOPING_WORM: &str = "looping_worm";
const EFFECT_NAME_BOUNCING_WORM: &str = "bouncing_worm";
const EFFECT_NAME_WAVE: &str = "wave";

/// Compositing layer of an effect
///
/// Background effects are drawn before foreground ones, so anything in the
/// foreground overwrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Foreground,
}

pub trait Effect {
    /// Layer the effect is composited on
    const LAYER: Layer = Layer::Foreground;

    /// Advance the effect state by `elapsed`
    fn update(&mut self, elapsed: Duration, geometry: StripGeometry);

    /// Draw the current state
    fn draw<S: StripSurface + ?Sized>(&self, ctx: &mut StripContext<'_, S>);

    fn visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);
}

/// Elapsed time in fractional milliseconds
#[allow(clippy::cast_precision_loss)]
pub(crate) fn elapsed_ms(elapsed: Duration) -> f32 {
    elapsed.as_micros() as f32 / 1000.0
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, PartialEq)]
pub enum EffectSlot {
    /// Worm restarting from the strip start
    LoopingWorm(LoopingWormEffect),
    /// Worm reversing at the strip ends
    BouncingWorm(BouncingWormEffect),
    /// Background lightness wave
    Wave(WaveEffect),
}

/// Known effect kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    LoopingWorm,
    BouncingWorm,
    Wave,
}

impl EffectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoopingWorm => EFFECT_NAME_LOOPING_WORM,
            Self::BouncingWorm => EFFECT_NAME_BOUNCING_WORM,
            Self::Wave => EFFECT_NAME_WAVE,
        }
    }
}

impl From<LoopingWormEffect> for EffectSlot {
    fn from(effect: LoopingWormEffect) -> Self {
        Self::LoopingWorm(effect)
    }
}

impl From<BouncingWormEffect> for EffectSlot {
    fn from(effect: BouncingWormEffect) -> Self {
        Self::BouncingWorm(effect)
    }
}

impl From<WaveEffect> for EffectSlot {
    fn from(effect: WaveEffect) -> Self {
        Self::Wave(effect)
    }
}

impl EffectSlot {
    /// Layer of the contained effect
    ///
    /// Derived from each effect's `Effect::LAYER` constant.
    pub fn layer(&self) -> Layer {
        match self {
            Self::LoopingWorm(_) => LoopingWormEffect::LAYER,
            Self::BouncingWorm(_) => BouncingWormEffect::LAYER,
            Self::Wave(_) => WaveEffect::LAYER,
        }
    }

    pub fn update(&mut self, elapsed: Duration, geometry: StripGeometry) {
        match self {
            Self::LoopingWorm(effect) => effect.update(elapsed, geometry),
            Self::BouncingWorm(effect) => effect.update(elapsed, geometry),
            Self::Wave(effect) => effect.update(elapsed, geometry),
        }
    }

    pub fn draw<S: StripSurface + ?Sized>(&self, ctx: &mut StripContext<'_, S>) {
        match self {
            Self::LoopingWorm(effect) => effect.draw(ctx),
            Self::BouncingWorm(effect) => effect.draw(ctx),
            Self::Wave(effect) => effect.draw(ctx),
        }
    }

    pub fn visible(&self) -> bool {
        match self {
            Self::LoopingWorm(effect) => effect.visible(),
            Self::BouncingWorm(effect) => effect.visible(),
            Self::Wave(effect) => effect.visible(),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Self::LoopingWorm(effect) => effect.set_visible(visible),
            Self::BouncingWorm(effect) => effect.set_visible(visible),
            Self::Wave(effect) => effect.set_visible(visible),
        }
    }

    /// Get the effect kind for external observation
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::LoopingWorm(_) => EffectKind::LoopingWorm,
            Self::BouncingWorm(_) => EffectKind::BouncingWorm,
            Self::Wave(_) => EffectKind::Wave,
        }
    }

    /// Worm state, if this slot holds a worm
    pub fn worm(&self) -> Option<&Worm> {
        match self {
            Self::LoopingWorm(effect) => Some(effect.worm()),
            Self::BouncingWorm(effect) => Some(effect.worm()),
            Self::Wave(_) => None,
        }
    }

    /// Wave state, if this slot holds a wave
    pub fn wave(&self) -> Option<&WaveEffect> {
        match self {
            Self::Wave(effect) => Some(effect),
            _ => None,
        }
    }
}
