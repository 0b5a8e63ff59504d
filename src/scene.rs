//! Reference scene
//!
//! Three worms over a cyan background wave:
//! - a slow blue looping worm (63 mm/s, 8 LEDs)
//! - a fast red looping worm (201 mm/s, 5 LEDs)
//! - a magenta bouncing worm (300 mm/s, 3 LEDs)

use crate::color::{BLUE, MAGENTA, RED};
use crate::effect::{BouncingWormEffect, LoopingWormEffect, WaveEffect};
use crate::{AnimationConfig, AnimationLoop, EffectSlot};

/// Number of effects in [`demo`]
pub const DEMO_EFFECTS: usize = 4;

/// Build the reference scene
///
/// Returns the first effect that did not fit if `MAX_EFFECTS` is smaller
/// than [`DEMO_EFFECTS`].
pub fn demo<const MAX_EFFECTS: usize>(
    config: AnimationConfig,
) -> Result<AnimationLoop<MAX_EFFECTS>, EffectSlot> {
    let mut animation = AnimationLoop::new(config);
    animation.push(WaveEffect::new())?;
    animation.push(LoopingWormEffect::new(0.0, 63.0, 8, BLUE))?;
    animation.push(LoopingWormEffect::new(0.0, 201.0, 5, RED))?;
    animation.push(BouncingWormEffect::new(0.0, 300.0, 3, MAGENTA))?;
    Ok(animation)
}
