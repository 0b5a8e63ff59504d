#![no_std]

pub mod animation;
pub mod color;
pub mod context;
pub mod control;
pub mod effect;
pub mod frame_scheduler;
pub mod geometry;
pub mod scene;
pub mod surface;

pub use animation::{AnimationConfig, AnimationLoop, EffectHandle, LoopState};
pub use context::StripContext;
pub use control::{ControlIntent, ControlProcessor, ControlQueue, ControlReceiver, ControlSender};
pub use effect::{
    BouncingWormEffect, Effect, EffectKind, EffectSlot, Layer, LoopingWormEffect, WaveEffect,
};
pub use frame_scheduler::FrameScheduler;
pub use geometry::{GeometryError, StripGeometry};
pub use surface::{FrameBuffer, StripSurface};

pub use color::{Hsl, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push finished frames to real hardware.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
