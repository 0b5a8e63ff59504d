use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::color::{Rgb, SILVER};
use crate::context::StripContext;
use crate::control::ControlIntent;
use crate::effect::{EffectSlot, Layer};
use crate::geometry::StripGeometry;
use crate::surface::StripSurface;

/// Configuration for the animation loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub geometry: StripGeometry,
    /// Color the strip is cleared to before effects draw
    pub clear_color: Rgb,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            geometry: StripGeometry::DEFAULT,
            clear_color: SILVER,
        }
    }
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Effects are frozen but still drawn every tick
    Paused,
}

/// Index of an effect registered in an [`AnimationLoop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(usize);

/// Animation loop - owns the effects and composites them every frame
pub struct AnimationLoop<const MAX_EFFECTS: usize> {
    config: AnimationConfig,
    effects: Vec<EffectSlot, MAX_EFFECTS>,
    state: LoopState,
    last_frame: Option<Instant>,
}

impl<const MAX_EFFECTS: usize> AnimationLoop<MAX_EFFECTS> {
    pub const fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            effects: Vec::new(),
            state: LoopState::Running,
            last_frame: None,
        }
    }

    pub const fn geometry(&self) -> StripGeometry {
        self.config.geometry
    }

    /// Register an effect
    ///
    /// Effects are updated and drawn in registration order within their
    /// layer. Returns the effect back if the loop is full.
    pub fn push(&mut self, effect: impl Into<EffectSlot>) -> Result<EffectHandle, EffectSlot> {
        let effect = effect.into();
        let kind = effect.kind();
        let handle = EffectHandle(self.effects.len());
        if let Err(rejected) = self.effects.push(effect) {
            log::warn!("effect list full ({}), dropping {}", MAX_EFFECTS, kind.as_str());
            return Err(rejected);
        }
        log::debug!("registered {} as #{}", kind.as_str(), handle.0);
        Ok(handle)
    }

    pub fn effect(&self, handle: EffectHandle) -> Option<&EffectSlot> {
        self.effects.get(handle.0)
    }

    pub fn effect_mut(&mut self, handle: EffectHandle) -> Option<&mut EffectSlot> {
        self.effects.get_mut(handle.0)
    }

    pub fn effects(&self) -> &[EffectSlot] {
        &self.effects
    }

    pub const fn state(&self) -> LoopState {
        self.state
    }

    pub const fn is_paused(&self) -> bool {
        matches!(self.state, LoopState::Paused)
    }

    pub fn set_paused(&mut self, paused: bool) {
        let state = if paused {
            LoopState::Paused
        } else {
            LoopState::Running
        };
        if state != self.state {
            log::debug!("animation {:?}", state);
        }
        self.state = state;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.is_paused());
    }

    /// Returns `true` if every background effect is visible
    pub fn waves_visible(&self) -> bool {
        self.effects
            .iter()
            .filter(|effect| effect.layer() == Layer::Background)
            .all(EffectSlot::visible)
    }

    /// Show or hide all background effects
    pub fn set_waves_visible(&mut self, visible: bool) {
        log::debug!("waves visible: {visible}");
        for effect in &mut self.effects {
            if effect.layer() == Layer::Background {
                effect.set_visible(visible);
            }
        }
    }

    pub fn toggle_waves(&mut self) {
        self.set_waves_visible(!self.waves_visible());
    }

    /// Apply a user toggle
    pub fn apply(&mut self, intent: ControlIntent) {
        match intent {
            ControlIntent::ToggleWaves => self.toggle_waves(),
            ControlIntent::SetWavesVisible(visible) => self.set_waves_visible(visible),
            ControlIntent::TogglePause => self.toggle_paused(),
            ControlIntent::SetPaused(paused) => self.set_paused(paused),
        }
    }

    /// Process one frame
    ///
    /// Call once per display refresh with a monotonically increasing
    /// timestamp. The first call sees zero elapsed time, so the opening frame
    /// shows the effects at their initial positions whatever the host clock
    /// reads at startup (a time-since-boot clock would otherwise make the
    /// first step jump by the whole uptime). Returns the elapsed time the
    /// effects were advanced by (zero while paused).
    pub fn tick<S: StripSurface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Duration {
        let elapsed = self
            .last_frame
            .map_or(Duration::from_ticks(0), |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);

        let advanced = if self.is_paused() {
            Duration::from_ticks(0)
        } else {
            self.update(elapsed);
            elapsed
        };
        log::trace!("frame at {}ms, advanced {}us", now.as_millis(), advanced.as_micros());

        self.draw(surface);
        advanced
    }

    fn update(&mut self, elapsed: Duration) {
        let geometry = self.config.geometry;
        for effect in &mut self.effects {
            effect.update(elapsed, geometry);
        }
    }

    /// Clear the strip, then draw background and foreground layers
    fn draw<S: StripSurface + ?Sized>(&self, surface: &mut S) {
        let mut ctx = StripContext::new(surface, self.config.geometry, self.config.clear_color);
        ctx.clear_strip();

        for layer in [Layer::Background, Layer::Foreground] {
            for effect in &self.effects {
                if effect.layer() == layer && effect.visible() {
                    effect.draw(&mut ctx);
                }
            }
        }
    }
}
