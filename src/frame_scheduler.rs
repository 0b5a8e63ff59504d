//! Frame scheduling and timing utilities.
//!
//! For hosts that have no display-refresh callback of their own: the
//! scheduler ticks the animation, pushes the frame to an output driver and
//! tells the caller how long to wait. The caller is responsible for
//! sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{AnimationLoop, FrameBuffer, OutputDriver};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Time the effects were advanced by in this frame.
    pub advanced: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(animation, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(get_current_time_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const MAX_LEDS: usize, const MAX_EFFECTS: usize> {
    output: O,
    animation: AnimationLoop<MAX_EFFECTS>,
    frame: FrameBuffer<MAX_LEDS>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<O: OutputDriver, const MAX_LEDS: usize, const MAX_EFFECTS: usize>
    FrameScheduler<O, MAX_LEDS, MAX_EFFECTS>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(animation: AnimationLoop<MAX_EFFECTS>, driver: O) -> Self {
        Self::with_frame_duration(animation, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    ///
    /// The frame buffer covers the strip's LED count, capped at `MAX_LEDS`.
    pub fn with_frame_duration(
        animation: AnimationLoop<MAX_EFFECTS>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        let leds = animation.geometry().nof_leds();
        if leds > MAX_LEDS {
            log::warn!("strip has {} LEDs, only {} are rendered", leds, MAX_LEDS);
        }

        Self {
            output: driver,
            animation,
            frame: FrameBuffer::new(leds),
            next_frame: None,
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Falling more than two frames behind resets the schedule to `now`
    /// instead of rendering a burst of catch-up frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        let scheduled = match self.next_frame {
            Some(next) if now <= next + max_drift => next,
            Some(next) => {
                log::warn!(
                    "frame {}ms late, resetting schedule",
                    now.saturating_duration_since(next).as_millis()
                );
                now
            }
            None => now,
        };

        let advanced = self.animation.tick(now, &mut self.frame);
        self.output.write(self.frame.as_slice());

        let next_deadline = scheduled + self.frame_duration;
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
            advanced,
        }
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[crate::Rgb] {
        self.frame.as_slice()
    }

    pub fn animation(&self) -> &AnimationLoop<MAX_EFFECTS> {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationLoop<MAX_EFFECTS> {
        &mut self.animation
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
