//! User toggles
//!
//! Input handlers (buttons, a UI thread, an interrupt) post [`ControlIntent`]s
//! to a [`ControlQueue`]; the loop owner drains them once per tick with
//! [`ControlProcessor::process_pending`].
//!
//! The queue holds at most one pending change per target (wave visibility and
//! playback). Each new intent is folded into the pending change, so draining
//! reaches the same state as applying every intent in order, and posting never
//! fails however fast the buttons are pressed.

use core::cell::Cell;

use critical_section::Mutex;

use crate::animation::AnimationLoop;

/// Request to change the playback or visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Flip visibility of the background waves
    ToggleWaves,
    SetWavesVisible(bool),
    /// Flip between running and paused
    TogglePause,
    SetPaused(bool),
}

impl ControlIntent {
    const fn change(self) -> Change {
        match self {
            Self::ToggleWaves | Self::TogglePause => Change::Toggle,
            Self::SetWavesVisible(value) | Self::SetPaused(value) => Change::Set(value),
        }
    }
}

/// Pending change of a single boolean target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Toggle,
    Set(bool),
}

impl Change {
    /// Change equivalent to `self` followed by `next`, `None` if they cancel
    const fn followed_by(self, next: Self) -> Option<Self> {
        match (self, next) {
            (Self::Toggle, Self::Toggle) => None,
            (Self::Set(value), Self::Toggle) => Some(Self::Set(!value)),
            (_, Self::Set(value)) => Some(Self::Set(value)),
        }
    }

    const fn fold(pending: Option<Self>, next: Self) -> Option<Self> {
        match pending {
            Some(pending) => pending.followed_by(next),
            None => Some(next),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    waves: Option<Change>,
    playback: Option<Change>,
}

impl Pending {
    const EMPTY: Self = Self {
        waves: None,
        playback: None,
    };

    fn post(&mut self, intent: ControlIntent) {
        let change = intent.change();
        match intent {
            ControlIntent::ToggleWaves | ControlIntent::SetWavesVisible(_) => {
                self.waves = Change::fold(self.waves, change);
            }
            ControlIntent::TogglePause | ControlIntent::SetPaused(_) => {
                self.playback = Change::fold(self.playback, change);
            }
        }
    }

    fn len(self) -> usize {
        usize::from(self.waves.is_some()) + usize::from(self.playback.is_some())
    }

    fn intents(self) -> impl Iterator<Item = ControlIntent> {
        let waves = self.waves.map(|change| match change {
            Change::Toggle => ControlIntent::ToggleWaves,
            Change::Set(visible) => ControlIntent::SetWavesVisible(visible),
        });
        let playback = self.playback.map(|change| match change {
            Change::Toggle => ControlIntent::TogglePause,
            Change::Set(paused) => ControlIntent::SetPaused(paused),
        });
        waves.into_iter().chain(playback)
    }
}

/// Coalescing queue of control intents
///
/// Guarded by a `critical-section` mutex, so it can live in a `static` and be
/// fed from another thread or an interrupt handler.
pub struct ControlQueue {
    pending: Mutex<Cell<Pending>>,
}

impl ControlQueue {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(Pending::EMPTY)),
        }
    }

    /// Handle for input handlers
    pub const fn sender(&self) -> ControlSender<'_> {
        ControlSender { queue: self }
    }

    /// Handle for the loop owner
    pub const fn receiver(&self) -> ControlReceiver<'_> {
        ControlReceiver { queue: self }
    }

    /// Fold `intent` into the pending changes
    pub fn post(&self, intent: ControlIntent) {
        critical_section::with(|cs| {
            let cell = self.pending.borrow(cs);
            let mut pending = cell.get();
            pending.post(intent);
            cell.set(pending);
        });
    }

    /// Take every pending intent, leaving the queue empty
    pub fn drain(&self) -> impl Iterator<Item = ControlIntent> + use<> {
        critical_section::with(|cs| self.pending.borrow(cs).replace(Pending::EMPTY)).intents()
    }

    /// Number of intents a drain would yield
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow(cs).get().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle of a [`ControlQueue`]
#[derive(Clone, Copy)]
pub struct ControlSender<'a> {
    queue: &'a ControlQueue,
}

impl ControlSender<'_> {
    pub fn post(&self, intent: ControlIntent) {
        self.queue.post(intent);
    }
}

/// Draining handle of a [`ControlQueue`]
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a> {
    queue: &'a ControlQueue,
}

impl ControlReceiver<'_> {
    pub fn drain(&self) -> impl Iterator<Item = ControlIntent> + use<> {
        self.queue.drain()
    }
}

/// Applies queued control intents to an animation loop
pub struct ControlProcessor<'a> {
    intents: ControlReceiver<'a>,
}

impl<'a> ControlProcessor<'a> {
    pub const fn new(intents: ControlReceiver<'a>) -> Self {
        Self { intents }
    }

    /// Drain the queue (non-blocking) and apply the pending intents
    ///
    /// Returns the number of intents applied.
    pub fn process_pending<const MAX_EFFECTS: usize>(
        &mut self,
        animation: &mut AnimationLoop<MAX_EFFECTS>,
    ) -> usize {
        let mut applied = 0;
        for intent in self.intents.drain() {
            animation.apply(intent);
            applied += 1;
        }
        applied
    }
}
