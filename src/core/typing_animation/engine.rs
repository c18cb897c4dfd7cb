//! Typing animation state machine
//!
//! Drives one placeholder string through the cycle
//! `Delaying -> Typing -> Pausing -> Erasing -> Typing -> ...`. Every step
//! runs inside its own scheduled callback ("tick"), and at most one callback
//! is outstanding at any time.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::config::TypingConfig;
use super::scheduler::{Scheduler, TimerHandle};

/// Stage of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No candidates; nothing is ever scheduled
    #[default]
    Idle,
    /// Waiting for the initial delay before the first candidate
    Delaying,
    /// Revealing the active candidate one character per tick
    Typing,
    /// Holding the fully revealed candidate
    Pausing,
    /// Removing the active candidate one character per tick
    Erasing,
}

#[derive(Debug, Clone, Copy)]
struct Timings {
    typing: Duration,
    erasing: Duration,
    pause: Duration,
    initial: Duration,
}

impl From<&TypingConfig> for Timings {
    fn from(config: &TypingConfig) -> Self {
        Self {
            typing: config.typing_speed(),
            erasing: config.erasing_speed(),
            pause: config.pause_duration(),
            initial: config.initial_delay(),
        }
    }
}

struct AnimationState<H> {
    texts: Vec<String>,
    base_text: String,
    phase: Phase,
    text_index: usize,
    /// Characters of the active candidate currently shown
    revealed: usize,
    pending: Option<H>,
    /// Bumped on every registration and restart; a tick carrying an older value is stale
    epoch: u64,
    disposed: bool,
    halted: bool,
}

impl<H> AnimationState<H> {
    fn candidate(&self) -> &str {
        self.texts
            .get(self.text_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn candidate_len(&self) -> usize {
        self.candidate().chars().count()
    }

    fn display_text(&self) -> String {
        let mut text = self.base_text.clone();
        text.extend(self.candidate().chars().take(self.revealed));
        text
    }

    /// Move back to the start of the cycle. Returns the delay of the first tick.
    fn restart(&mut self, timings: &Timings) -> Option<Duration> {
        self.epoch += 1;
        self.text_index = 0;
        self.revealed = 0;
        if self.texts.is_empty() {
            self.phase = Phase::Idle;
            None
        } else {
            self.phase = Phase::Delaying;
            Some(timings.initial)
        }
    }

    /// Apply one transition. Returns the delay until the next tick.
    fn step(&mut self, timings: &Timings) -> Option<Duration> {
        if self.texts.is_empty() {
            self.phase = Phase::Idle;
            return None;
        }

        match self.phase {
            Phase::Idle => None,
            Phase::Delaying => {
                self.phase = Phase::Typing;
                self.text_index = 0;
                self.revealed = 0;
                Some(timings.typing)
            }
            Phase::Typing => {
                let len = self.candidate_len();
                if self.revealed < len {
                    self.revealed += 1;
                }
                if self.revealed < len {
                    Some(timings.typing)
                } else {
                    self.phase = Phase::Pausing;
                    Some(timings.pause)
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Erasing;
                Some(timings.erasing)
            }
            Phase::Erasing => {
                self.revealed = self.revealed.saturating_sub(1);
                if self.revealed > 0 {
                    Some(timings.erasing)
                } else {
                    self.text_index = (self.text_index + 1) % self.texts.len();
                    self.phase = Phase::Typing;
                    Some(timings.typing)
                }
            }
        }
    }
}

struct Shared<S: Scheduler> {
    scheduler: S,
    timings: Timings,
    state: RefCell<AnimationState<S::Handle>>,
    listener: RefCell<Option<Rc<dyn Fn(&str)>>>,
}

impl<S: Scheduler + 'static> Shared<S> {
    /// Register the next tick. Must only be called with no pending timer.
    fn arm(shared: &Rc<Self>, delay: Duration) {
        let epoch = {
            let mut state = shared.state.borrow_mut();
            // A listener may have disposed the animation mid-tick
            if state.disposed || state.halted {
                return;
            }
            debug_assert!(state.pending.is_none());
            state.epoch += 1;
            state.epoch
        };

        let weak: Weak<Self> = Rc::downgrade(shared);
        let task = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                Self::tick(&shared, epoch);
            }
        });

        match shared.scheduler.schedule(delay, task) {
            Ok(handle) => shared.state.borrow_mut().pending = Some(handle),
            Err(err) => {
                tracing::warn!("Typing animation halted, could not schedule next step: {}", err);
                shared.state.borrow_mut().halted = true;
            }
        }
    }

    fn tick(shared: &Rc<Self>, epoch: u64) {
        let (before, next) = {
            let mut state = shared.state.borrow_mut();
            if state.disposed || state.halted || state.epoch != epoch {
                return;
            }
            // The firing timer is spent
            state.pending = None;

            let before = state.display_text();
            let next = state.step(&shared.timings);
            (before, next)
        };

        if shared.state.borrow().display_text() != before {
            shared.notify();
        }
        // A listener may have restarted the animation in the meantime
        let current = shared.state.borrow().epoch == epoch;
        if let Some(delay) = next.filter(|_| current) {
            Self::arm(shared, delay);
        }
    }

    fn notify(&self) {
        let text = self.state.borrow().display_text();
        // Cloned out so the listener may resubscribe
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&text);
        }
    }
}

/// Controller for one running typing animation
///
/// Created with [`TypingAnimation::new`], read with
/// [`TypingAnimation::display_text`], stopped with [`TypingAnimation::dispose`]
/// (or by dropping it). Not `Send`: each mounted component owns its own
/// instance.
///
/// # Example
/// ```
/// # use accessable::core::typing_animation::{ManualScheduler, TypingAnimation, TypingConfig};
/// # use std::time::Duration;
/// let scheduler = ManualScheduler::new();
/// let config = TypingConfig::new(["cat"])
///     .with_base_text("I want ")
///     .with_speeds(10, 5)
///     .with_initial_delay(0);
/// let animation = TypingAnimation::new(config, scheduler.clone());
///
/// assert_eq!(animation.display_text(), "I want ");
/// scheduler.advance(Duration::from_millis(10));
/// assert_eq!(animation.display_text(), "I want c");
///
/// animation.dispose();
/// scheduler.advance(Duration::from_secs(60));
/// assert_eq!(animation.display_text(), "I want c");
/// ```
pub struct TypingAnimation<S: Scheduler + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler + 'static> TypingAnimation<S> {
    /// Start a new animation.
    ///
    /// With no candidates the animation stays idle and shows only the base text.
    /// Otherwise the first tick is scheduled after the initial delay.
    pub fn new(config: TypingConfig, scheduler: S) -> Self {
        let timings = Timings::from(&config);
        let shared = Rc::new(Shared {
            scheduler,
            timings,
            state: RefCell::new(AnimationState {
                texts: config.texts,
                base_text: config.base_text,
                phase: Phase::Idle,
                text_index: 0,
                revealed: 0,
                pending: None,
                epoch: 0,
                disposed: false,
                halted: false,
            }),
            listener: RefCell::new(None),
        });

        let first = shared.state.borrow_mut().restart(&timings);
        if let Some(delay) = first {
            Shared::arm(&shared, delay);
        }

        Self { shared }
    }

    /// Current placeholder text: the base text plus the revealed part of the candidate
    pub fn display_text(&self) -> String {
        self.shared.state.borrow().display_text()
    }

    /// Be told the new display text after every change
    ///
    /// Replaces any previous listener.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Stop the animation and cancel the pending timer. Safe to call repeatedly.
    pub fn dispose(&self) {
        let pending = {
            let mut state = self.shared.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.pending.take()
        };

        if let Some(handle) = pending {
            handle.cancel();
        }
        tracing::debug!("Typing animation disposed");
    }

    /// Swap in a new candidate list and start over from the initial delay
    ///
    /// An empty list moves the animation to [`Phase::Idle`]. Ignored once the
    /// animation is disposed or halted.
    pub fn replace_texts(&self, texts: Vec<String>) {
        let (pending, first) = {
            let mut state = self.shared.state.borrow_mut();
            if state.disposed || state.halted {
                return;
            }
            state.texts = texts;
            let pending = state.pending.take();
            let first = state.restart(&self.shared.timings);
            (pending, first)
        };

        if let Some(handle) = pending {
            handle.cancel();
        }
        self.shared.notify();
        if let Some(delay) = first {
            Shared::arm(&self.shared, delay);
        }
    }

    /// Edit the entries of the current candidate list in place
    ///
    /// The position in the cycle is kept and clamped to the new bounds, and the
    /// pending timer keeps running. An empty list moves the animation to
    /// [`Phase::Idle`]; a non-empty list given to an idle animation starts it.
    pub fn patch_texts(&self, texts: Vec<String>) {
        let (pending, first) = {
            let mut state = self.shared.state.borrow_mut();
            if state.disposed || state.halted {
                return;
            }
            state.texts = texts;

            if state.texts.is_empty() || state.phase == Phase::Idle {
                let pending = state.pending.take();
                let first = state.restart(&self.shared.timings);
                (pending, first)
            } else {
                state.text_index = state.text_index.min(state.texts.len() - 1);
                state.revealed = state.revealed.min(state.candidate_len());
                (None, None)
            }
        };

        if let Some(handle) = pending {
            handle.cancel();
        }
        self.shared.notify();
        if let Some(delay) = first {
            Shared::arm(&self.shared, delay);
        }
    }

    /// Change the fixed prefix. Phase and timer are untouched.
    pub fn set_base_text(&self, base_text: impl Into<String>) {
        self.shared.state.borrow_mut().base_text = base_text.into();
        self.shared.notify();
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.borrow().phase
    }

    /// Index of the active candidate
    pub fn text_index(&self) -> usize {
        self.shared.state.borrow().text_index
    }

    /// Number of characters of the active candidate currently shown
    pub fn revealed_len(&self) -> usize {
        self.shared.state.borrow().revealed
    }

    /// Character count of the active candidate (0 when idle)
    pub fn candidate_len(&self) -> usize {
        self.shared.state.borrow().candidate_len()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.shared.state.borrow().pending.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.state.borrow().disposed
    }

    /// Whether the scheduler refused a registration and the animation froze
    pub fn is_halted(&self) -> bool {
        self.shared.state.borrow().halted
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> TypingConfig {
        let state = self.shared.state.borrow();
        let timings = &self.shared.timings;
        TypingConfig {
            texts: state.texts.clone(),
            base_text: state.base_text.clone(),
            typing_speed_ms: duration_ms(timings.typing),
            erasing_speed_ms: duration_ms(timings.erasing),
            pause_duration_ms: duration_ms(timings.pause),
            initial_delay_ms: duration_ms(timings.initial),
        }
    }
}

impl<S: Scheduler + 'static> Drop for TypingAnimation<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn duration_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
