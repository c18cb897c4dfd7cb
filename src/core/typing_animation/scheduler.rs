//! Scheduling abstraction for the typing animation
//!
//! The engine never talks to a real clock. It asks a [`Scheduler`] to run a
//! callback after a delay and keeps the returned [`TimerHandle`] so the
//! callback can be cancelled later.
//!
//! [`ManualScheduler`] is a virtual-time implementation: nothing runs until
//! the owner calls [`ManualScheduler::advance`] or [`ManualScheduler::run_next`],
//! which makes animation tests fully deterministic.
//!
//! # Example
//!
//! ```
//! use accessable::core::typing_animation::{ManualScheduler, Scheduler};
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = fired.clone();
//!
//! let _handle = scheduler
//!     .schedule(Duration::from_millis(10), Box::new(move || flag.set(true)))
//!     .unwrap();
//!
//! scheduler.advance(Duration::from_millis(9));
//! assert!(!fired.get());
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Errors returned when a scheduler cannot accept a new registration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Scheduler rejected the timer: {0}")]
    Rejected(String),

    #[error("Scheduler is shut down")]
    ShutDown,
}

/// Handle to one outstanding scheduled callback
pub trait TimerHandle {
    /// Cancel the callback. Cancelling an already fired timer is a no-op.
    fn cancel(self);
}

/// Something that can run a callback after a delay
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Register `task` to run once after `delay`.
    ///
    /// Implementations must never run `task` synchronously, even for a zero delay.
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, ScheduleError>;
}

/// Ordering key for queued tasks: due time first, then registration order
type TaskKey = (Duration, u64);

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_seq: u64,
    tasks: BTreeMap<TaskKey, Box<dyn FnOnce()>>,
    scheduled_total: u64,
    shut_down: bool,
    /// Remaining registrations before the scheduler starts rejecting
    budget: Option<u64>,
}

/// Virtual-time scheduler driven explicitly by its owner
///
/// Clones share the same queue and clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

/// Handle returned by [`ManualScheduler`]
#[derive(Clone)]
pub struct ManualHandle {
    key: TaskKey,
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of callbacks waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Total number of accepted registrations since creation
    pub fn scheduled_total(&self) -> u64 {
        self.queue.borrow().scheduled_total
    }

    /// Refuse every registration from now on
    pub fn shut_down(&self) {
        self.queue.borrow_mut().shut_down = true;
    }

    /// Accept `count` more registrations, then reject the rest
    pub fn reject_after(&self, count: u64) {
        self.queue.borrow_mut().budget = Some(count);
    }

    /// Move the clock forward by `by`, firing every callback that becomes due.
    ///
    /// Callbacks registered while advancing also fire if they fall inside the
    /// window. Returns the number of callbacks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        while let Some(task) = self.pop_due(target) {
            task();
            fired += 1;
        }

        self.queue.borrow_mut().now = target;
        fired
    }

    /// Jump to the next due callback and fire it.
    ///
    /// Returns `false` when nothing is queued.
    pub fn run_next(&self) -> bool {
        let task = {
            let mut queue = self.queue.borrow_mut();
            let Some((key, task)) = queue.tasks.pop_first() else {
                return false;
            };
            queue.now = queue.now.max(key.0);
            task
        };
        task();
        true
    }

    /// Fire up to `limit` callbacks one after another
    pub fn run_steps(&self, limit: usize) -> usize {
        let mut fired = 0;
        while fired < limit && self.run_next() {
            fired += 1;
        }
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut queue = self.queue.borrow_mut();
        let key = *queue.tasks.keys().next()?;
        if key.0 > target {
            return None;
        }
        queue.now = queue.now.max(key.0);
        queue.tasks.remove(&key)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<ManualHandle, ScheduleError> {
        let mut queue = self.queue.borrow_mut();

        if queue.shut_down {
            return Err(ScheduleError::ShutDown);
        }
        if let Some(budget) = queue.budget.as_mut() {
            if *budget == 0 {
                return Err(ScheduleError::Rejected("timer budget exhausted".to_string()));
            }
            *budget -= 1;
        }

        let key = (queue.now + delay, queue.next_seq);
        queue.next_seq += 1;
        queue.scheduled_total += 1;
        queue.tasks.insert(key, task);

        Ok(ManualHandle {
            key,
            queue: self.queue.clone(),
        })
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        self.queue.borrow_mut().tasks.remove(&self.key);
    }
}
