//! Typing placeholder animation
//!
//! Cycles a placeholder through a list of example prompts, typing and erasing
//! one character at a time. The engine is a plain state machine; time comes
//! from an injected [`Scheduler`], so the browser uses real timeouts while
//! tests drive a [`ManualScheduler`] in virtual time.

mod config;
mod engine;
pub mod scheduler;
#[cfg(test)]
mod tests;

pub use config::*;
pub use engine::{Phase, TypingAnimation};
pub use scheduler::{ManualHandle, ManualScheduler, ScheduleError, Scheduler, TimerHandle};
