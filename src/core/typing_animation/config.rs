//! Configuration for the typing animation

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::prompts::EXAMPLE_IDEAS;

/// Default delay between typed characters (ms)
pub const DEFAULT_TYPING_SPEED_MS: u32 = 100;

/// Default delay between erased characters (ms)
pub const DEFAULT_ERASING_SPEED_MS: u32 = 50;

/// Default hold time for a fully typed candidate (ms)
pub const DEFAULT_PAUSE_DURATION_MS: u32 = 2000;

/// Default delay before the first candidate starts typing (ms)
pub const DEFAULT_INITIAL_DELAY_MS: u32 = 500;

/// Default prefix shown before the animated candidate
pub const DEFAULT_BASE_TEXT: &str = "I want to build ";

/// Typing animation settings
///
/// All durations are in milliseconds. Zero is allowed and means the next
/// step is scheduled with no delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Candidates to cycle through, in order
    pub texts: Vec<String>,
    /// Fixed prefix, always shown
    pub base_text: String,
    pub typing_speed_ms: u32,
    pub erasing_speed_ms: u32,
    pub pause_duration_ms: u32,
    pub initial_delay_ms: u32,
}

impl TypingConfig {
    /// Create a config for the given candidates with default timings and prefix
    pub fn new<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the fixed prefix
    pub fn with_base_text(mut self, base_text: impl Into<String>) -> Self {
        self.base_text = base_text.into();
        self
    }

    /// Set the per-character typing and erasing cadences
    pub fn with_speeds(mut self, typing_ms: u32, erasing_ms: u32) -> Self {
        self.typing_speed_ms = typing_ms;
        self.erasing_speed_ms = erasing_ms;
        self
    }

    /// Set the hold time for a fully typed candidate
    pub fn with_pause(mut self, pause_ms: u32) -> Self {
        self.pause_duration_ms = pause_ms;
        self
    }

    /// Set the delay before the first typing phase
    pub fn with_initial_delay(mut self, delay_ms: u32) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms.into())
    }

    pub fn erasing_speed(&self) -> Duration {
        Duration::from_millis(self.erasing_speed_ms.into())
    }

    pub fn pause_duration(&self) -> Duration {
        Duration::from_millis(self.pause_duration_ms.into())
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms.into())
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            texts: EXAMPLE_IDEAS.iter().map(|idea| idea.to_string()).collect(),
            base_text: DEFAULT_BASE_TEXT.to_string(),
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            erasing_speed_ms: DEFAULT_ERASING_SPEED_MS,
            pause_duration_ms: DEFAULT_PAUSE_DURATION_MS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
        }
    }
}
