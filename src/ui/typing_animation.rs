//! Typing animation bound to the Leptos reactive system
//!
//! [`use_typing_animation`] starts one [`TypingAnimation`] per mounted
//! component, mirrors its text into a signal and disposes it when the owner
//! is cleaned up. On the server the placeholder is rendered as the bare base
//! text, which is also what the browser shows before the first tick.

use leptos::prelude::*;

use crate::core::typing_animation::TypingConfig;

#[cfg(not(feature = "ssr"))]
use crate::core::typing_animation::{ScheduleError, Scheduler, TimerHandle, TypingAnimation};
#[cfg(not(feature = "ssr"))]
use std::time::Duration;

/// Scheduler backed by the browser's `setTimeout`
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(not(feature = "ssr"))]
impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<TimeoutHandle, ScheduleError> {
        set_timeout_with_handle(task, delay)
            .map_err(|err| ScheduleError::Rejected(format!("{:?}", err)))
    }
}

#[cfg(not(feature = "ssr"))]
impl TimerHandle for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Animated placeholder text
///
/// `texts` replaces the candidate list whenever it changes, restarting the
/// cycle. Timings and base text come from `config`; its `texts` field is
/// ignored in favour of the signal.
pub fn use_typing_animation(texts: Signal<Vec<String>>, config: TypingConfig) -> Signal<String> {
    #[cfg(not(feature = "ssr"))]
    {
        let config = TypingConfig {
            texts: texts.get_untracked(),
            ..config
        };
        let (display, set_display) = signal(config.base_text.clone());

        let animation = TypingAnimation::new(config, BrowserScheduler);
        animation.subscribe(move |text| set_display.set(text.to_string()));
        let animation = StoredValue::new_local(animation);

        // A new list restarts the cycle; the first run only subscribes
        Effect::new(move |previous: Option<()>| {
            let texts = texts.get();
            if previous.is_some() {
                animation.with_value(|animation| animation.replace_texts(texts));
            }
        });

        on_cleanup(move || {
            let _ = animation.try_with_value(|animation| animation.dispose());
        });

        display.into()
    }

    #[cfg(feature = "ssr")]
    {
        let _ = texts;
        let base_text = config.base_text;
        Signal::derive(move || base_text.clone())
    }
}
