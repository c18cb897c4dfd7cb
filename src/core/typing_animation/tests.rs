#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::core::typing_animation::{
        ManualScheduler, Phase, TypingAnimation, TypingConfig,
    };

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn cat_dog() -> TypingConfig {
        TypingConfig::new(["cat", "dog"])
            .with_base_text("I want ")
            .with_speeds(10, 5)
            .with_pause(20)
            .with_initial_delay(0)
    }

    fn start(config: TypingConfig) -> (ManualScheduler, TypingAnimation<ManualScheduler>) {
        let scheduler = ManualScheduler::new();
        let animation = TypingAnimation::new(config, scheduler.clone());
        (scheduler, animation)
    }

    fn record(animation: &TypingAnimation<ManualScheduler>) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        animation.subscribe(move |text| sink.borrow_mut().push(text.to_string()));
        seen
    }

    // ========================================================================
    // Concrete scenario
    // ========================================================================

    #[test]
    fn test_cat_dog_sequence() {
        let (scheduler, animation) = start(cat_dog());
        let seen = record(&animation);

        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(animation.phase(), Phase::Delaying);

        scheduler.advance(ms(120));

        assert_eq!(
            *seen.borrow(),
            vec![
                "I want c",
                "I want ca",
                "I want cat",
                "I want ca",
                "I want c",
                "I want ",
                "I want d",
                "I want do",
                "I want dog",
                "I want do",
            ]
        );
    }

    #[test]
    fn test_cat_dog_timing() {
        let (scheduler, animation) = start(cat_dog());

        scheduler.advance(Duration::ZERO);
        assert_eq!(animation.phase(), Phase::Typing);
        assert_eq!(animation.display_text(), "I want ");

        scheduler.advance(ms(10));
        assert_eq!(animation.display_text(), "I want c");
        scheduler.advance(ms(20));
        assert_eq!(animation.display_text(), "I want cat");
        assert_eq!(animation.phase(), Phase::Pausing);

        // Held through the pause
        scheduler.advance(ms(19));
        assert_eq!(animation.display_text(), "I want cat");
        scheduler.advance(ms(1));
        assert_eq!(animation.phase(), Phase::Erasing);
        assert_eq!(animation.display_text(), "I want cat");

        scheduler.advance(ms(5));
        assert_eq!(animation.display_text(), "I want ca");
        scheduler.advance(ms(10));
        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(animation.phase(), Phase::Typing);
        assert_eq!(animation.text_index(), 1);

        scheduler.advance(ms(10));
        assert_eq!(animation.display_text(), "I want d");
    }

    #[test]
    fn test_initial_delay_holds_base_text() {
        let (scheduler, animation) = start(cat_dog().with_initial_delay(500));

        scheduler.advance(ms(499));
        assert_eq!(animation.phase(), Phase::Delaying);
        scheduler.advance(ms(1));
        assert_eq!(animation.phase(), Phase::Typing);
        assert_eq!(animation.revealed_len(), 0);

        scheduler.advance(ms(10));
        assert_eq!(animation.display_text(), "I want c");
    }

    // ========================================================================
    // Structural properties
    // ========================================================================

    #[test]
    fn test_revealed_length_stays_bounded() {
        let config = TypingConfig::new(["a", "longer text", "", "ñandú 🦀"]).with_speeds(3, 1);
        let (scheduler, animation) = start(config);

        for _ in 0..500 {
            assert!(scheduler.run_next());
            assert!(animation.revealed_len() <= animation.candidate_len());
        }
    }

    #[test]
    fn test_cycle_closes() {
        let (scheduler, animation) = start(cat_dog());

        // Delaying tick
        scheduler.run_next();
        assert_eq!((animation.text_index(), animation.revealed_len()), (0, 0));

        // Per candidate: 3 typing ticks, 1 pause tick, 3 erasing ticks
        scheduler.run_steps(7);
        assert_eq!((animation.text_index(), animation.revealed_len()), (1, 0));
        scheduler.run_steps(7);
        assert_eq!((animation.text_index(), animation.revealed_len()), (0, 0));
        assert_eq!(animation.phase(), Phase::Typing);

        // And again, forever
        scheduler.run_steps(14);
        assert_eq!((animation.text_index(), animation.revealed_len()), (0, 0));
    }

    #[test]
    fn test_phases_move_length_monotonically() {
        let (scheduler, animation) = start(cat_dog());

        for _ in 0..200 {
            let phase = animation.phase();
            let before = animation.revealed_len();
            scheduler.run_next();
            let after = animation.revealed_len();

            match (phase, animation.phase()) {
                (Phase::Typing, Phase::Typing) | (Phase::Typing, Phase::Pausing) => {
                    assert_eq!(after, before + 1)
                }
                (Phase::Erasing, Phase::Erasing) | (Phase::Erasing, Phase::Typing) => {
                    assert_eq!(after + 1, before)
                }
                (Phase::Pausing, _) | (Phase::Delaying, _) => assert_eq!(after, before),
                (from, to) => panic!("unexpected transition {:?} -> {:?}", from, to),
            }
        }
    }

    #[test]
    fn test_single_pending_timer() {
        let (scheduler, animation) = start(cat_dog());

        for _ in 0..100 {
            assert_eq!(scheduler.pending(), 1);
            assert!(animation.has_pending_timer());
            scheduler.run_next();
        }
    }

    #[test]
    fn test_zero_durations_still_asynchronous() {
        let config = TypingConfig::new(["ab"])
            .with_speeds(0, 0)
            .with_pause(0)
            .with_initial_delay(0);
        let (scheduler, animation) = start(config);

        // Nothing ran during construction
        assert_eq!(animation.phase(), Phase::Delaying);
        assert_eq!(scheduler.scheduled_total(), 1);

        // Each turn runs exactly one tick
        assert!(scheduler.run_next());
        assert_eq!(animation.phase(), Phase::Typing);
        assert!(scheduler.run_next());
        assert_eq!(animation.display_text(), "I want to build a");
        assert_eq!(scheduler.pending(), 1);
    }

    // ========================================================================
    // Idle
    // ========================================================================

    #[test]
    fn test_empty_texts_stay_idle() {
        let config = TypingConfig::new(Vec::<String>::new()).with_base_text("Describe it");
        let (scheduler, animation) = start(config);

        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(animation.display_text(), "Describe it");

        scheduler.advance(Duration::from_secs(3600));
        assert_eq!(animation.display_text(), "Describe it");
        assert_eq!(scheduler.scheduled_total(), 0);
        assert!(!animation.has_pending_timer());
    }

    #[test]
    fn test_single_empty_candidate_cycles_without_text() {
        let config = TypingConfig::new([""]).with_base_text(">");
        let (scheduler, animation) = start(config);

        scheduler.run_steps(20);
        assert_eq!(animation.display_text(), ">");
        assert_eq!(animation.revealed_len(), 0);
    }

    // ========================================================================
    // Dispose
    // ========================================================================

    #[test]
    fn test_dispose_is_idempotent() {
        let (scheduler, animation) = start(cat_dog());
        scheduler.advance(ms(20));

        animation.dispose();
        let once = (animation.display_text(), animation.phase(), scheduler.pending());
        animation.dispose();
        let twice = (animation.display_text(), animation.phase(), scheduler.pending());

        assert_eq!(once, twice);
        assert!(animation.is_disposed());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_no_mutation_after_dispose() {
        let (scheduler, animation) = start(cat_dog());
        let seen = record(&animation);
        scheduler.advance(ms(25));
        assert_eq!(animation.display_text(), "I want ca");

        animation.dispose();
        let count = seen.borrow().len();
        scheduler.advance(Duration::from_secs(3600));

        assert_eq!(animation.display_text(), "I want ca");
        assert_eq!(seen.borrow().len(), count);
        assert_eq!(scheduler.scheduled_total(), 4);
    }

    #[test]
    fn test_reconfigure_after_dispose_ignored() {
        let (scheduler, animation) = start(cat_dog());
        animation.dispose();

        animation.replace_texts(vec!["bird".to_string()]);
        animation.patch_texts(vec!["fish".to_string()]);
        scheduler.advance(Duration::from_secs(10));

        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(animation.config().texts, vec!["cat".to_string(), "dog".to_string()]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let scheduler = ManualScheduler::new();
        {
            let _animation = TypingAnimation::new(cat_dog(), scheduler.clone());
            scheduler.advance(ms(10));
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_dispose_from_listener() {
        let (scheduler, animation) = start(cat_dog());
        let animation = Rc::new(animation);

        let target = Rc::downgrade(&animation);
        animation.subscribe(move |text| {
            if text.ends_with("ca") {
                if let Some(animation) = target.upgrade() {
                    animation.dispose();
                }
            }
        });

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(animation.display_text(), "I want ca");
        assert!(animation.is_disposed());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_listener_can_resubscribe() {
        let (scheduler, animation) = start(cat_dog());
        let animation = Rc::new(animation);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let target = Rc::downgrade(&animation);
        let sink = seen.clone();
        animation.subscribe(move |_| {
            if let Some(animation) = target.upgrade() {
                let sink = sink.clone();
                animation.subscribe(move |text| sink.borrow_mut().push(text.to_string()));
            }
        });

        // "c" goes to the first listener, which hands over to the second
        scheduler.advance(ms(30));
        assert_eq!(*seen.borrow(), vec!["I want ca", "I want cat"]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_replace_from_listener_keeps_single_timer() {
        let (scheduler, animation) = start(cat_dog());
        let animation = Rc::new(animation);

        let target = Rc::downgrade(&animation);
        animation.subscribe(move |text| {
            if text.ends_with("cat") {
                if let Some(animation) = target.upgrade() {
                    animation.replace_texts(vec!["owl".to_string()]);
                }
            }
        });

        // The restart's zero initial delay fires within the same window
        scheduler.advance(ms(30));
        assert_eq!(animation.phase(), Phase::Typing);
        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(ms(10));
        assert_eq!(animation.display_text(), "I want o");
        assert_eq!(scheduler.pending(), 1);
    }

    // ========================================================================
    // Scheduling failure
    // ========================================================================

    #[test]
    fn test_scheduling_failure_freezes_text() {
        let scheduler = ManualScheduler::new();
        // Delaying tick plus two typing ticks, then nothing
        scheduler.reject_after(3);
        let animation = TypingAnimation::new(cat_dog(), scheduler.clone());

        scheduler.advance(Duration::from_secs(10));

        assert!(animation.is_halted());
        assert_eq!(animation.display_text(), "I want ca");
        assert!(!animation.has_pending_timer());

        // Never retried
        animation.replace_texts(vec!["bird".to_string()]);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(animation.display_text(), "I want ca");
    }

    #[test]
    fn test_scheduler_down_at_start() {
        let scheduler = ManualScheduler::new();
        scheduler.shut_down();

        let animation = TypingAnimation::new(cat_dog(), scheduler.clone());
        assert!(animation.is_halted());
        assert_eq!(animation.display_text(), "I want ");

        animation.dispose();
        assert!(animation.is_disposed());
    }

    // ========================================================================
    // Reconfiguration
    // ========================================================================

    #[test]
    fn test_replace_texts_resets() {
        let (scheduler, animation) = start(cat_dog().with_initial_delay(50));
        scheduler.advance(ms(120));
        assert_eq!(animation.text_index(), 1);

        animation.replace_texts(vec!["fish".to_string()]);
        assert_eq!(animation.phase(), Phase::Delaying);
        assert_eq!(animation.text_index(), 0);
        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(ms(50 + 10));
        assert_eq!(animation.display_text(), "I want f");
    }

    #[test]
    fn test_replace_with_empty_goes_idle() {
        let (scheduler, animation) = start(cat_dog());
        scheduler.advance(ms(20));

        animation.replace_texts(Vec::new());
        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_secs(60));
        assert_eq!(animation.display_text(), "I want ");
    }

    #[test]
    fn test_replace_revives_idle_engine() {
        let (scheduler, animation) = start(TypingConfig::new(Vec::<String>::new()).with_initial_delay(0));

        animation.replace_texts(vec!["ok".to_string()]);
        assert_eq!(animation.phase(), Phase::Delaying);

        scheduler.run_steps(2);
        assert_eq!(animation.display_text(), "I want to build o");
    }

    #[test]
    fn test_patch_texts_clamps_and_continues() {
        let (scheduler, animation) = start(cat_dog());
        // "dog" fully typed
        scheduler.advance(ms(95));
        assert_eq!(animation.display_text(), "I want dog");
        let scheduled = scheduler.scheduled_total();

        animation.patch_texts(vec!["cat".to_string(), "do".to_string()]);
        assert_eq!(animation.text_index(), 1);
        assert_eq!(animation.revealed_len(), 2);
        assert_eq!(animation.display_text(), "I want do");
        assert_eq!(animation.phase(), Phase::Pausing);
        // Same timer still pending
        assert_eq!(scheduler.scheduled_total(), scheduled);
        assert_eq!(scheduler.pending(), 1);

        animation.patch_texts(vec!["x".to_string()]);
        assert_eq!(animation.text_index(), 0);
        assert_eq!(animation.display_text(), "I want x");

        // Erases the clamped candidate then wraps
        scheduler.advance(ms(25));
        assert_eq!(animation.display_text(), "I want ");
        assert_eq!(animation.phase(), Phase::Typing);
    }

    #[test]
    fn test_patch_with_empty_goes_idle() {
        let (scheduler, animation) = start(cat_dog());
        scheduler.advance(ms(10));

        animation.patch_texts(Vec::new());
        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(animation.display_text(), "I want ");
    }

    #[test]
    fn test_set_base_text_keeps_phase_and_timer() {
        let (scheduler, animation) = start(cat_dog());
        let seen = record(&animation);
        scheduler.advance(ms(20));
        let phase = animation.phase();
        let scheduled = scheduler.scheduled_total();

        animation.set_base_text("We need ");

        assert_eq!(animation.display_text(), "We need ca");
        assert_eq!(animation.phase(), phase);
        assert_eq!(scheduler.scheduled_total(), scheduled);
        assert_eq!(seen.borrow().last().map(String::as_str), Some("We need ca"));
    }

    #[test]
    fn test_config_snapshot() {
        let (_scheduler, animation) = start(cat_dog());
        animation.set_base_text("> ");

        let config = animation.config();
        assert_eq!(config.base_text, "> ");
        assert_eq!(config.typing_speed_ms, 10);
        assert_eq!(config.erasing_speed_ms, 5);
        assert_eq!(config.pause_duration_ms, 20);
        assert_eq!(config.initial_delay_ms, 0);
    }

    #[test]
    fn test_phase_default_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
