//! Property tests over the counter algebra.
//!
//! Attribute parsing and the derived values are pure, so the documented
//! laws can be checked wholesale on native targets.

#![cfg(not(target_arch = "wasm32"))]

use character_counter::{CounterState, Warn};
use proptest::prelude::*;

fn counter(max: i32, count: i32, warn: Option<&str>, hide: bool) -> CounterState {
    CounterState::from_attributes(
        Some(&max.to_string()),
        Some(&count.to_string()),
        warn,
        hide.then_some(""),
    )
}

fn warn_attribute() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        (-100i32..=100).prop_map(|threshold| Some(threshold.to_string())),
    ]
}

proptest! {
    #[test]
    fn remaining_is_max_minus_count(max in -1000i32..=1000, count in -1000i32..=1000) {
        prop_assert_eq!(counter(max, count, None, false).remaining(), max - count);
    }

    #[test]
    fn progress_never_exceeds_one(max in -1000i32..=1000, count in -1000i32..=1000) {
        prop_assert!(counter(max, count, None, false).progress() <= 1.0);
    }

    #[test]
    fn progress_is_clamped_ratio_for_positive_max(max in 1i32..=1000, count in 0i32..=2000) {
        let expected = (f64::from(count) / f64::from(max)).min(1.0);
        prop_assert_eq!(counter(max, count, None, false).progress(), expected);
    }

    #[test]
    fn non_positive_max_renders_exhausted(max in -1000i32..=0, count in -1000i32..=1000) {
        prop_assert_eq!(counter(max, count, None, false).progress(), 1.0);
    }

    #[test]
    fn over_limit_iff_count_exceeds_max(max in -1000i32..=1000, count in -1000i32..=1000) {
        prop_assert_eq!(counter(max, count, None, false).is_over_limit(), count > max);
    }

    #[test]
    fn hide_count_dominates(
        max in -1000i32..=1000,
        count in -1000i32..=1000,
        warn in warn_attribute(),
    ) {
        prop_assert!(!counter(max, count, warn.as_deref(), true).should_show_count());
    }

    #[test]
    fn absent_warn_always_shows(max in -1000i32..=1000, count in -1000i32..=1000) {
        prop_assert!(counter(max, count, None, false).should_show_count());
    }

    #[test]
    fn enabled_warn_shows_iff_remaining_reaches_threshold(
        max in -1000i32..=1000,
        count in -1000i32..=1000,
        threshold in -100i32..=100,
    ) {
        let threshold_attribute = threshold.to_string();
        let state = counter(max, count, Some(&threshold_attribute), false);
        prop_assert_eq!(state.warn, Warn::Enabled(threshold));
        prop_assert_eq!(state.should_show_count(), state.remaining() <= threshold);
    }

    #[test]
    fn bare_warn_uses_default_threshold(max in -1000i32..=1000, count in -1000i32..=1000) {
        let state = counter(max, count, Some(""), false);
        prop_assert_eq!(state.should_show_count(), state.remaining() <= 20);
    }

    #[test]
    fn aria_label_tracks_over_state(max in -1000i32..=1000, count in -1000i32..=1000) {
        let state = counter(max, count, None, false);
        if state.is_over_limit() {
            prop_assert!(state.aria_label().ends_with("characters over limit"));
        } else {
            prop_assert!(state.aria_label().ends_with("characters remaining"));
        }
    }
}
