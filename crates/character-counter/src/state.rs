//! Counter state derived from attribute strings.
//!
//! This module provides `CounterState` and `Warn`, the pure half of the
//! widget: attribute text goes in, derived values come out. Nothing here
//! touches the DOM, so everything is testable on native targets.
//!
//! The state is rebuilt from the host element's attributes on every render.
//! No field caches a previous value, which is what makes re-renders
//! idempotent and instances trivially isolated.

/// Default character budget when the `max` attribute is absent or malformed.
pub const DEFAULT_MAX: i32 = 300;

/// Default used count when the `count` attribute is absent or malformed.
pub const DEFAULT_COUNT: i32 = 0;

/// Near-limit threshold used for bare `warn` and for `is_near_limit`
/// when `warn` is disabled.
pub const DEFAULT_WARN_THRESHOLD: i32 = 20;

/// Warning configuration parsed from the `warn` attribute.
///
/// The attribute has three observable shapes: absent (warnings disabled),
/// present with an empty value (enabled at the default threshold), and
/// present with an integer value (enabled at that threshold). `warn="0"`
/// is a legitimate zero threshold, distinct from an absent attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warn {
    Disabled,
    Enabled(i32),
}

impl Warn {
    /// Parse the `warn` attribute value (`None` means the attribute is absent).
    ///
    /// A present but unparsable value enables warnings at the default
    /// threshold, the same fallback the empty value gets.
    pub fn parse(attribute: Option<&str>) -> Self {
        match attribute {
            None => Warn::Disabled,
            Some(value) => {
                let value = value.trim();
                if value.is_empty() {
                    Warn::Enabled(DEFAULT_WARN_THRESHOLD)
                } else {
                    Warn::Enabled(value.parse().unwrap_or(DEFAULT_WARN_THRESHOLD))
                }
            }
        }
    }

    /// Effective near-limit threshold.
    ///
    /// Disabled still reports the default threshold so `is_near_limit`
    /// keeps working independently of `warn`.
    pub fn threshold(self) -> i32 {
        match self {
            Warn::Disabled => DEFAULT_WARN_THRESHOLD,
            Warn::Enabled(threshold) => threshold,
        }
    }

    /// Whether the warn attribute is present in any form.
    pub fn is_enabled(self) -> bool {
        matches!(self, Warn::Enabled(_))
    }
}

/// Snapshot of the widget's inputs, freshly parsed from attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub max: i32,
    pub count: i32,
    pub warn: Warn,
    pub hide_count: bool,
}

impl CounterState {
    /// Build the state from raw attribute values (`None` = attribute absent).
    ///
    /// `max` and `count` are trimmed, whole-string base-10 parses; anything
    /// else falls back to the defaults. `hide_count` is a presence flag, its
    /// value is ignored.
    pub fn from_attributes(
        max: Option<&str>,
        count: Option<&str>,
        warn: Option<&str>,
        hide_count: Option<&str>,
    ) -> Self {
        CounterState {
            max: parse_integer(max, DEFAULT_MAX),
            count: parse_integer(count, DEFAULT_COUNT),
            warn: Warn::parse(warn),
            hide_count: hide_count.is_some(),
        }
    }

    /// Characters left in the budget. Negative once over the limit.
    pub fn remaining(&self) -> i32 {
        self.max.saturating_sub(self.count)
    }

    /// Ring fill fraction: `count / max` clamped to at most 1.
    ///
    /// A non-positive `max` renders as an exhausted budget (progress 1.0),
    /// so no NaN or infinity can ever reach the DOM. Negative counts are
    /// not clamped; they produce a negative fraction.
    pub fn progress(&self) -> f64 {
        if self.max <= 0 {
            return 1.0;
        }
        (f64::from(self.count) / f64::from(self.max)).min(1.0)
    }

    /// Whether the budget is exceeded (strictly more than `max`).
    pub fn is_over_limit(&self) -> bool {
        self.count > self.max
    }

    /// Whether `remaining` has dropped to the effective warn threshold.
    pub fn is_near_limit(&self) -> bool {
        self.remaining() <= self.warn.threshold()
    }

    /// Whether the numeric label is rendered.
    ///
    /// `hide-count` dominates everything; otherwise the label is always
    /// shown unless `warn` is enabled, in which case it only appears near
    /// the limit.
    pub fn should_show_count(&self) -> bool {
        if self.hide_count {
            return false;
        }
        match self.warn {
            Warn::Disabled => true,
            Warn::Enabled(_) => self.is_near_limit(),
        }
    }

    /// Screen-reader label recomputed on every render.
    pub fn aria_label(&self) -> String {
        let remaining = self.remaining();
        if self.is_over_limit() {
            format!("{} characters over limit", remaining.unsigned_abs())
        } else {
            format!("{remaining} characters remaining")
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        CounterState::from_attributes(None, None, None, None)
    }
}

/// Trimmed whole-string base-10 parse with a fallback default.
fn parse_integer(attribute: Option<&str>, default: i32) -> i32 {
    attribute
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
