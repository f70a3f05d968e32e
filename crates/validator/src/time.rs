//! Clocks and time-window predicates
//!
//! The engine reads the evaluation instant from a [`Clock`] once per
//! `validate` call, so the `past` / `future` / `present` predicates judge
//! against the moment validation runs. Production code uses [`SystemClock`];
//! tests inject a [`FixedClock`] instead of tolerating wall-clock skew.

use chrono::{DateTime, TimeDelta, Utc};

use crate::foundation::{Predicate, ValidationContext};
use crate::record::FieldValue;

// ============================================================================
// CLOCK
// ============================================================================

/// Source of the evaluation instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// TIME-WINDOW PREDICATES
// ============================================================================

/// Half-width of the `present` window.
pub const PRESENT_WINDOW: TimeDelta = TimeDelta::hours(12);

/// Passes timestamps strictly before the evaluation instant.
///
/// Non-timestamp values fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Past;

impl Predicate for Past {
    fn test(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool {
        matches!(value, FieldValue::Timestamp(t) if *t < ctx.now())
    }
}

/// Passes timestamps strictly after the evaluation instant.
///
/// Non-timestamp values fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Future;

impl Predicate for Future {
    fn test(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool {
        matches!(value, FieldValue::Timestamp(t) if *t > ctx.now())
    }
}

/// Passes timestamps inside a symmetric 12-hour window centered on the
/// evaluation instant: `now - 12h < t < now + 12h`, both bounds strict.
///
/// Non-timestamp values fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Present;

impl Predicate for Present {
    fn test(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool {
        let now = ctx.now();
        matches!(
            value,
            FieldValue::Timestamp(t) if *t > now - PRESENT_WINDOW && *t < now + PRESENT_WINDOW
        )
    }
}

/// Creates a [`Past`] predicate.
#[must_use]
pub const fn past() -> Past {
    Past
}

/// Creates a [`Future`] predicate.
#[must_use]
pub const fn future() -> Future {
    Future
}

/// Creates a [`Present`] predicate.
#[must_use]
pub const fn present() -> Present {
    Present
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn ctx_at(record: &Record, now: DateTime<Utc>) -> ValidationContext<'_> {
        ValidationContext::new(record, "Date", now)
    }

    fn ts(value: DateTime<Utc>) -> FieldValue {
        FieldValue::Timestamp(value)
    }

    #[test]
    fn past_is_strict() {
        let record = Record::new();
        let now = Utc::now();
        let ctx = ctx_at(&record, now);

        assert!(past().test(&ts(now - TimeDelta::seconds(1)), &ctx));
        assert!(!past().test(&ts(now), &ctx));
        assert!(!past().test(&ts(now + TimeDelta::seconds(1)), &ctx));
    }

    #[test]
    fn future_is_strict() {
        let record = Record::new();
        let now = Utc::now();
        let ctx = ctx_at(&record, now);

        assert!(future().test(&ts(now + TimeDelta::seconds(1)), &ctx));
        assert!(!future().test(&ts(now), &ctx));
        assert!(!future().test(&ts(now - TimeDelta::seconds(1)), &ctx));
    }

    #[test]
    fn present_window_is_symmetric_and_strict() {
        let record = Record::new();
        let now = Utc::now();
        let ctx = ctx_at(&record, now);

        assert!(present().test(&ts(now), &ctx));
        assert!(present().test(&ts(now - PRESENT_WINDOW + TimeDelta::seconds(1)), &ctx));
        assert!(present().test(&ts(now + PRESENT_WINDOW - TimeDelta::seconds(1)), &ctx));

        assert!(!present().test(&ts(now - PRESENT_WINDOW), &ctx));
        assert!(!present().test(&ts(now + PRESENT_WINDOW), &ctx));
        assert!(!present().test(&ts(now + TimeDelta::days(365 * 40)), &ctx));
    }

    #[test]
    fn non_timestamp_values_fail_all_windows() {
        let record = Record::new();
        let ctx = ctx_at(&record, Utc::now());
        let text = FieldValue::Text("2066-02-01".into());

        assert!(!past().test(&text, &ctx));
        assert!(!future().test(&text, &ctx));
        assert!(!present().test(&text, &ctx));
    }

    #[test]
    fn predicates_judge_against_the_injected_instant() {
        let record = Record::new();
        let fixed = FixedClock(DateTime::UNIX_EPOCH + TimeDelta::days(365));
        let ctx = ctx_at(&record, fixed.now());

        // Epoch is far in the fixed clock's past even though the real wall
        // clock would agree; a 2066 date is far in its future.
        assert!(past().test(&ts(DateTime::UNIX_EPOCH), &ctx));
        assert!(!present().test(&ts(DateTime::UNIX_EPOCH), &ctx));
    }
}
