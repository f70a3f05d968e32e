//! Evaluation context handed to custom predicates
//!
//! Custom predicates see more than the single value under test: they get a
//! borrowed view of the whole record (for cross-field checks), the name of
//! the field being validated, and the evaluation instant captured once per
//! `validate` call.

use chrono::{DateTime, Utc};

use crate::record::Record;

/// Borrowed context for one rule evaluation.
///
/// The evaluation instant is captured when `validate` is called, not when a
/// predicate was registered, so time-window predicates always judge against
/// the current run.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    record: &'a Record,
    field: &'a str,
    now: DateTime<Utc>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context for one rule evaluation.
    #[must_use]
    pub fn new(record: &'a Record, field: &'a str, now: DateTime<Utc>) -> Self {
        Self { record, field, now }
    }

    /// The whole record under validation.
    #[must_use]
    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// The name of the field currently being checked.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// The evaluation instant for this validation run.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_record_field_and_instant() {
        let record = Record::builder().int("Age", 23).build();
        let now = Utc::now();
        let ctx = ValidationContext::new(&record, "Age", now);

        assert_eq!(ctx.field(), "Age");
        assert_eq!(ctx.now(), now);
        assert!(ctx.record().get("Age").is_some());
    }
}
