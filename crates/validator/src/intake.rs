//! Ready-made intake-sheet schema
//!
//! The rule set for a clinical intake sheet: identity, vitals, contact
//! details, and a visit date expected to sit near the time of entry.

use crate::schema::{Check, Schema};

/// Mobile numbers: leading zero, then a 6/8/9 carrier digit, then eight more
/// digits.
pub const MOBILE_PATTERN: &str = r"^0[689]\d{8}$";

/// Builds the intake-sheet rule set.
///
/// Field order matters: validation reports the first failure in this order.
/// The `Date` rule dispatches to the `present` predicate, so the engine's
/// registry must include the time predicates
/// ([`PredicateRegistry::with_time_predicates`](crate::registry::PredicateRegistry::with_time_predicates)).
#[must_use]
pub fn intake_sheet_schema() -> Schema {
    Schema::builder()
        .rule("Name", Check::Required, "Name should not be blank")
        .rule(
            "Age",
            Check::int_range(0, 100),
            "Age should not be negative integer",
        )
        .rule(
            "Weight",
            Check::float_range(0.0, 100.0),
            "Weight should not be negative float",
        )
        .rule("Url", Check::Required, "Url should not be blank")
        .rule("Url", Check::Url, "Url should be match")
        .rule("Mobile", Check::Required, "Mobile should not be blank")
        .rule(
            "Mobile",
            Check::matches(MOBILE_PATTERN),
            "Mobile should be match",
        )
        .rule("Date", Check::custom("present"), "Date should not be future")
        .build()
}
