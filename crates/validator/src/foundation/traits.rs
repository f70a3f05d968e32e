//! Core trait for custom predicates
//!
//! A predicate is a boolean check over one field value, with access to the
//! surrounding [`ValidationContext`]. Predicates are registered under a name
//! in a [`PredicateRegistry`](crate::registry::PredicateRegistry) and
//! dispatched by `custom` rules.

use crate::foundation::ValidationContext;
use crate::record::FieldValue;

// ============================================================================
// PREDICATE TRAIT
// ============================================================================

/// A named check dispatched through the registry.
///
/// Implementations must be `Send + Sync`: a built engine owns its registry
/// and may be shared across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use chartguard_validator::foundation::{Predicate, ValidationContext};
/// use chartguard_validator::record::FieldValue;
///
/// struct NonEmptyText;
///
/// impl Predicate for NonEmptyText {
///     fn test(&self, value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
///         matches!(value, FieldValue::Text(s) if !s.is_empty())
///     }
/// }
/// ```
pub trait Predicate: Send + Sync {
    /// Returns `true` if the value satisfies the predicate.
    fn test(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool;
}

// ============================================================================
// CLOSURE ADAPTER
// ============================================================================

/// Adapter turning a closure into a [`Predicate`].
///
/// A blanket `impl Predicate for F where F: Fn(..)` would collide with the
/// concrete predicate types under coherence rules, so closures go through
/// this wrapper instead (see
/// [`PredicateRegistry::register_fn`](crate::registry::PredicateRegistry::register_fn)).
pub struct FnPredicate<F>(F);

impl<F> FnPredicate<F>
where
    F: for<'a> Fn(&FieldValue, &ValidationContext<'a>) -> bool + Send + Sync,
{
    /// Wraps a closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: for<'a> Fn(&FieldValue, &ValidationContext<'a>) -> bool + Send + Sync,
{
    fn test(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool {
        (self.0)(value, ctx)
    }
}

/// Creates a predicate from a closure.
pub fn predicate_fn<F>(f: F) -> FnPredicate<F>
where
    F: for<'a> Fn(&FieldValue, &ValidationContext<'a>) -> bool + Send + Sync,
{
    FnPredicate::new(f)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::Utc;

    struct AlwaysTrue;

    impl Predicate for AlwaysTrue {
        fn test(&self, _value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
            true
        }
    }

    #[test]
    fn struct_predicate() {
        let record = Record::new();
        let ctx = ValidationContext::new(&record, "x", Utc::now());
        assert!(AlwaysTrue.test(&FieldValue::Int(1), &ctx));
    }

    #[test]
    fn closure_predicate() {
        let record = Record::new();
        let ctx = ValidationContext::new(&record, "x", Utc::now());

        let p = predicate_fn(|value, _ctx| matches!(value, FieldValue::Int(n) if *n > 0));
        assert!(p.test(&FieldValue::Int(1), &ctx));
        assert!(!p.test(&FieldValue::Int(-1), &ctx));
        assert!(!p.test(&FieldValue::Text("1".into()), &ctx));
    }

    #[test]
    fn closure_predicate_sees_context_field() {
        let record = Record::builder().text("Name", "x").build();
        let ctx = ValidationContext::new(&record, "Name", Utc::now());

        let p = predicate_fn(|_value, ctx| ctx.field() == "Name");
        assert!(p.test(&FieldValue::Text("x".into()), &ctx));
    }
}
