//! Named predicate registry
//!
//! Custom rules (`Check::Custom`) dispatch by name through a
//! [`PredicateRegistry`]. The registry is populated at setup and then moved
//! into the engine, so it is immutable while validation runs: there is no
//! global state and no lock.

use std::collections::HashMap;
use std::fmt;

use crate::foundation::{FnPredicate, Predicate, ValidationContext};
use crate::record::FieldValue;
use crate::time::{Future, Past, Present};

/// Store of named custom predicates.
///
/// # Examples
///
/// ```rust,ignore
/// let mut registry = PredicateRegistry::with_time_predicates();
/// registry.register_fn("non_negative", |value, _ctx| {
///     matches!(value, FieldValue::Int(n) if *n >= 0)
/// });
/// ```
#[derive(Default)]
pub struct PredicateRegistry {
    entries: HashMap<String, Box<dyn Predicate>>,
}

impl PredicateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the three time-window predicates registered:
    /// `past`, `future`, and `present`.
    #[must_use]
    pub fn with_time_predicates() -> Self {
        let mut registry = Self::new();
        registry.register("past", Past);
        registry.register("future", Future);
        registry.register("present", Present);
        registry
    }

    /// Inserts or overwrites the predicate under `name`.
    pub fn register(&mut self, name: impl Into<String>, predicate: impl Predicate + 'static) {
        self.entries.insert(name.into(), Box::new(predicate));
    }

    /// Inserts or overwrites a closure predicate under `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: for<'a> Fn(&FieldValue, &ValidationContext<'a>) -> bool + Send + Sync + 'static,
    {
        self.register(name, FnPredicate::new(f));
    }

    /// Looks up a predicate by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&dyn Predicate> {
        self.entries.get(name).map(Box::as_ref)
    }

    /// Returns `true` if a predicate is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("PredicateRegistry")
            .field("names", &names)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::Utc;

    #[test]
    fn time_predicates_are_preregistered() {
        let registry = PredicateRegistry::with_time_predicates();
        assert!(registry.contains("past"));
        assert!(registry.contains("future"));
        assert!(registry.contains("present"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_miss_is_none() {
        let registry = PredicateRegistry::new();
        assert!(registry.lookup("present").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn register_overwrites() {
        let mut registry = PredicateRegistry::new();
        registry.register_fn("flag", |_v, _c| true);
        registry.register_fn("flag", |_v, _c| false);
        assert_eq!(registry.len(), 1);

        let record = Record::new();
        let ctx = ValidationContext::new(&record, "x", Utc::now());
        let p = registry.lookup("flag").unwrap();
        assert!(!p.test(&FieldValue::Int(1), &ctx));
    }

    #[test]
    fn debug_lists_names() {
        let registry = PredicateRegistry::with_time_predicates();
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("present"));
    }
}
