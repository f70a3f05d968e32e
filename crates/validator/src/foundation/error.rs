//! Error types for validation failures
//!
//! A failed rule produces a [`RuleViolation`]: the rule's user-facing message
//! plus structured metadata (code, field, parameters). Engine-level faults
//! (unregistered predicate, bad pattern) live in [`EngineError`].
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// RULE VIOLATION
// ============================================================================

/// The first failing rule of a validation run.
///
/// `Display` prints the rule's message verbatim, so callers that surface
/// validation feedback to users can rely on the exact text configured on the
/// rule. The code, field, and parameters are available through accessors for
/// programmatic handling.
///
/// # Examples
///
/// ```rust,ignore
/// let violation = RuleViolation::new("required", "Name should not be blank")
///     .with_field("Name");
///
/// assert_eq!(violation.to_string(), "Name should not be blank");
/// assert_eq!(violation.field(), "Name");
/// ```
#[derive(Debug, Clone)]
pub struct RuleViolation {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    field: Cow<'static, str>,
    /// Ordered key-value pairs, typically 0-3 entries.
    params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl RuleViolation {
    /// Creates a new violation with a code and message.
    ///
    /// Static strings do not allocate; dynamic strings allocate only when
    /// needed.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: Cow::Borrowed(""),
            params: SmallVec::new(),
        }
    }

    /// Sets the field name this violation belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = field.into();
        self
    }

    /// Adds a parameter describing the failure (bounds, pattern, actual value).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// The code of the check that failed (e.g. `"required"`, `"int_range"`,
    /// or a custom predicate name).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The rule's user-facing message, exactly as configured.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// All parameters in insertion order.
    #[must_use]
    pub fn params(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
        &self.params
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RuleViolation {}

// ============================================================================
// ENGINE ERROR
// ============================================================================

/// Everything `validate` (or engine construction) can fail with.
///
/// A [`Violation`](EngineError::Violation) is a routine outcome; callers
/// branch on it. The other variants are setup mistakes: a schema naming a
/// predicate nobody registered, or a `matches` rule carrying a pattern that
/// does not compile.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The first failing rule. Displays as the rule's message verbatim.
    #[error("{0}")]
    Violation(RuleViolation),

    /// A `custom` check referenced a name absent from the registry.
    #[error("no predicate registered under '{name}'")]
    UnknownPredicate {
        /// The missing predicate name.
        name: String,
    },

    /// A `matches` rule carried a pattern that failed to compile.
    #[error("invalid pattern for field '{field}'")]
    Pattern {
        /// The field whose rule carried the pattern.
        field: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl EngineError {
    /// The violation, if this is a rule failure.
    #[must_use]
    pub fn as_violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::Violation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<RuleViolation> for EngineError {
    fn from(violation: RuleViolation) -> Self {
        Self::Violation(violation)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message_verbatim() {
        let violation =
            RuleViolation::new("required", "Name should not be blank").with_field("Name");
        assert_eq!(violation.to_string(), "Name should not be blank");
    }

    #[test]
    fn accessors() {
        let violation = RuleViolation::new("int_range", "Age should not be negative integer")
            .with_field("Age")
            .with_param("lo", "0")
            .with_param("hi", "100");

        assert_eq!(violation.code(), "int_range");
        assert_eq!(violation.field(), "Age");
        assert_eq!(violation.param("lo"), Some("0"));
        assert_eq!(violation.param("hi"), Some("100"));
        assert_eq!(violation.param("missing"), None);
        assert_eq!(violation.params().len(), 2);
    }

    #[test]
    fn zero_alloc_static_strings() {
        let violation = RuleViolation::new("required", "This field is required");
        assert!(matches!(violation.code, Cow::Borrowed(_)));
        assert!(matches!(violation.message, Cow::Borrowed(_)));
    }

    #[test]
    fn engine_error_wraps_violation() {
        let err: EngineError = RuleViolation::new("url", "Url should be match").into();
        assert_eq!(err.to_string(), "Url should be match");
        assert!(err.as_violation().is_some());
    }

    #[test]
    fn unknown_predicate_display() {
        let err = EngineError::UnknownPredicate {
            name: "present".into(),
        };
        assert_eq!(err.to_string(), "no predicate registered under 'present'");
        assert!(err.as_violation().is_none());
    }
}
