//! Declarative rule schemas
//!
//! A [`Schema`] maps field names to ordered rule lists; each [`Rule`] pairs a
//! [`Check`] with the literal message reported when it fails. Schemas are
//! plain data: they derive serde, so rule sets can live in configuration
//! files and load through `serde_json`.
//!
//! # Examples
//!
//! ```rust,ignore
//! let schema = Schema::builder()
//!     .rule("Name", Check::Required, "Name should not be blank")
//!     .rule("Age", Check::int_range(0, 100), "Age should not be negative integer")
//!     .build();
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// CHECK
// ============================================================================

/// The predicate form of a rule.
///
/// Builtins are evaluated by the engine directly; [`Custom`](Check::Custom)
/// dispatches by name through the
/// [`PredicateRegistry`](crate::registry::PredicateRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// Fails on the zero value for the field's type, or a missing field.
    Required,
    /// Fails when the value is not an integer inside `[lo, hi]` (inclusive).
    IntRange {
        /// Lower bound, inclusive.
        lo: i64,
        /// Upper bound, inclusive.
        hi: i64,
    },
    /// Fails when the value is not a number inside `[lo, hi]` (inclusive).
    FloatRange {
        /// Lower bound, inclusive.
        lo: f64,
        /// Upper bound, inclusive.
        hi: f64,
    },
    /// Fails when the value is not a syntactically well-formed URL.
    Url,
    /// Fails when the value does not fully match the pattern.
    ///
    /// Full-match semantics: the pattern is implicitly anchored at both ends
    /// when the engine compiles it.
    Matches {
        /// The regular expression source.
        pattern: String,
    },
    /// Dispatches to the named predicate in the registry.
    Custom {
        /// The registered predicate name.
        name: String,
    },
}

impl Check {
    /// An inclusive integer range check.
    #[must_use]
    pub fn int_range(lo: i64, hi: i64) -> Self {
        Self::IntRange { lo, hi }
    }

    /// An inclusive floating-point range check.
    #[must_use]
    pub fn float_range(lo: f64, hi: f64) -> Self {
        Self::FloatRange { lo, hi }
    }

    /// A full-match regex check.
    #[must_use]
    pub fn matches(pattern: impl Into<String>) -> Self {
        Self::Matches {
            pattern: pattern.into(),
        }
    }

    /// A custom check dispatched by registry name.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom { name: name.into() }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A check plus the user-facing message reported verbatim on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The predicate form.
    pub check: Check,
    /// The literal failure message.
    pub message: Cow<'static, str>,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub fn new(check: Check, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered per-field rule lists.
///
/// Field order is declaration order; validation walks fields in that order
/// and rules in the order they were attached, stopping at the first failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, Vec<Rule>>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fluent builder.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Appends a rule to a field, creating the field entry on first use.
    pub fn push_rule(&mut self, field: impl Into<String>, rule: Rule) {
        self.fields.entry(field.into()).or_default().push(rule);
    }

    /// Iterates fields and their rule lists in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// The rules attached to a field.
    #[must_use]
    pub fn rules(&self, field: &str) -> Option<&[Rule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Number of fields with at least one rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field has rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fluent builder for [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Appends a rule to a field. Repeated calls for the same field keep the
    /// field's original position and extend its rule list in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(
        mut self,
        field: impl Into<String>,
        check: Check,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.schema.push_rule(field, Rule::new(check, message));
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        self.schema
    }
}

// ============================================================================
// TESTS
// ============================================================================
