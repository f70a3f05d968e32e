//! Records and field values
//!
//! A [`Record`] is a flat set of named, typed fields in declaration order.
//! Values are one of four scalar shapes ([`FieldValue`]); every shape has a
//! zero value that the `required` check treats as absent.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A typed scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-form text.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// A UTC instant.
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Returns `true` if this is the zero value for its type: the empty
    /// string, `0`, `0.0`, or the Unix epoch.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Int(n) => *n == 0,
            Self::Float(x) => *x == 0.0,
            Self::Timestamp(t) => *t == DateTime::UNIX_EPOCH,
        }
    }

    /// The text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The timestamp, if this is a timestamp value.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// A short name for the value's type, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Timestamp(t)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A flat, insertion-ordered set of named fields.
///
/// # Examples
///
/// ```rust,ignore
/// let record = Record::builder()
///     .text("Name", "Teerasil")
///     .int("Age", 23)
///     .float("Weight", 56.23)
///     .build();
///
/// assert_eq!(record.get("Age"), Some(&FieldValue::Int(23)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fluent builder.
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Inserts or replaces a field. Insertion order is preserved; replacing
    /// keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fluent builder for [`Record`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    fields: IndexMap<String, FieldValue>,
}

impl RecordBuilder {
    /// Adds a text field.
    #[must_use = "builder methods must be chained or built"]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Adds an integer field.
    #[must_use = "builder methods must be chained or built"]
    pub fn int(mut self, name: impl Into<String>, value: i64) -> Self {
        self.fields.insert(name.into(), FieldValue::Int(value));
        self
    }

    /// Adds a floating-point field.
    #[must_use = "builder methods must be chained or built"]
    pub fn float(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), FieldValue::Float(value));
        self
    }

    /// Adds a timestamp field.
    #[must_use = "builder methods must be chained or built"]
    pub fn timestamp(mut self, name: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.fields
            .insert(name.into(), FieldValue::Timestamp(value));
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> Record {
        Record {
            fields: self.fields,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
