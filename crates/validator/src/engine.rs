//! The validation engine
//!
//! [`ValidationEngine`] compiles a [`Schema`] once (patterns are anchored and
//! compiled up front) and then validates records against it: fields in
//! schema-declaration order, rules in attachment order, stopping at the
//! first failure across the whole record.

use std::borrow::Cow;

use regex::Regex;
use tracing::{debug, trace};

use crate::checks;
use crate::foundation::{EngineError, RuleViolation, ValidationContext};
use crate::record::{FieldValue, Record};
use crate::registry::PredicateRegistry;
use crate::schema::{Check, Schema};
use crate::time::{Clock, SystemClock};

// ============================================================================
// COMPILED RULES
// ============================================================================

/// A check with its pattern compiled, ready to evaluate.
#[derive(Debug)]
enum Matcher {
    Required,
    IntRange { lo: i64, hi: i64 },
    FloatRange { lo: f64, hi: f64 },
    Url,
    Matches(Regex),
    Custom(String),
}

impl Matcher {
    fn compile(check: &Check, field: &str) -> Result<Self, EngineError> {
        Ok(match check {
            Check::Required => Self::Required,
            Check::IntRange { lo, hi } => Self::IntRange { lo: *lo, hi: *hi },
            Check::FloatRange { lo, hi } => Self::FloatRange { lo: *lo, hi: *hi },
            Check::Url => Self::Url,
            Check::Matches { pattern } => Self::Matches(
                checks::compile_full_match(pattern).map_err(|source| EngineError::Pattern {
                    field: field.to_owned(),
                    source,
                })?,
            ),
            Check::Custom { name } => Self::Custom(name.clone()),
        })
    }

    fn code(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::IntRange { .. } => "int_range",
            Self::FloatRange { .. } => "float_range",
            Self::Url => "url",
            Self::Matches(_) => "matches",
            Self::Custom(name) => name,
        }
    }
}

#[derive(Debug)]
struct CompiledRule {
    matcher: Matcher,
    message: Cow<'static, str>,
}

impl CompiledRule {
    fn violation(&self, field: &str, value: Option<&FieldValue>) -> RuleViolation {
        let mut violation = RuleViolation::new(
            self.matcher.code().to_owned(),
            self.message.clone(),
        )
        .with_field(field.to_owned());

        match &self.matcher {
            Matcher::IntRange { lo, hi } => {
                violation = violation
                    .with_param("lo", lo.to_string())
                    .with_param("hi", hi.to_string());
            }
            Matcher::FloatRange { lo, hi } => {
                violation = violation
                    .with_param("lo", lo.to_string())
                    .with_param("hi", hi.to_string());
            }
            Matcher::Matches(re) => {
                violation = violation.with_param("pattern", re.as_str().to_owned());
            }
            _ => {}
        }

        if let Some(value) = value {
            violation = violation.with_param("actual", value.to_string());
        }
        violation
    }
}

// ============================================================================
// VALIDATION ENGINE
// ============================================================================

/// Validates records against a compiled schema.
///
/// Construction compiles every `matches` pattern and takes ownership of the
/// registry, freezing the rule set for the engine's lifetime.
///
/// # Examples
///
/// ```rust,ignore
/// let schema = Schema::builder()
///     .rule("Name", Check::Required, "Name should not be blank")
///     .build();
/// let engine = ValidationEngine::new(schema, PredicateRegistry::with_time_predicates())?;
///
/// let record = Record::builder().text("Name", "").build();
/// let err = engine.validate(&record).unwrap_err();
/// assert_eq!(err.to_string(), "Name should not be blank");
/// ```
pub struct ValidationEngine {
    rules: Vec<(String, Vec<CompiledRule>)>,
    registry: PredicateRegistry,
    clock: Box<dyn Clock>,
}

impl ValidationEngine {
    /// Builds an engine over the system clock.
    ///
    /// Fails with [`EngineError::Pattern`] if a `matches` rule carries a
    /// pattern that does not compile.
    pub fn new(schema: Schema, registry: PredicateRegistry) -> Result<Self, EngineError> {
        Self::with_clock(schema, registry, SystemClock)
    }

    /// Builds an engine over an explicit clock. Tests pass a
    /// [`FixedClock`](crate::time::FixedClock) here.
    pub fn with_clock(
        schema: Schema,
        registry: PredicateRegistry,
        clock: impl Clock + 'static,
    ) -> Result<Self, EngineError> {
        let mut rules = Vec::with_capacity(schema.len());
        for (field, field_rules) in schema.iter() {
            let mut compiled = Vec::with_capacity(field_rules.len());
            for rule in field_rules {
                compiled.push(CompiledRule {
                    matcher: Matcher::compile(&rule.check, field)?,
                    message: rule.message.clone(),
                });
            }
            rules.push((field.to_owned(), compiled));
        }
        Ok(Self {
            rules,
            registry,
            clock: Box::new(clock),
        })
    }

    /// The registry this engine dispatches custom checks through.
    #[must_use]
    pub fn registry(&self) -> &PredicateRegistry {
        &self.registry
    }

    /// Validates a record.
    ///
    /// Walks fields in schema-declaration order and rules in attachment
    /// order; the first failing rule short-circuits the whole run and its
    /// message is reported verbatim. Returns
    /// [`EngineError::UnknownPredicate`] if a `custom` rule names a
    /// predicate nobody registered.
    pub fn validate(&self, record: &Record) -> Result<(), EngineError> {
        let now = self.clock.now();
        for (field, rules) in &self.rules {
            let value = record.get(field);
            let ctx = ValidationContext::new(record, field, now);
            for rule in rules {
                let passed = self.evaluate(rule, value, &ctx)?;
                if passed {
                    trace!(field = %field, code = rule.matcher.code(), "rule passed");
                } else {
                    debug!(field = %field, code = rule.matcher.code(), "rule failed");
                    return Err(EngineError::Violation(rule.violation(field, value)));
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if the record passes every rule.
    #[must_use]
    pub fn is_valid(&self, record: &Record) -> bool {
        self.validate(record).is_ok()
    }

    fn evaluate(
        &self,
        rule: &CompiledRule,
        value: Option<&FieldValue>,
        ctx: &ValidationContext<'_>,
    ) -> Result<bool, EngineError> {
        if let Matcher::Custom(name) = &rule.matcher {
            let predicate =
                self.registry
                    .lookup(name)
                    .ok_or_else(|| EngineError::UnknownPredicate {
                        name: name.clone(),
                    })?;
            // A missing field has no value to hand the predicate; it fails
            // the rule the same way a zero value fails `required`.
            return Ok(value.is_some_and(|v| predicate.test(v, ctx)));
        }

        let Some(value) = value else {
            return Ok(false);
        };
        Ok(match &rule.matcher {
            Matcher::Required => checks::is_present(value),
            Matcher::IntRange { lo, hi } => checks::int_in_range(value, *lo, *hi),
            Matcher::FloatRange { lo, hi } => checks::float_in_range(value, *lo, *hi),
            Matcher::Url => value.as_text().is_some_and(checks::is_url),
            Matcher::Matches(re) => value.as_text().is_some_and(|s| re.is_match(s)),
            Matcher::Custom(_) => unreachable!("custom checks are handled above"),
        })
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("fields", &self.rules.len())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
