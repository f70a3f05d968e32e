//! Prelude module for convenient imports.
//!
//! A single `use chartguard_validator::prelude::*;` brings in the engine,
//! the schema and record builders, the registry, and the clock types.

pub use crate::engine::ValidationEngine;
pub use crate::foundation::{
    EngineError, FnPredicate, Predicate, RuleViolation, ValidationContext, ValidationResult,
    predicate_fn,
};
pub use crate::intake::{MOBILE_PATTERN, intake_sheet_schema};
pub use crate::record::{FieldValue, Record, RecordBuilder};
pub use crate::registry::PredicateRegistry;
pub use crate::schema::{Check, Rule, Schema, SchemaBuilder};
pub use crate::time::{Clock, FixedClock, Future, Past, Present, PRESENT_WINDOW, SystemClock};
