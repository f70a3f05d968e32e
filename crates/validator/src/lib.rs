//! # chartguard-validator
//!
//! A declarative record validation engine: flat records of named, typed
//! fields checked against per-field ordered rule lists, reporting the first
//! failing rule's message verbatim.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chartguard_validator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .rule("Name", Check::Required, "Name should not be blank")
//!     .rule("Age", Check::int_range(0, 100), "Age should not be negative integer")
//!     .build();
//!
//! let engine = ValidationEngine::new(schema, PredicateRegistry::with_time_predicates())?;
//!
//! let record = Record::builder().text("Name", "Teerasil").int("Age", 23).build();
//! assert!(engine.is_valid(&record));
//! ```
//!
//! ## Built-in Checks
//!
//! - [`Required`](schema::Check::Required): rejects the zero value for the
//!   field's type (empty string, `0`, `0.0`, the epoch) and missing fields
//! - [`IntRange`](schema::Check::IntRange) / [`FloatRange`](schema::Check::FloatRange)
//!   for inclusive numeric bounds
//! - [`Url`](schema::Check::Url): URL shape, scheme optional
//! - [`Matches`](schema::Check::Matches): full-match regex
//! - [`Custom`](schema::Check::Custom): dispatches by name through a
//!   [`PredicateRegistry`](registry::PredicateRegistry); `past`, `future`,
//!   and `present` time-window predicates ship in [`time`]
//!
//! Schemas are plain data (serde), so rule sets can live in configuration
//! files. Clocks are injectable, so time-window rules are deterministic
//! under test.

// RuleViolation is the fundamental error payload for every validation call;
// boxing it would add indirection to every call.
#![allow(clippy::result_large_err)]

mod checks;

pub mod engine;
pub mod foundation;
pub mod intake;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod schema;
pub mod time;

pub use engine::ValidationEngine;
pub use foundation::{EngineError, Predicate, RuleViolation, ValidationContext};
pub use record::{FieldValue, Record};
pub use registry::PredicateRegistry;
pub use schema::{Check, Rule, Schema};
