//! Core validation types and traits
//!
//! The fundamental building blocks of the engine:
//!
//! - **Errors**: [`RuleViolation`], [`EngineError`]
//! - **Context**: [`ValidationContext`], handed to custom predicates
//! - **Traits**: [`Predicate`] and the [`FnPredicate`] closure adapter

pub mod context;
pub mod error;
pub mod traits;

pub use context::ValidationContext;
pub use error::{EngineError, RuleViolation};
pub use traits::{FnPredicate, Predicate, predicate_fn};

/// A validation outcome: `Ok(())` or the first failure.
pub type ValidationResult = Result<(), EngineError>;
