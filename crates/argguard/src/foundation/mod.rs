//! Core validation types and traits
//!
//! This module contains the building blocks every other part of the crate
//! rests on:
//!
//! - **Types**: `TypeTag` (declared type), `ValueKind` (runtime kind)
//! - **Rules**: `Rule`, `IntoRule`, `RuleContext`
//! - **Validators**: `ValidatorConstructor`, `Validator`, `Annotation`
//! - **Errors**: `Violation`, `ValidationError`
//!
//! # Architecture
//!
//! ## 1. Rules are plain checks
//!
//! A rule looks at one value and either accepts it or reports a
//! [`Violation`]. It never formats messages about the parameter:
//!
//! ```rust,ignore
//! fn non_negative(value: &Value) -> RuleResult {
//!     if access::number_for(value, "<")? < 0.0 {
//!         return Err(Violation::rejected("cannot be negative"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## 2. Validators compose by nesting
//!
//! ```rust,ignore
//! let chain = no_whitespaces().of(non_empty().of(TypeTag::String));
//! ```
//!
//! The innermost rule runs first and the chain stops at the first failure.
//!
//! ## 3. Annotations are a sum type
//!
//! Parameters carry an [`Annotation`]; only the `Validator` variant is
//! dispatched to at call time.

// Module declarations
pub mod access;
pub mod error;
pub mod rule;
pub mod types;
pub mod validator;

// Re-export everything at the foundation level for convenience
pub use error::{
    BoxError, MissingDeclaredType, RuleResult, UnsupportedOperation, ValidationError,
    ValidationResult, Violation,
};
pub use rule::{IntoRule, Rule, RuleContext};
pub use types::{TypeTag, ValueKind};
pub use validator::{Annotation, Declared, Validator, ValidatorConstructor};

/// Validates a value with a standalone validator under `parameter`.
///
/// # Examples
///
/// ```
/// use argguard::foundation::validate_value;
/// use argguard::validators::non_null;
/// use serde_json::json;
///
/// assert!(validate_value(&json!(1), "x", &non_null().untyped()).is_ok());
/// assert!(validate_value(&json!(null), "x", &non_null().untyped()).is_err());
/// ```
pub fn validate_value(
    value: &serde_json::Value,
    parameter: &str,
    validator: &Validator,
) -> ValidationResult<()> {
    validator.validate(value, parameter)
}
