//! Strict type conformance.

use crate::foundation::{
    MissingDeclaredType, RuleResult, TypeTag, ValidatorConstructor, ValueKind, Violation,
};
use serde_json::Value;

/// Requires the runtime kind of the value to conform to the declared type.
///
/// Without a declared type there is nothing to compare against, which is a
/// misuse rather than a rejection.
pub fn check_strongly_typed(value: &Value, declared: Option<TypeTag>) -> RuleResult {
    let expected = declared.ok_or(MissingDeclaredType)?;
    if expected.accepts(value) {
        Ok(())
    } else {
        Err(Violation::TypeMismatch {
            expected,
            actual: ValueKind::of(value),
        })
    }
}

/// Creates the `strongly_typed` validator constructor.
///
/// # Examples
///
/// ```
/// use argguard::prelude::*;
/// use serde_json::json;
///
/// let v = strongly_typed().of(TypeTag::String);
/// assert!(v.validate(&json!(""), "f").is_ok());
/// assert!(v.validate(&json!(7), "f").unwrap_err().is_type_mismatch());
///
/// let misused = strongly_typed().untyped();
/// assert!(misused.validate(&json!(""), "a").unwrap_err().is_internal());
/// ```
#[must_use]
pub fn strongly_typed() -> ValidatorConstructor {
    ValidatorConstructor::new(check_strongly_typed)
}
