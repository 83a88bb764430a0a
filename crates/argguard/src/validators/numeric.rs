//! Numeric checks.

use crate::foundation::access::number_for;
use crate::foundation::{RuleResult, ValidatorConstructor, Violation};
use serde_json::Value;

/// Rejects numbers below zero. Non-numeric values cannot be compared.
pub fn check_non_negative(value: &Value) -> RuleResult {
    if number_for(value, "<")? < 0.0 {
        return Err(Violation::rejected("cannot be negative"));
    }
    Ok(())
}

/// Creates the `non_negative` validator constructor.
///
/// # Examples
///
/// ```
/// use argguard::prelude::*;
/// use serde_json::json;
///
/// let v = non_negative().of(TypeTag::Number);
/// assert!(v.validate(&json!(0.0), "bar").is_ok());
/// assert!(v.validate(&json!(-0.1), "bar").is_err());
/// ```
#[must_use]
pub fn non_negative() -> ValidatorConstructor {
    ValidatorConstructor::new(check_non_negative)
}
