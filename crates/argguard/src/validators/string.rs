//! String content checks.

use crate::foundation::access::{is_vacant, string_for};
use crate::foundation::{RuleResult, ValidatorConstructor, Violation};
use serde_json::Value;

/// Rejects vacant values (null, empty, zero, `false`) and whitespace-only
/// strings.
///
/// Any other non-string value cannot be checked.
pub fn check_non_blank(value: &Value) -> RuleResult {
    if is_vacant(value) || string_for(value, "trim")?.trim().is_empty() {
        return Err(Violation::rejected("cannot be blank nor empty"));
    }
    Ok(())
}

/// Rejects strings containing any whitespace character. The empty string
/// passes.
pub fn check_no_whitespaces(value: &Value) -> RuleResult {
    if string_for(value, "contains")?.chars().any(char::is_whitespace) {
        return Err(Violation::rejected("cannot contain whitespaces"));
    }
    Ok(())
}

/// Creates the `non_blank` validator constructor.
///
/// # Examples
///
/// ```
/// use argguard::prelude::*;
/// use serde_json::json;
///
/// let v = non_blank().of(TypeTag::String);
/// assert!(v.validate(&json!("."), "bar").is_ok());
/// assert!(v.validate(&json!(null), "bar").is_err());
/// assert!(v.validate(&json!(""), "bar").is_err());
/// assert!(v.validate(&json!("  "), "bar").is_err());
/// ```
#[must_use]
pub fn non_blank() -> ValidatorConstructor {
    ValidatorConstructor::new(check_non_blank)
}

/// Creates the `no_whitespaces` validator constructor.
///
/// # Examples
///
/// ```
/// use argguard::prelude::*;
/// use serde_json::json;
///
/// let v = no_whitespaces().of(TypeTag::String);
/// assert!(v.validate(&json!("sao_paulo"), "bar").is_ok());
/// assert!(v.validate(&json!(""), "bar").is_ok());
/// assert!(v.validate(&json!("sao paulo"), "bar").is_err());
/// ```
#[must_use]
pub fn no_whitespaces() -> ValidatorConstructor {
    ValidatorConstructor::new(check_no_whitespaces)
}
