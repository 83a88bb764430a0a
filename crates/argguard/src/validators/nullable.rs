//! Null checks.
//!
//! # Examples
//!
//! ```
//! use argguard::prelude::*;
//! use serde_json::json;
//!
//! let v = non_null().of(TypeTag::String);
//! assert!(v.validate(&json!(""), "bar").is_ok());
//! assert!(v.validate(&json!(false), "bar").is_ok());
//! assert!(v.validate(&json!(null), "bar").is_err());
//! ```

use crate::foundation::{RuleResult, ValidatorConstructor, Violation};
use serde_json::Value;

/// Rejects the null sentinel. Every other value, falsy or not, passes.
pub fn check_non_null(value: &Value) -> RuleResult {
    if value.is_null() {
        Err(Violation::rejected("cannot be null"))
    } else {
        Ok(())
    }
}

/// Creates the `non_null` validator constructor.
#[must_use]
pub fn non_null() -> ValidatorConstructor {
    ValidatorConstructor::new(check_non_null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(""))]
    #[case(json!(0))]
    #[case(json!(false))]
    #[case(json!([]))]
    fn test_non_null_accepts(#[case] value: Value) {
        assert!(non_null().untyped().validate(&value, "x").is_ok());
    }

    #[test]
    fn test_non_null_rejects_null() {
        let err = non_null().untyped().validate(&json!(null), "x").unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "parameter `x` cannot be null");
    }
}
