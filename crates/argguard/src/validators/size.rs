//! Size checks for strings, lists and maps.

use crate::foundation::access::size_of;
use crate::foundation::{RuleResult, ValidatorConstructor, Violation};
use serde_json::Value;

/// Rejects values of size zero. Values without a size (null, numbers,
/// booleans) cannot be checked.
pub fn check_non_empty(value: &Value) -> RuleResult {
    if size_of(value)? == 0 {
        return Err(Violation::rejected("cannot be empty"));
    }
    Ok(())
}

/// Creates the `non_empty` validator constructor.
///
/// # Examples
///
/// ```
/// use argguard::prelude::*;
/// use serde_json::json;
///
/// let v = non_empty().of(TypeTag::String);
/// assert!(v.validate(&json!("."), "bar").is_ok());
/// assert!(v.validate(&json!([null, null]), "bar").is_ok());
/// assert!(v.validate(&json!(""), "bar").is_err());
/// assert!(v.validate(&json!({}), "bar").is_err());
/// ```
#[must_use]
pub fn non_empty() -> ValidatorConstructor {
    ValidatorConstructor::new(check_non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::TypeTag;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("a"))]
    #[case(json!([null]))]
    #[case(json!({"k": 1}))]
    fn test_non_empty_accepts(#[case] value: Value) {
        assert!(non_empty().untyped().validate(&value, "c").is_ok());
    }

    #[rstest]
    #[case(json!(""))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn test_non_empty_rejects(#[case] value: Value) {
        let err = non_empty().of(TypeTag::Object).validate(&value, "c").unwrap_err();
        assert!(err.is_rejection());
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(12))]
    #[case(json!(true))]
    fn test_non_empty_unmeasurable(#[case] value: Value) {
        let err = non_empty().untyped().validate(&value, "c").unwrap_err();
        assert!(err.is_internal());
    }
}
