//! Typed access to dynamic values for use inside rules.
//!
//! Each accessor names the operation it stands for, so a rule that uses `?`
//! on them reports an inapplicable violation instead of a rejection when the
//! value does not support the operation.

use crate::foundation::error::UnsupportedOperation;
use crate::foundation::types::ValueKind;
use serde_json::Value;

/// Borrows the value as a string for `operation`.
pub fn string_for<'a>(
    value: &'a Value,
    operation: &'static str,
) -> Result<&'a str, UnsupportedOperation> {
    value
        .as_str()
        .ok_or_else(|| UnsupportedOperation::new(operation, ValueKind::of(value)))
}

/// Size of a sized value: characters of a string, elements of a list,
/// entries of a map.
pub fn size_of(value: &Value) -> Result<usize, UnsupportedOperation> {
    match value {
        Value::String(s) => Ok(s.chars().count()),
        Value::Array(items) => Ok(items.len()),
        Value::Object(entries) => Ok(entries.len()),
        other => Err(UnsupportedOperation::new("len", ValueKind::of(other))),
    }
}

/// Returns `true` for values that hold nothing: null, `false`, zero, and
/// empty strings, lists and maps.
pub fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

/// Reads a numeric value for comparison.
pub fn number_for(value: &Value, operation: &'static str) -> Result<f64, UnsupportedOperation> {
    value
        .as_f64()
        .ok_or_else(|| UnsupportedOperation::new(operation, ValueKind::of(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("héllo"), 5)]
    #[case(json!([1, 2]), 2)]
    #[case(json!({}), 0)]
    fn test_size_of(#[case] value: Value, #[case] expected: usize) {
        assert_eq!(size_of(&value).unwrap(), expected);
    }

    #[test]
    fn test_size_of_unsized() {
        let err = size_of(&json!(3)).unwrap_err();
        assert_eq!(err, UnsupportedOperation::new("len", ValueKind::Number));
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(false), true)]
    #[case(json!(0), true)]
    #[case(json!(0.0), true)]
    #[case(json!(""), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    #[case(json!(true), false)]
    #[case(json!(-1), false)]
    #[case(json!(" "), false)]
    #[case(json!([null]), false)]
    fn test_is_vacant(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_vacant(&value), expected);
    }

    #[test]
    fn test_string_for() {
        assert_eq!(string_for(&json!("a"), "trim").unwrap(), "a");
        let err = string_for(&json!(null), "trim").unwrap_err();
        assert_eq!(err.kind, ValueKind::Null);
        assert_eq!(err.operation, "trim");
    }

    #[test]
    fn test_number_for() {
        assert_eq!(number_for(&json!(-2), "<").unwrap(), -2.0);
        assert!(number_for(&json!("2"), "<").is_err());
    }
}
