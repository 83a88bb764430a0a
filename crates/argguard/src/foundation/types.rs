//! Declared types and runtime value kinds.
//!
//! A [`TypeTag`] is what a parameter was *declared* as; it is an opaque,
//! displayable identifier used in messages and by strict conformance checks.
//! A [`ValueKind`] is what a value actually *is* at call time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// DECLARED TYPE
// ============================================================================

/// The declared type of a parameter.
///
/// # Examples
///
/// ```
/// use argguard::foundation::TypeTag;
/// use serde_json::json;
///
/// assert!(TypeTag::String.accepts(&json!("hello")));
/// assert!(TypeTag::Integer.accepts(&json!(3)));
/// assert!(!TypeTag::Integer.accepts(&json!(3.5)));
/// assert_eq!(TypeTag::Array.to_string(), "list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Any value, including null.
    Any,
    /// Only the null sentinel.
    Null,
    /// `true` or `false`.
    Bool,
    /// Integral numbers.
    #[serde(alias = "int")]
    Integer,
    /// Any number, integral or floating point.
    #[serde(alias = "float")]
    Number,
    /// Strings.
    #[serde(alias = "str")]
    String,
    /// Ordered sequences.
    #[serde(alias = "list")]
    Array,
    /// Key-value maps.
    #[serde(alias = "map", alias = "dict")]
    Object,
}

impl TypeTag {
    /// Returns the short display name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "int",
            Self::Number => "number",
            Self::String => "str",
            Self::Array => "list",
            Self::Object => "map",
        }
    }

    /// Returns `true` if `value` strictly conforms to this declared type.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Null, Value::Null) => true,
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::Number, Value::Number(_)) => true,
            (Self::String, Value::String(_)) => true,
            (Self::Array, Value::Array(_)) => true,
            (Self::Object, Value::Object(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RUNTIME KIND
// ============================================================================

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classifies a value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "str",
            Self::Array => "list",
            Self::Object => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
