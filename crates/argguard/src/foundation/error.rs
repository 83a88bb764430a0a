//! Error types for argument validation.
//!
//! Rules report a [`Violation`], which knows nothing about the parameter it
//! was checking. The validator that ran the rule attaches the parameter name
//! and declared type, producing a [`ValidationError`]. Message text is built
//! only in `Display`.

use crate::foundation::types::{TypeTag, ValueKind};
use std::borrow::Cow;

/// Boxed cause carried by [`Violation::Inapplicable`] and
/// [`ValidationError::Inapplicable`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// CAUSES
// ============================================================================

/// A rule tried an operation the value does not support.
///
/// # Examples
///
/// ```
/// use argguard::foundation::{UnsupportedOperation, ValueKind};
///
/// let err = UnsupportedOperation::new("trim", ValueKind::Number);
/// assert_eq!(err.to_string(), "`trim` is not supported for number values");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{operation}` is not supported for {kind} values")]
pub struct UnsupportedOperation {
    /// The operation the rule attempted, e.g. `len` or `trim`.
    pub operation: &'static str,
    /// The kind of value it was attempted on.
    pub kind: ValueKind,
}

impl UnsupportedOperation {
    #[must_use]
    pub const fn new(operation: &'static str, kind: ValueKind) -> Self {
        Self { operation, kind }
    }
}

/// A rule needs a declared type but the validator was built without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no declared type to compare against")]
pub struct MissingDeclaredType;

// ============================================================================
// VIOLATION
// ============================================================================

/// What a rule reports when it does not accept a value.
#[derive(Debug)]
pub enum Violation {
    /// The value genuinely violates the rule.
    Rejected(Cow<'static, str>),
    /// The rule could not be evaluated against the value.
    Inapplicable(BoxError),
    /// The value's runtime kind does not conform to the declared type.
    TypeMismatch {
        expected: TypeTag,
        actual: ValueKind,
    },
}

impl Violation {
    /// Creates a rejection with a reason phrased to follow the parameter,
    /// e.g. `"cannot be empty"`.
    pub fn rejected(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Creates an inapplicable violation wrapping `cause`.
    pub fn inapplicable(cause: impl Into<BoxError>) -> Self {
        Self::Inapplicable(cause.into())
    }

    /// Attaches the parameter the violation was found on.
    pub fn into_error(self, parameter: &str, declared: Option<TypeTag>) -> ValidationError {
        match self {
            Self::Rejected(reason) => ValidationError::Rejected {
                parameter: parameter.to_owned(),
                declared,
                reason,
            },
            Self::Inapplicable(source) => ValidationError::Inapplicable {
                parameter: parameter.to_owned(),
                declared,
                source,
            },
            Self::TypeMismatch { expected, actual } => ValidationError::TypeMismatch {
                parameter: parameter.to_owned(),
                expected,
                actual,
            },
        }
    }
}

impl From<UnsupportedOperation> for Violation {
    fn from(err: UnsupportedOperation) -> Self {
        Self::Inapplicable(Box::new(err))
    }
}

impl From<MissingDeclaredType> for Violation {
    fn from(err: MissingDeclaredType) -> Self {
        Self::Inapplicable(Box::new(err))
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A failed argument validation, as surfaced to the caller of a wrapped
/// function.
///
/// The variants are distinct kinds: a rejection means the value is wrong,
/// `Inapplicable` means the rule could not even run against it,
/// `TypeMismatch` comes from strict type checks and `Unbound` is a lookup
/// failure for a validated name that has no value in the call.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The value violates the parameter's rule.
    #[error("parameter `{}` {reason}", label(.parameter, .declared))]
    Rejected {
        parameter: String,
        declared: Option<TypeTag>,
        reason: Cow<'static, str>,
    },

    /// The rule could not be evaluated against the value.
    #[error("unable to validate parameter `{}`: {source}", label(.parameter, .declared))]
    Inapplicable {
        parameter: String,
        declared: Option<TypeTag>,
        #[source]
        source: BoxError,
    },

    /// The value's runtime kind does not conform to the declared type.
    #[error("parameter `{parameter}` must be {expected}, got {actual}")]
    TypeMismatch {
        parameter: String,
        expected: TypeTag,
        actual: ValueKind,
    },

    /// A validated parameter has no value for this call.
    #[error("no value bound for parameter `{parameter}`")]
    Unbound { parameter: String },
}

#[allow(clippy::ref_option)]
fn label(parameter: &str, declared: &Option<TypeTag>) -> String {
    match declared {
        Some(tag) => format!("{parameter} <{tag}>"),
        None => parameter.to_owned(),
    }
}

impl ValidationError {
    /// Name of the parameter the error is about.
    #[must_use]
    pub fn parameter(&self) -> &str {
        match self {
            Self::Rejected { parameter, .. }
            | Self::Inapplicable { parameter, .. }
            | Self::TypeMismatch { parameter, .. }
            | Self::Unbound { parameter } => parameter,
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejection",
            Self::Inapplicable { .. } => "internal",
            Self::TypeMismatch { .. } => "type",
            Self::Unbound { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "VALIDATION_REJECTED",
            Self::Inapplicable { .. } => "VALIDATION_INAPPLICABLE",
            Self::TypeMismatch { .. } => "VALIDATION_TYPE_MISMATCH",
            Self::Unbound { .. } => "VALIDATION_UNBOUND",
        }
    }

    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Inapplicable { .. })
    }

    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Unbound { .. })
    }

    /// Whether the call might succeed if retried with the same arguments.
    ///
    /// Validation is deterministic, so this is always `false`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a single rule check.
pub type RuleResult = Result<(), Violation>;

/// Result of validating (and possibly calling) with [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn display_messages() {
        let err = Violation::rejected("cannot be empty").into_error("name", Some(TypeTag::String));
        assert_eq!(err.to_string(), "parameter `name <str>` cannot be empty");

        let err = Violation::rejected("cannot be negative").into_error("n", None);
        assert_eq!(err.to_string(), "parameter `n` cannot be negative");

        let err = Violation::from(UnsupportedOperation::new("len", ValueKind::Number))
            .into_error("items", None);
        assert_eq!(
            err.to_string(),
            "unable to validate parameter `items`: `len` is not supported for number values"
        );

        let err = Violation::TypeMismatch {
            expected: TypeTag::String,
            actual: ValueKind::Number,
        }
        .into_error("f", Some(TypeTag::String));
        assert_eq!(err.to_string(), "parameter `f` must be str, got number");

        let err = ValidationError::Unbound {
            parameter: "missing".into(),
        };
        assert_eq!(err.to_string(), "no value bound for parameter `missing`");
    }

    #[test]
    fn inapplicable_chains_its_cause() {
        let err = Violation::from(UnsupportedOperation::new("trim", ValueKind::Bool))
            .into_error("s", Some(TypeTag::String));
        let source = err.source().expect("inapplicable carries a source");
        let cause = source
            .downcast_ref::<UnsupportedOperation>()
            .expect("source is the original cause");
        assert_eq!(cause.kind, ValueKind::Bool);
    }

    #[test]
    fn kinds_are_distinguishable() {
        let rejected = Violation::rejected("x").into_error("a", None);
        let internal = Violation::from(MissingDeclaredType).into_error("a", None);
        let mismatch = Violation::TypeMismatch {
            expected: TypeTag::Bool,
            actual: ValueKind::Null,
        }
        .into_error("a", None);
        let unbound = ValidationError::Unbound {
            parameter: "a".into(),
        };

        assert!(rejected.is_rejection() && !rejected.is_internal());
        assert!(internal.is_internal() && !internal.is_rejection());
        assert!(mismatch.is_type_mismatch());
        assert!(unbound.is_lookup());

        let codes = [
            rejected.code(),
            internal.code(),
            mismatch.code(),
            unbound.code(),
        ];
        assert_eq!(
            codes,
            [
                "VALIDATION_REJECTED",
                "VALIDATION_INAPPLICABLE",
                "VALIDATION_TYPE_MISMATCH",
                "VALIDATION_UNBOUND"
            ]
        );
        assert_eq!(internal.category(), "internal");
        assert!(!rejected.is_retryable());
        assert_eq!(unbound.parameter(), "a");
    }
}
