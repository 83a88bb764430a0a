//! Prelude module for convenient imports.
//!
//! Provides a single `use argguard::prelude::*;` import that brings in the
//! rule and validator types, every built-in validator, signatures and the
//! call wrapper.
//!
//! # Examples
//!
//! ```
//! use argguard::prelude::*;
//!
//! let signature = Signature::builder()
//!     .positional("name", non_blank().of(TypeTag::String))
//!     .keyword_only("age", non_negative().of(TypeTag::Integer))
//!     .build()
//!     .unwrap();
//! let greet = validate_parameters(signature, |args: &Arguments| args.len());
//! assert_eq!(greet.call(&arguments!["Ada"; age = 36]).unwrap(), 2);
//! ```

// ============================================================================
// FOUNDATION: Rules, validators, errors
// ============================================================================

pub use crate::foundation::{
    Annotation, IntoRule, Rule, RuleContext, RuleResult, TypeTag, ValidationError,
    ValidationResult, Validator, ValidatorConstructor, ValueKind, Violation,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    no_whitespaces, non_blank, non_empty, non_negative, non_null, strongly_typed,
};

// ============================================================================
// SIGNATURES AND WRAPPING
// ============================================================================

pub use crate::config::{ParameterConfig, SignatureConfig};
pub use crate::signature::{
    Arguments, BoundParameters, ParameterKind, Signature, SignatureBuilder, SignatureError,
};
pub use crate::wrapper::{Mocks, ValidatedFn, validate_parameters};

pub use crate::arguments;
