//! Validator constructors, validator instances and parameter annotations.
//!
//! A [`ValidatorConstructor`] is made once from a rule. Applying it to a
//! declared type, or to another [`Validator`], yields a [`Validator`]
//! instance that can be attached to a parameter as an [`Annotation`].
//!
//! # Nesting
//!
//! ```
//! use argguard::prelude::*;
//! use serde_json::json;
//!
//! // no_whitespaces(non_empty(str))
//! let chain = no_whitespaces().of(non_empty().of(TypeTag::String));
//!
//! assert!(chain.validate(&json!("ok"), "s").is_ok());
//! // Both rules would reject "", the inner one reports first.
//! let err = chain.validate(&json!(""), "s").unwrap_err();
//! assert_eq!(err.to_string(), "parameter `s <str>` cannot be empty");
//! ```

use crate::foundation::error::ValidationResult;
use crate::foundation::rule::{IntoRule, Rule, RuleContext};
use crate::foundation::types::TypeTag;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// CONSTRUCTOR
// ============================================================================

/// Turns a rule into validators.
///
/// Cloning is cheap; the rule is shared.
#[derive(Clone)]
pub struct ValidatorConstructor {
    rule: Arc<dyn Rule>,
}

impl ValidatorConstructor {
    /// Wraps a rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use argguard::prelude::*;
    /// use serde_json::{Value, json};
    ///
    /// fn within_bounds(value: &Value) -> RuleResult {
    ///     match value.as_i64() {
    ///         Some(n) if (0..=100).contains(&n) => Ok(()),
    ///         _ => Err(Violation::rejected("is out of allowed bounds [0, 100]")),
    ///     }
    /// }
    ///
    /// let bounded = ValidatorConstructor::new(within_bounds).of(TypeTag::Integer);
    /// assert!(bounded.validate(&json!(5), "x").is_ok());
    /// assert!(bounded.validate(&json!(400), "x").is_err());
    /// ```
    pub fn new<Args>(rule: impl IntoRule<Args>) -> Self {
        Self {
            rule: rule.into_rule(),
        }
    }

    /// Builds a validator for `declared`, which is either a plain type or an
    /// inner validator to nest.
    #[must_use]
    pub fn of(&self, declared: impl Into<Declared>) -> Validator {
        match declared.into() {
            Declared::Nothing => Validator::leaf(Arc::clone(&self.rule), None),
            Declared::Type(tag) => Validator::leaf(Arc::clone(&self.rule), Some(tag)),
            Declared::Validator(inner) => Validator {
                rule: Arc::clone(&self.rule),
                declared: inner.declared,
                nested: Some(Arc::new(inner)),
            },
        }
    }

    /// Builds a validator with no declared type.
    #[must_use]
    pub fn untyped(&self) -> Validator {
        self.of(Declared::Nothing)
    }

    /// Name of the underlying rule.
    #[must_use]
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }
}

impl fmt::Debug for ValidatorConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConstructor")
            .field("rule", &self.rule.name())
            .finish()
    }
}

/// What a [`ValidatorConstructor`] is applied to.
#[derive(Debug, Clone, Default)]
pub enum Declared {
    /// No declared type.
    #[default]
    Nothing,
    /// A plain declared type, used for messages and strict checks.
    Type(TypeTag),
    /// Another validator to run first.
    Validator(Validator),
}

impl From<TypeTag> for Declared {
    fn from(tag: TypeTag) -> Self {
        Self::Type(tag)
    }
}

impl From<Option<TypeTag>> for Declared {
    fn from(tag: Option<TypeTag>) -> Self {
        tag.map_or(Self::Nothing, Self::Type)
    }
}

impl From<Validator> for Declared {
    fn from(validator: Validator) -> Self {
        Self::Validator(validator)
    }
}

// ============================================================================
// VALIDATOR INSTANCE
// ============================================================================

/// One applied check, possibly wrapping a chain of inner checks.
///
/// The declared type is always the leaf type of the chain, so every error in
/// the chain reports the same type.
#[derive(Clone)]
pub struct Validator {
    rule: Arc<dyn Rule>,
    declared: Option<TypeTag>,
    nested: Option<Arc<Validator>>,
}

impl Validator {
    pub(crate) fn leaf(rule: Arc<dyn Rule>, declared: Option<TypeTag>) -> Self {
        Self {
            rule,
            declared,
            nested: None,
        }
    }

    /// Builds a standalone validator straight from a rule, with no declared
    /// type and nothing nested.
    pub fn from_rule<Args>(rule: impl IntoRule<Args>) -> Self {
        Self::leaf(rule.into_rule(), None)
    }

    /// The declared (leaf) type.
    #[must_use]
    pub fn declared(&self) -> Option<TypeTag> {
        self.declared
    }

    /// The validator this one runs first, if any.
    #[must_use]
    pub fn nested(&self) -> Option<&Validator> {
        self.nested.as_deref()
    }

    /// Number of rules in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.nested.as_ref().map_or(0, |inner| inner.depth())
    }

    /// Name of the outermost rule.
    #[must_use]
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    /// Validates `value` bound to `parameter`.
    ///
    /// The nested chain runs first, innermost rule first; this validator's
    /// own rule only runs once the whole inner chain has accepted the value.
    pub fn validate(&self, value: &Value, parameter: &str) -> ValidationResult<()> {
        if let Some(inner) = &self.nested {
            inner.validate(value, parameter)?;
        }

        tracing::trace!(parameter, rule = self.rule.name(), "checking rule");
        let ctx = RuleContext::new(parameter, self.declared);
        self.rule
            .check(value, &ctx)
            .map_err(|violation| violation.into_error(parameter, self.declared))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rule", &self.rule.name())
            .field("declared", &self.declared)
            .field("nested", &self.nested)
            .finish()
    }
}

// ============================================================================
// ANNOTATION
// ============================================================================

/// The annotation attached to a declared parameter.
///
/// Only [`Annotation::Validator`] takes part in validation; the other
/// variants pass through untouched.
#[derive(Debug, Clone, Default)]
pub enum Annotation {
    /// The parameter carries no annotation.
    #[default]
    None,
    /// A plain type annotation.
    Type(TypeTag),
    /// A validator to run on the bound value.
    Validator(Validator),
}

impl Annotation {
    /// Returns the validator if this annotation is one.
    #[must_use]
    pub fn as_validator(&self) -> Option<&Validator> {
        match self {
            Self::Validator(validator) => Some(validator),
            Self::None | Self::Type(_) => None,
        }
    }

    #[must_use]
    pub fn is_validator(&self) -> bool {
        matches!(self, Self::Validator(_))
    }

    /// The declared type, whether plain or carried by a validator.
    #[must_use]
    pub fn declared(&self) -> Option<TypeTag> {
        match self {
            Self::None => None,
            Self::Type(tag) => Some(*tag),
            Self::Validator(validator) => validator.declared(),
        }
    }
}

impl From<TypeTag> for Annotation {
    fn from(tag: TypeTag) -> Self {
        Self::Type(tag)
    }
}

impl From<Validator> for Annotation {
    fn from(validator: Validator) -> Self {
        Self::Validator(validator)
    }
}
