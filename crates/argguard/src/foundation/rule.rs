//! Validation rules: the check logic behind every validator.
//!
//! A rule is a pure function of the value, the parameter name and the
//! declared type. Most rules only look at the value, so plain functions and
//! closures of four shapes are accepted through [`IntoRule`]:
//!
//! | signature | marker |
//! |---|---|
//! | `Fn(&Value) -> RuleResult` | [`ValueOnly`] |
//! | `Fn(&Value, &str) -> RuleResult` | [`WithName`] |
//! | `Fn(&Value, Option<TypeTag>) -> RuleResult` | [`WithType`] |
//! | `Fn(&Value, &str, Option<TypeTag>) -> RuleResult` | [`WithNameAndType`] |
//!
//! Types implementing [`Rule`] directly are accepted as well.

use crate::foundation::error::RuleResult;
use crate::foundation::types::TypeTag;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// What a rule may know about the parameter it is checking.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    parameter: &'a str,
    declared: Option<TypeTag>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub const fn new(parameter: &'a str, declared: Option<TypeTag>) -> Self {
        Self {
            parameter,
            declared,
        }
    }

    /// Name of the parameter being validated.
    #[must_use]
    pub const fn parameter(&self) -> &'a str {
        self.parameter
    }

    /// Declared type of the parameter, if the validator was given one.
    #[must_use]
    pub const fn declared(&self) -> Option<TypeTag> {
        self.declared
    }
}

/// The check logic of a validator.
///
/// # Examples
///
/// ```
/// use argguard::foundation::{Rule, RuleContext, RuleResult, Violation};
/// use serde_json::Value;
///
/// struct Even;
///
/// impl Rule for Even {
///     fn check(&self, value: &Value, _ctx: &RuleContext<'_>) -> RuleResult {
///         match value.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(()),
///             _ => Err(Violation::rejected("must be even")),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Checks `value`, returning a [`Violation`](crate::foundation::Violation)
    /// when it is not accepted.
    fn check(&self, value: &Value, ctx: &RuleContext<'_>) -> RuleResult;

    /// Returns the name of this rule.
    ///
    /// Used for tracing.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn check(&self, value: &Value, ctx: &RuleContext<'_>) -> RuleResult {
        (**self).check(value, ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Marker for rules taking only the value.
#[derive(Debug)]
pub enum ValueOnly {}

/// Marker for rules taking the value and the parameter name.
#[derive(Debug)]
pub enum WithName {}

/// Marker for rules taking the value and the declared type.
#[derive(Debug)]
pub enum WithType {}

/// Marker for rules taking the value, parameter name and declared type.
#[derive(Debug)]
pub enum WithNameAndType {}

/// Marker for types implementing [`Rule`] themselves.
#[derive(Debug)]
pub enum Custom {}

/// Conversion into a shareable rule.
///
/// `Args` is a marker that only exists to keep the per-arity
/// implementations apart; callers never name it.
pub trait IntoRule<Args> {
    fn into_rule(self) -> Arc<dyn Rule>;
}

/// A function or closure adapted to [`Rule`].
pub struct FnRule<F, Args> {
    f: F,
    _args: PhantomData<fn() -> Args>,
}

impl<F, Args> FnRule<F, Args> {
    const fn new(f: F) -> Self {
        Self {
            f,
            _args: PhantomData,
        }
    }
}

impl<F> Rule for FnRule<F, ValueOnly>
where
    F: Fn(&Value) -> RuleResult + Send + Sync,
{
    fn check(&self, value: &Value, _ctx: &RuleContext<'_>) -> RuleResult {
        (self.f)(value)
    }

    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }
}

impl<F> Rule for FnRule<F, WithName>
where
    F: Fn(&Value, &str) -> RuleResult + Send + Sync,
{
    fn check(&self, value: &Value, ctx: &RuleContext<'_>) -> RuleResult {
        (self.f)(value, ctx.parameter())
    }

    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }
}

impl<F> Rule for FnRule<F, WithType>
where
    F: Fn(&Value, Option<TypeTag>) -> RuleResult + Send + Sync,
{
    fn check(&self, value: &Value, ctx: &RuleContext<'_>) -> RuleResult {
        (self.f)(value, ctx.declared())
    }

    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }
}

impl<F> Rule for FnRule<F, WithNameAndType>
where
    F: Fn(&Value, &str, Option<TypeTag>) -> RuleResult + Send + Sync,
{
    fn check(&self, value: &Value, ctx: &RuleContext<'_>) -> RuleResult {
        (self.f)(value, ctx.parameter(), ctx.declared())
    }

    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }
}

impl<F> IntoRule<ValueOnly> for F
where
    F: Fn(&Value) -> RuleResult + Send + Sync + 'static,
{
    fn into_rule(self) -> Arc<dyn Rule> {
        Arc::new(FnRule::<F, ValueOnly>::new(self))
    }
}

impl<F> IntoRule<WithName> for F
where
    F: Fn(&Value, &str) -> RuleResult + Send + Sync + 'static,
{
    fn into_rule(self) -> Arc<dyn Rule> {
        Arc::new(FnRule::<F, WithName>::new(self))
    }
}

impl<F> IntoRule<WithType> for F
where
    F: Fn(&Value, Option<TypeTag>) -> RuleResult + Send + Sync + 'static,
{
    fn into_rule(self) -> Arc<dyn Rule> {
        Arc::new(FnRule::<F, WithType>::new(self))
    }
}

impl<F> IntoRule<WithNameAndType> for F
where
    F: Fn(&Value, &str, Option<TypeTag>) -> RuleResult + Send + Sync + 'static,
{
    fn into_rule(self) -> Arc<dyn Rule> {
        Arc::new(FnRule::<F, WithNameAndType>::new(self))
    }
}

impl<R> IntoRule<Custom> for R
where
    R: Rule + 'static,
{
    fn into_rule(self) -> Arc<dyn Rule> {
        Arc::new(self)
    }
}
