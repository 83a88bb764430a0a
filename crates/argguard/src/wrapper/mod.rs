//! The call wrapper: validate bound arguments, then call through.
//!
//! [`ValidatedFn`] pairs a callable with its [`Signature`]. Every call binds
//! the arguments, runs the validator of each annotated parameter and only
//! then invokes the callable with the original, untouched arguments.
//!
//! # Examples
//!
//! ```
//! use argguard::prelude::*;
//! use serde_json::json;
//!
//! let signature = Signature::builder()
//!     .positional("ans", no_whitespaces().of(non_empty().of(TypeTag::String)))
//!     .build()
//!     .unwrap();
//! let foo = validate_parameters(signature, |args: &Arguments| args.get(0).cloned());
//!
//! assert_eq!(foo.call(&arguments!["valid-parameter"]).unwrap(), Some(json!("valid-parameter")));
//! assert!(foo.call(&arguments!["white spaced"]).is_err());
//! assert!(foo.call(&arguments![""]).is_err());
//!
//! // Escape hatches
//! assert!(foo.skip_validations()(&arguments![""]).is_some());
//! let mocked = foo.mock_validations(
//!     Mocks::new().replace("ans", |_: &serde_json::Value| -> RuleResult { Ok(()) }),
//! );
//! assert!(mocked.call(&arguments![""]).is_ok());
//! ```

mod mock;

pub use mock::Mocks;

use crate::foundation::{ValidationError, ValidationResult, Validator};
use crate::signature::{Arguments, Signature};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A callable whose arguments are validated before every call.
///
/// The signature is inspected once, when the wrapper is built. Cloning and
/// mocking share the callable and the signature.
pub struct ValidatedFn<F> {
    function: Arc<F>,
    signature: Arc<Signature>,
    validations: Arc<IndexMap<String, Validator>>,
}

impl<F> ValidatedFn<F> {
    /// Wraps `function`, taking the validators from `signature`'s
    /// annotations.
    pub fn new(signature: Signature, function: F) -> Self {
        let validations = signature
            .validators()
            .map(|(name, validator)| (name.to_owned(), validator.clone()))
            .collect();

        Self {
            function: Arc::new(function),
            signature: Arc::new(signature),
            validations: Arc::new(validations),
        }
    }

    /// The signature the wrapper was built from.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The effective validators, in dispatch order.
    pub fn validations(&self) -> impl Iterator<Item = (&str, &Validator)> + '_ {
        self.validations
            .iter()
            .map(|(name, validator)| (name.as_str(), validator))
    }

    /// Returns the original callable, bypassing validation entirely.
    #[must_use]
    pub fn skip_validations(&self) -> &F {
        tracing::trace!("validation skipped");
        &self.function
    }

    /// Returns a new wrapper in which the parameters named in `mocks` are
    /// checked by the replacement instead of their validator.
    ///
    /// Other parameters keep their validators, and `self` is unchanged.
    /// Replacements for names that are not validated yet are added after
    /// the existing ones.
    #[must_use]
    pub fn mock_validations(&self, mocks: Mocks) -> Self {
        tracing::trace!(mocked = mocks.len(), "validations mocked");

        let mut validations = (*self.validations).clone();
        validations.extend(mocks.into_inner());

        Self {
            function: Arc::clone(&self.function),
            signature: Arc::clone(&self.signature),
            validations: Arc::new(validations),
        }
    }

    /// Validates `args` without calling through.
    ///
    /// Stops at the first failure. A validated parameter that is neither
    /// supplied nor defaulted fails with [`ValidationError::Unbound`].
    pub fn validate(&self, args: &Arguments) -> ValidationResult<()> {
        let bound = self.signature.bind(args);

        for (parameter, validator) in self.validations.iter() {
            let result = match bound.get(parameter) {
                Some(value) => validator.validate(value, parameter),
                None => Err(ValidationError::Unbound {
                    parameter: parameter.clone(),
                }),
            };

            if let Err(err) = result {
                tracing::debug!(
                    parameter = parameter.as_str(),
                    code = err.code(),
                    "call rejected"
                );
                return Err(err);
            }
        }

        Ok(())
    }

    /// Validates `args` and, if every validator accepts, calls the original
    /// callable with them, returning its result unchanged.
    pub fn call<R>(&self, args: &Arguments) -> ValidationResult<R>
    where
        F: Fn(&Arguments) -> R,
    {
        self.validate(args)?;
        Ok((self.function)(args))
    }
}

impl<F> Clone for ValidatedFn<F> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            signature: Arc::clone(&self.signature),
            validations: Arc::clone(&self.validations),
        }
    }
}

impl<F> fmt::Debug for ValidatedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedFn")
            .field("function", &std::any::type_name::<F>())
            .field("signature", &self.signature)
            .field("validations", &self.validations.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Wraps `function` so its arguments are validated against `signature`
/// before every call.
pub fn validate_parameters<F, R>(signature: Signature, function: F) -> ValidatedFn<F>
where
    F: Fn(&Arguments) -> R,
{
    ValidatedFn::new(signature, function)
}
