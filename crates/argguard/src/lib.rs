//! # argguard
//!
//! Annotation-driven validation of function call arguments.
//!
//! A callable is described once by a [`Signature`](signature::Signature):
//! its parameters, their kinds and defaults, and an
//! [`Annotation`](foundation::Annotation) per parameter. Annotations that are
//! validators are run against the bound arguments before every call; when
//! they all accept, the callable runs with its arguments untouched.
//!
//! ## Quick Start
//!
//! ```
//! use argguard::prelude::*;
//! use serde_json::json;
//!
//! // fn foo(s: non_blank(str))
//! let signature = Signature::builder()
//!     .positional("s", non_blank().of(TypeTag::String))
//!     .build()
//!     .unwrap();
//! let foo = validate_parameters(signature, |args: &Arguments| args.get(0).cloned());
//!
//! assert_eq!(foo.call(&arguments!["non blank"]).unwrap(), Some(json!("non blank")));
//!
//! let err = foo.call(&arguments!["   "]).unwrap_err();
//! assert_eq!(err.to_string(), "parameter `s <str>` cannot be blank nor empty");
//! ```
//!
//! ## Writing Validators
//!
//! Any function or closure taking the value (and optionally the parameter
//! name and declared type) becomes a validator through
//! [`ValidatorConstructor::new`](foundation::ValidatorConstructor::new).
//! Validators nest: `a.of(b.of(TypeTag::String))` runs `b` first.
//!
//! ## Built-in Validators
//!
//! - **Nullable**: [`non_null`](validators::non_null)
//! - **Size**: [`non_empty`](validators::non_empty)
//! - **String**: [`non_blank`](validators::non_blank),
//!   [`no_whitespaces`](validators::no_whitespaces)
//! - **Numeric**: [`non_negative`](validators::non_negative)
//! - **Typed**: [`strongly_typed`](validators::strongly_typed)
//!
//! ## Testing Wrapped Functions
//!
//! [`ValidatedFn::skip_validations`](wrapper::ValidatedFn::skip_validations)
//! hands back the original callable and
//! [`ValidatedFn::mock_validations`](wrapper::ValidatedFn::mock_validations)
//! swaps the checks of selected parameters.

// ValidationError carries the parameter name and a boxed cause; boxing it
// again would add an allocation to every rejected call.
#![allow(clippy::result_large_err)]

#[macro_use]
mod macros;

pub mod config;
pub mod foundation;
pub mod prelude;
pub mod signature;
pub mod validators;
pub mod wrapper;
