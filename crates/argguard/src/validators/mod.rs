//! Built-in validators.
//!
//! Each built-in is a rule function (`check_*`) plus a constructor function
//! returning a [`ValidatorConstructor`]. All of them can be used standalone or
//! nested:
//!
//! ```
//! use argguard::prelude::*;
//!
//! let plain = non_blank().of(TypeTag::String);
//! let chain = no_whitespaces().of(non_blank().of(TypeTag::String));
//! let untyped = non_negative().untyped();
//! # let _ = (plain, chain, untyped);
//! ```
//!
//! # Categories
//!
//! - **Nullable**: [`non_null`]
//! - **Size**: [`non_empty`]
//! - **String**: [`non_blank`], [`no_whitespaces`]
//! - **Numeric**: [`non_negative`]
//! - **Typed**: [`strongly_typed`]

pub mod nullable;
pub mod numeric;
pub mod size;
pub mod string;
pub mod typed;

pub use nullable::{check_non_null, non_null};
pub use numeric::{check_non_negative, non_negative};
pub use size::{check_non_empty, non_empty};
pub use string::{check_no_whitespaces, check_non_blank, no_whitespaces, non_blank};
pub use typed::{check_strongly_typed, strongly_typed};

use crate::foundation::ValidatorConstructor;

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &[
    "non_null",
    "non_empty",
    "non_blank",
    "no_whitespaces",
    "non_negative",
    "strongly_typed",
];

/// Looks up a built-in validator constructor by name.
///
/// This is a plain match over the fixed set of built-ins; there is no
/// registry to add to.
///
/// # Examples
///
/// ```
/// use argguard::validators::builtin;
///
/// assert!(builtin("non_blank").is_some());
/// assert!(builtin("is_even").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<ValidatorConstructor> {
    let constructor = match name {
        "non_null" => non_null(),
        "non_empty" => non_empty(),
        "non_blank" => non_blank(),
        "no_whitespaces" => no_whitespaces(),
        "non_negative" => non_negative(),
        "strongly_typed" => strongly_typed(),
        _ => return None,
    };
    Some(constructor)
}
