//! Replacement checks for testing wrapped functions.

use crate::foundation::{IntoRule, Validator};
use indexmap::IndexMap;

/// A set of replacement checks keyed by parameter name.
///
/// Each replacement is wrapped into a standalone [`Validator`] (no declared
/// type, nothing nested), so it is dispatched exactly like the validator it
/// replaces.
///
/// # Examples
///
/// ```
/// use argguard::prelude::*;
/// use serde_json::Value;
///
/// let mocks = Mocks::new()
///     .replace("s", |_: &Value| -> RuleResult { Ok(()) })
///     .replace("n", |_: &Value, name: &str| -> RuleResult {
///         Err(Violation::rejected(format!("mocked for {name}")))
///     });
/// assert_eq!(mocks.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mocks {
    replacements: IndexMap<String, Validator>,
}

impl Mocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the check for `parameter` with `rule`.
    ///
    /// The name is not checked here; a name that matches no bound parameter
    /// fails with a lookup error when the mocked function is called.
    #[must_use = "builder methods must be chained or built"]
    pub fn replace<Args>(
        mut self,
        parameter: impl Into<String>,
        rule: impl IntoRule<Args>,
    ) -> Self {
        self.replacements
            .insert(parameter.into(), Validator::from_rule(rule));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub(crate) fn into_inner(self) -> IndexMap<String, Validator> {
        self.replacements
    }
}
