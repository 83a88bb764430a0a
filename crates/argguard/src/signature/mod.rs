//! Signature descriptors and argument binding.
//!
//! A [`Signature`] describes the parameters of a callable once: their names,
//! whether they are positional or keyword-only, their defaults and their
//! annotations. At call time [`Signature::bind`] resolves the effective value
//! of every parameter from the call's [`Arguments`].
//!
//! # Examples
//!
//! ```
//! use argguard::prelude::*;
//! use serde_json::json;
//!
//! // def f(a: non_blank(str), b, *, c: non_empty(dict), d=None)
//! let signature = Signature::builder()
//!     .positional("a", non_blank().of(TypeTag::String))
//!     .positional("b", Annotation::None)
//!     .keyword_only("c", non_empty().of(TypeTag::Object))
//!     .keyword_only_with_default("d", Annotation::None, json!(null))
//!     .build()
//!     .unwrap();
//!
//! let args = Arguments::new().arg("_").arg(0).kwarg("c", json!({"k": 1}));
//! let bound = signature.bind(&args);
//! assert_eq!(bound.get("b"), Some(&json!(0)));
//! assert_eq!(bound.get("d"), Some(&json!(null)));
//! ```

mod arguments;

pub use arguments::{Arguments, BoundParameters};

use crate::foundation::{Annotation, Validator};
use serde_json::Value;

// ============================================================================
// ERRORS
// ============================================================================

/// Error building a [`Signature`].
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// A parameter name is empty.
    #[error("parameter names cannot be empty")]
    EmptyName,

    /// Two parameters share a name.
    #[error("duplicate parameter `{name}`")]
    DuplicateParameter { name: String },

    /// A positional parameter without a default follows one with a default.
    #[error("positional parameter `{name}` without a default follows a parameter with a default")]
    NonDefaultAfterDefault { name: String },

    /// A configured validator name is not a built-in.
    #[error("unknown validator `{validator}` on parameter `{parameter}`")]
    UnknownValidator { parameter: String, validator: String },

    /// A signature configuration could not be parsed.
    #[error("invalid signature configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

// ============================================================================
// PARAMETER
// ============================================================================

/// How a parameter may be supplied.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// By position or by name.
    #[default]
    Positional,
    /// By name only.
    KeywordOnly,
}

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    annotation: Annotation,
    default: Option<Value>,
}

impl Parameter {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    #[must_use]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

// ============================================================================
// SIGNATURE
// ============================================================================

/// An immutable description of a callable's parameters.
#[derive(Debug, Clone)]
pub struct Signature {
    parameters: Vec<Parameter>,
    positional: Vec<usize>,
    keyword_only: Vec<usize>,
    defaults: Vec<usize>,
}

impl Signature {
    /// Starts building a signature.
    #[must_use]
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// All parameters in declaration order, positional ones first.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of positional parameters in order.
    pub fn positional_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.positional.iter().map(|&i| self.parameters[i].name())
    }

    /// Names of keyword-only parameters in order.
    pub fn keyword_only_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.keyword_only.iter().map(|&i| self.parameters[i].name())
    }

    /// Parameters with a default, paired with it. Positional defaults come
    /// first, then keyword-only defaults.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.defaults.iter().filter_map(|&i| {
            let parameter = &self.parameters[i];
            parameter.default_value().map(|value| (parameter.name(), value))
        })
    }

    /// Parameters annotated with a validator, in declaration order.
    pub fn validators(&self) -> impl Iterator<Item = (&str, &Validator)> + '_ {
        self.parameters.iter().filter_map(|p| {
            p.annotation()
                .as_validator()
                .map(|validator| (p.name(), validator))
        })
    }

    /// Resolves the effective value of every parameter for one call.
    ///
    /// Starts from the keyword arguments, overlays positional arguments by
    /// position, then fills in declared defaults for anything still unbound.
    /// Surplus positional arguments are ignored; parameters with neither an
    /// argument nor a default are simply absent.
    pub fn bind<'a>(&'a self, args: &'a Arguments) -> BoundParameters<'a> {
        let mut bound = BoundParameters::with_capacity(self.parameters.len());

        for (name, value) in args.keyword() {
            bound.bind(name, value);
        }
        for (name, value) in self.positional_names().zip(args.positional()) {
            bound.bind(name, value);
        }
        for (name, value) in self.defaults() {
            bound.bind_default(name, value);
        }

        bound
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Signature`].
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    parameters: Vec<Parameter>,
}

impl SignatureBuilder {
    /// Adds a positional parameter without a default.
    #[must_use = "builder methods must be chained or built"]
    pub fn positional(self, name: impl Into<String>, annotation: impl Into<Annotation>) -> Self {
        self.push(name, ParameterKind::Positional, annotation, None)
    }

    /// Adds a positional parameter with a default value.
    #[must_use = "builder methods must be chained or built"]
    pub fn positional_with_default(
        self,
        name: impl Into<String>,
        annotation: impl Into<Annotation>,
        default: impl Into<Value>,
    ) -> Self {
        self.push(
            name,
            ParameterKind::Positional,
            annotation,
            Some(default.into()),
        )
    }

    /// Adds a keyword-only parameter without a default.
    #[must_use = "builder methods must be chained or built"]
    pub fn keyword_only(self, name: impl Into<String>, annotation: impl Into<Annotation>) -> Self {
        self.push(name, ParameterKind::KeywordOnly, annotation, None)
    }

    /// Adds a keyword-only parameter with a default value.
    #[must_use = "builder methods must be chained or built"]
    pub fn keyword_only_with_default(
        self,
        name: impl Into<String>,
        annotation: impl Into<Annotation>,
        default: impl Into<Value>,
    ) -> Self {
        self.push(
            name,
            ParameterKind::KeywordOnly,
            annotation,
            Some(default.into()),
        )
    }

    /// Adds a fully described parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        kind: ParameterKind,
        annotation: Annotation,
        default: Option<Value>,
    ) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            kind,
            annotation,
            default,
        });
        self
    }

    fn push(
        self,
        name: impl Into<String>,
        kind: ParameterKind,
        annotation: impl Into<Annotation>,
        default: Option<Value>,
    ) -> Self {
        self.parameter(name, kind, annotation.into(), default)
    }

    /// Checks the parameter list and builds the signature.
    ///
    /// Positional parameters are ordered before keyword-only ones; relative
    /// order within each kind is kept.
    pub fn build(self) -> Result<Signature, SignatureError> {
        let (mut parameters, keyword_only): (Vec<_>, Vec<_>) = self
            .parameters
            .into_iter()
            .partition(|p| p.kind == ParameterKind::Positional);
        let positional_count = parameters.len();
        parameters.extend(keyword_only);

        let mut seen_default = false;
        for (index, parameter) in parameters.iter().enumerate() {
            if parameter.name.is_empty() {
                return Err(SignatureError::EmptyName);
            }
            if parameters[..index].iter().any(|p| p.name == parameter.name) {
                return Err(SignatureError::DuplicateParameter {
                    name: parameter.name.clone(),
                });
            }
            if parameter.kind == ParameterKind::Positional {
                if parameter.default.is_some() {
                    seen_default = true;
                } else if seen_default {
                    return Err(SignatureError::NonDefaultAfterDefault {
                        name: parameter.name.clone(),
                    });
                }
            }
        }

        let signature = Signature {
            positional: (0..positional_count).collect(),
            keyword_only: (positional_count..parameters.len()).collect(),
            defaults: parameters
                .iter()
                .enumerate()
                .filter(|(_, p)| p.default.is_some())
                .map(|(i, _)| i)
                .collect(),
            parameters,
        };

        tracing::debug!(
            positional = signature.positional.len(),
            keyword_only = signature.keyword_only.len(),
            validated = signature.validators().count(),
            "signature built"
        );

        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::TypeTag;
    use crate::validators::{non_blank, non_empty};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Signature {
        Signature::builder()
            .positional("a", non_blank().of(TypeTag::String))
            .positional("b", Annotation::None)
            .keyword_only("c", non_empty().of(TypeTag::Object))
            .keyword_only("d", Annotation::None)
            .build()
            .unwrap()
    }

    #[test]
    fn names_are_split_by_kind() {
        let signature = sample();
        assert_eq!(signature.positional_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(signature.keyword_only_names().collect::<Vec<_>>(), vec!["c", "d"]);
        assert_eq!(
            signature.validators().map(|(n, _)| n).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn keyword_only_declared_first_is_reordered() {
        let signature = Signature::builder()
            .keyword_only("k", Annotation::None)
            .positional("p", Annotation::None)
            .build()
            .unwrap();
        assert_eq!(signature.parameters()[0].name(), "p");
        assert_eq!(signature.parameters()[1].kind(), ParameterKind::KeywordOnly);
    }

    #[test]
    fn bind_positional_and_keyword() {
        let signature = sample();
        let args = Arguments::new()
            .arg("_")
            .arg(0)
            .kwarg("c", json!({"k": 1}))
            .kwarg("d", json!([]));
        let bound = signature.bind(&args);

        assert_eq!(bound.len(), 4);
        assert_eq!(bound.get("a"), Some(&json!("_")));
        assert_eq!(bound.get("b"), Some(&json!(0)));
        assert_eq!(bound.get("c"), Some(&json!({"k": 1})));
        assert_eq!(bound.get("d"), Some(&json!([])));
    }

    #[test]
    fn bind_positional_parameter_by_keyword() {
        let signature = sample();
        let args = Arguments::new().kwarg("b", 1).kwarg("a", "x");
        let bound = signature.bind(&args);
        assert_eq!(bound.get("a"), Some(&json!("x")));
        assert_eq!(bound.get("b"), Some(&json!(1)));
        assert!(!bound.contains("c"));
    }

    #[test]
    fn bind_fills_defaults_only_when_unbound() {
        let signature = Signature::builder()
            .positional("a", Annotation::None)
            .positional_with_default("b", Annotation::None, "b-default")
            .keyword_only_with_default("k", Annotation::None, 10)
            .build()
            .unwrap();

        let args = Arguments::new().arg(1);
        let defaults = signature.bind(&args);
        assert_eq!(defaults.get("b"), Some(&json!("b-default")));
        assert_eq!(defaults.get("k"), Some(&json!(10)));

        let args = Arguments::new().arg(1).arg("given").kwarg("k", 0);
        let explicit = signature.bind(&args);
        assert_eq!(explicit.get("b"), Some(&json!("given")));
        assert_eq!(explicit.get("k"), Some(&json!(0)));

        let args = Arguments::new().arg(1).kwarg("b", "by-name");
        let by_name = signature.bind(&args);
        assert_eq!(by_name.get("b"), Some(&json!("by-name")));
    }

    #[test]
    fn bind_ignores_surplus_positionals() {
        let signature = Signature::builder()
            .positional("only", Annotation::None)
            .build()
            .unwrap();
        let args = Arguments::positional_only([1, 2, 3]);
        let bound = signature.bind(&args);
        assert_eq!(bound.len(), 1);
        assert_eq!(bound.get("only"), Some(&json!(1)));
    }

    #[test]
    fn defaults_are_listed_in_order() {
        let signature = Signature::builder()
            .keyword_only_with_default("k", Annotation::None, 1)
            .positional_with_default("p", Annotation::None, 2)
            .build()
            .unwrap();
        let names: Vec<_> = signature.defaults().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["p", "k"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Signature::builder()
            .positional("a", Annotation::None)
            .keyword_only("a", Annotation::None)
            .build()
            .unwrap_err();
        assert!(matches!(err, SignatureError::DuplicateParameter { name } if name == "a"));
    }

    #[test]
    fn non_default_after_default_is_rejected() {
        let err = Signature::builder()
            .positional_with_default("a", Annotation::None, 1)
            .positional("b", Annotation::None)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "positional parameter `b` without a default follows a parameter with a default"
        );
    }

    #[test]
    fn keyword_only_without_default_may_follow_defaults() {
        let signature = Signature::builder()
            .positional_with_default("a", Annotation::None, 1)
            .keyword_only("b", Annotation::None)
            .build();
        assert!(signature.is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Signature::builder()
            .positional("", Annotation::None)
            .build()
            .unwrap_err();
        assert!(matches!(err, SignatureError::EmptyName));
    }
}
