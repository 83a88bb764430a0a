//! Signatures declared as data.
//!
//! A [`SignatureConfig`] describes the same parameter list as
//! [`SignatureBuilder`](crate::signature::SignatureBuilder), with validators
//! named by their built-in names instead of built in code.
//!
//! # Examples
//!
//! ```
//! use argguard::config::SignatureConfig;
//! use argguard::signature::Arguments;
//! use serde_json::json;
//!
//! let config = SignatureConfig::from_json_str(r#"{
//!     "parameters": [
//!         { "name": "s", "type": "str", "validators": ["no_whitespaces", "non_blank"] },
//!         { "name": "limit", "kind": "keyword_only", "type": "int",
//!           "validators": ["non_negative"], "default": 10 }
//!     ]
//! }"#).unwrap();
//!
//! let signature = config.into_signature().unwrap();
//! let (_, chain) = signature.validators().next().unwrap();
//! assert_eq!(chain.depth(), 2);
//! assert!(chain.validate(&json!("two words"), "s").is_err());
//! assert_eq!(signature.bind(&Arguments::new()).get("limit"), Some(&json!(10)));
//! ```

use crate::foundation::{Annotation, Declared, TypeTag};
use crate::signature::{ParameterKind, Signature, SignatureError};
use crate::validators::builtin;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A parameter list as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SignatureConfig {
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

/// One parameter as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ParameterConfig {
    pub name: String,

    #[serde(default)]
    pub kind: ParameterKind,

    /// Declared type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<TypeTag>,

    /// Built-in validator names, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<String>,

    /// Default value. An explicit `null` is a null default, not a missing one.
    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

fn explicit<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ParameterConfig {
    /// Resolves the validator names into an annotation.
    ///
    /// With no validators the annotation is the plain declared type, if any.
    pub fn annotation(&self) -> Result<Annotation, SignatureError> {
        let mut declared = Declared::from(self.declared);

        for name in self.validators.iter().rev() {
            let constructor = builtin(name).ok_or_else(|| SignatureError::UnknownValidator {
                parameter: self.name.clone(),
                validator: name.clone(),
            })?;
            declared = Declared::Validator(constructor.of(declared));
        }

        Ok(match declared {
            Declared::Nothing => Annotation::None,
            Declared::Type(tag) => Annotation::Type(tag),
            Declared::Validator(validator) => Annotation::Validator(validator),
        })
    }
}

impl SignatureConfig {
    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SignatureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, SignatureError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builds the signature this configuration describes.
    pub fn into_signature(self) -> Result<Signature, SignatureError> {
        Signature::from_config(self)
    }
}

impl Signature {
    /// Builds a signature from a [`SignatureConfig`].
    pub fn from_config(config: SignatureConfig) -> Result<Self, SignatureError> {
        let mut builder = Self::builder();
        for parameter in config.parameters {
            let annotation = parameter.annotation()?;
            builder = builder.parameter(
                parameter.name,
                parameter.kind,
                annotation,
                parameter.default,
            );
        }
        builder.build()
    }
}

impl TryFrom<SignatureConfig> for Signature {
    type Error = SignatureError;

    fn try_from(config: SignatureConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}
