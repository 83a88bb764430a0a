//! Call arguments and the per-call bound parameter set.

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

/// The arguments of one call: positional values in order plus keyword
/// values by name.
///
/// # Examples
///
/// ```
/// use argguard::signature::Arguments;
/// use serde_json::json;
///
/// let args = Arguments::new()
///     .arg("_")
///     .arg(0)
///     .kwarg("c", json!({"k": 1}))
///     .kwarg("d", json!([]));
///
/// assert_eq!(args.positional().len(), 2);
/// assert_eq!(args.keyword_value("c"), Some(&json!({"k": 1})));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: SmallVec<[Value; 4]>,
    keyword: IndexMap<String, Value>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates arguments from positional values only.
    pub fn positional_only<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: IndexMap::new(),
        }
    }

    /// Appends a positional value.
    #[must_use = "builder methods must be chained or built"]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Sets a keyword value, replacing any earlier value for `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.keyword.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    #[must_use]
    pub fn keyword(&self) -> &IndexMap<String, Value> {
        &self.keyword
    }

    /// Positional value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Keyword value for `name`.
    #[must_use]
    pub fn keyword_value(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Total number of supplied values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

/// The effective value of every bound parameter for one call.
///
/// Borrows from the call's [`Arguments`] and the signature's defaults, so
/// binding never copies values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundParameters<'a> {
    values: IndexMap<&'a str, &'a Value>,
}

impl<'a> BoundParameters<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn bind(&mut self, name: &'a str, value: &'a Value) {
        self.values.insert(name, value);
    }

    pub(crate) fn bind_default(&mut self, name: &'a str, value: &'a Value) {
        self.values.entry(name).or_insert(value);
    }

    /// Effective value of `name` for this call.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }
}
