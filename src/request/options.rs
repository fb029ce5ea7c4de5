//! Caller-supplied request options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single option value: a scalar or a list of scalars.
///
/// Lists are rendered comma-joined, which is how the Stats API expects
/// id lists such as `leagueIds=103,104`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Blank values are treated as absent when resolving path parameters.
    pub fn is_blank(&self) -> bool {
        match self {
            OptionValue::Text(s) => s.trim().is_empty(),
            OptionValue::List(items) => items.iter().all(OptionValue::is_blank),
            _ => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Float(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Int(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Int(n.into())
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        OptionValue::Int(n.into())
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Float(n)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Options for one call, keyed by case-sensitive parameter name.
///
/// Values are immutable: `with` and `with_default` consume the options and
/// return a new set, so one set can never be shared and mutated across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerOptions(BTreeMap<String, OptionValue>);

impl CallerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any existing value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set `key` only if the caller has not already supplied it.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.0.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Apply every entry of `defaults` without overwriting existing keys.
    pub fn with_defaults(self, defaults: CallerOptions) -> Self {
        defaults
            .0
            .into_iter()
            .fold(self, |opts, (k, v)| opts.with_default(k, v))
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for CallerOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
