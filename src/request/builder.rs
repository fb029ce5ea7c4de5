//! Request construction: path resolution, query filtering and validation.
//!
//! `build` is a pure function of a descriptor and a set of caller options.
//! It never stops at the first problem: every missing path parameter and
//! every unsatisfied required group is reported in one pass, and no URL is
//! returned unless the list is empty.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

use super::options::{CallerOptions, OptionValue};
use crate::endpoints::{DefaultValue, EndpointDescriptor, PathParamSpec};

/// A single reason a request could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required path parameter: {0}")]
    MissingRequiredPathParam(String),

    #[error("Missing one of the following required parameters: {}", .0.join(", "))]
    MissingRequiredGroup(Vec<String>),
}

/// Every validation failure from one `build` call, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A validated request: the resolved path and the filtered query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltRequest {
    pub url: String,
    pub query: BTreeMap<String, OptionValue>,
}

impl BuiltRequest {
    /// Query values rendered as strings, ready for an HTTP client.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

/// Build a request for `descriptor` from `options`.
pub fn build(
    descriptor: &EndpointDescriptor,
    options: &CallerOptions,
) -> Result<BuiltRequest, ValidationErrors> {
    let mut errors = Vec::new();

    let url = resolve_path(descriptor, options, &mut errors);
    let query = filter_query(descriptor, options);
    check_required_groups(descriptor, &query, &mut errors);

    if errors.is_empty() {
        Ok(BuiltRequest { url, query })
    } else {
        Err(ValidationErrors(errors))
    }
}

fn resolve_path(
    descriptor: &EndpointDescriptor,
    options: &CallerOptions,
    errors: &mut Vec<ValidationError>,
) -> String {
    let mut resolved = HashMap::with_capacity(descriptor.path_params.len());

    for param in &descriptor.path_params {
        let supplied = options.get(&param.name);
        let text = match &param.spec {
            PathParamSpec::Boolean {
                true_text,
                false_text,
                default,
            } => {
                let flag = match supplied.map(ToString::to_string).as_deref() {
                    Some("true") => true,
                    Some("false") => false,
                    _ => *default,
                };
                if flag {
                    true_text.clone()
                } else {
                    false_text.clone()
                }
            }
            PathParamSpec::String {
                default,
                required,
                leading_slash,
            } => {
                let value = supplied
                    .filter(|v| !v.is_blank())
                    .map(ToString::to_string)
                    .or_else(|| default.as_ref().map(DefaultValue::resolve))
                    .unwrap_or_default();

                if value.trim().is_empty() {
                    if *required {
                        errors.push(ValidationError::MissingRequiredPathParam(param.name.clone()));
                    }
                    String::new()
                } else if *leading_slash {
                    format!("/{}", value)
                } else {
                    value
                }
            }
        };
        resolved.insert(param.name.as_str(), text);
    }

    render_template(&descriptor.url_template, &resolved)
}

/// Substitute `{name}` tokens in a single left-to-right pass.
///
/// Substituted text is never rescanned, so a value that happens to contain
/// `{other}` cannot be mistaken for a later placeholder. Tokens without a
/// resolution are copied through unchanged.
fn render_template(template: &str, resolved: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match resolved.get(name) {
                    Some(text) => out.push_str(text),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

fn filter_query(
    descriptor: &EndpointDescriptor,
    options: &CallerOptions,
) -> BTreeMap<String, OptionValue> {
    options
        .iter()
        .filter(|(name, _)| descriptor.query_params.contains(*name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn check_required_groups(
    descriptor: &EndpointDescriptor,
    query: &BTreeMap<String, OptionValue>,
    errors: &mut Vec<ValidationError>,
) {
    for group in &descriptor.required_groups {
        if !group.iter().any(|member| query.contains_key(member)) {
            errors.push(ValidationError::MissingRequiredGroup(group.clone()));
        }
    }
}
