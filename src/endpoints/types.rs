//! Endpoint descriptor data model.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::error::{Result, StatsError};
use crate::request::CallerOptions;


/// Default for a string path parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Literal(String),
    Dynamic { dynamic: DynamicDefault },
}

/// Defaults computed at build time rather than fixed in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicDefault {
    CurrentYear,
}

impl DefaultValue {
    pub fn resolve(&self) -> String {
        match self {
            DefaultValue::Literal(s) => s.clone(),
            DefaultValue::Dynamic {
                dynamic: DynamicDefault::CurrentYear,
            } => chrono::Local::now().year().to_string(),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        DefaultValue::Literal(s.to_string())
    }
}

/// How one `{placeholder}` in a URL template is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PathParamSpec {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<DefaultValue>,
        #[serde(default)]
        required: bool,
        #[serde(rename = "leadingSlash", default)]
        leading_slash: bool,
    },
    Boolean {
        #[serde(rename = "trueText")]
        true_text: String,
        #[serde(rename = "falseText")]
        false_text: String,
        #[serde(default)]
        default: bool,
    },
}

impl PathParamSpec {
    /// A string placeholder with an optional literal default.
    pub fn string(default: Option<&str>, required: bool) -> Self {
        PathParamSpec::String {
            default: default.map(DefaultValue::from),
            required,
            leading_slash: false,
        }
    }

    /// A boolean placeholder that inserts one of two literal fragments.
    pub fn boolean(true_text: &str, false_text: &str, default: bool) -> Self {
        PathParamSpec::Boolean {
            true_text: true_text.to_string(),
            false_text: false_text.to_string(),
            default,
        }
    }

    /// Prefix a non-blank resolved value with `/`. No effect on booleans.
    pub fn with_leading_slash(self) -> Self {
        match self {
            PathParamSpec::String {
                default, required, ..
            } => PathParamSpec::String {
                default,
                required,
                leading_slash: true,
            },
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParam {
    pub name: String,
    #[serde(flatten)]
    pub spec: PathParamSpec,
}

/// Static description of one Stats API resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub url_template: String,
    #[serde(default)]
    pub path_params: Vec<PathParam>,
    #[serde(default)]
    pub query_params: BTreeSet<String>,
    /// Each inner group is satisfied by any one of its members.
    #[serde(default)]
    pub required_groups: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "CallerOptions::is_empty")]
    pub test_params: CallerOptions,
}

impl EndpointDescriptor {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            path_params: Vec::new(),
            query_params: BTreeSet::new(),
            required_groups: Vec::new(),
            note: None,
            test_params: CallerOptions::new(),
        }
    }

    pub fn path_param(mut self, name: impl Into<String>, spec: PathParamSpec) -> Self {
        self.path_params.push(PathParam {
            name: name.into(),
            spec,
        });
        self
    }

    pub fn query_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_params.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn required_group<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_groups
            .push(members.into_iter().map(Into::into).collect());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn test_params(mut self, options: CallerOptions) -> Self {
        self.test_params = options;
        self
    }

    /// Every name a caller may set: query parameters, then path parameters.
    pub fn params(&self) -> Vec<&str> {
        self.query_params
            .iter()
            .map(String::as_str)
            .chain(self.path_params.iter().map(|p| p.name.as_str()))
            .collect()
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.query_params.contains(name) || self.path_params.iter().any(|p| p.name == name)
    }

    /// Check the descriptor's internal consistency.
    ///
    /// `endpoint` only labels the error.
    pub fn validate(&self, endpoint: &str) -> Result<()> {
        let invalid = |message: String| StatsError::InvalidConfig {
            endpoint: endpoint.to_string(),
            message,
        };

        let tokens = template_tokens(&self.url_template).map_err(invalid)?;

        let mut seen_tokens = HashSet::new();
        for token in &tokens {
            if !seen_tokens.insert(*token) {
                return Err(invalid(format!("placeholder {{{}}} appears more than once", token)));
            }
        }

        let mut seen_params = HashSet::new();
        for param in &self.path_params {
            if !seen_params.insert(param.name.as_str()) {
                return Err(invalid(format!("path parameter {} is declared twice", param.name)));
            }
            if !seen_tokens.contains(param.name.as_str()) {
                return Err(invalid(format!(
                    "path parameter {} has no {{{}}} placeholder in {}",
                    param.name, param.name, self.url_template
                )));
            }
        }

        if let Some(orphan) = tokens.iter().find(|t| !seen_params.contains(*t)) {
            return Err(invalid(format!(
                "placeholder {{{}}} has no matching path parameter",
                orphan
            )));
        }

        for group in &self.required_groups {
            if group.is_empty() {
                return Err(invalid("required parameter group is empty".to_string()));
            }
            if let Some(member) = group.iter().find(|m| !self.query_params.contains(*m)) {
                return Err(invalid(format!(
                    "required parameter {} is not an accepted query parameter",
                    member
                )));
            }
        }

        Ok(())
    }
}

/// Placeholder names in template order. Braces do not nest.
pub fn template_tokens(template: &str) -> std::result::Result<Vec<&str>, String> {
    let mut tokens = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in template.char_indices() {
        match (c, open) {
            ('{', None) => open = Some(i),
            ('{', Some(_)) => return Err(format!("nested '{{' at byte {} of {}", i, template)),
            ('}', Some(start)) => {
                let name = &template[start + 1..i];
                if name.is_empty() {
                    return Err(format!("empty placeholder in {}", template));
                }
                tokens.push(name);
                open = None;
            }
            ('}', None) => return Err(format!("unmatched '}}' at byte {} of {}", i, template)),
            _ => {}
        }
    }

    if open.is_some() {
        return Err(format!("unclosed placeholder in {}", template));
    }

    Ok(tokens)
}
