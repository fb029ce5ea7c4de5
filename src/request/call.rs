//! Registry-bound request builder for a single endpoint.

use super::builder::{build, BuiltRequest, ValidationErrors};
use super::options::{CallerOptions, OptionValue};
use crate::endpoints::EndpointDescriptor;
use crate::error::{Result, StatsError};

/// Options being assembled for one endpoint.
///
/// Each setter consumes the call and returns a new one. Unlike bare
/// `CallerOptions`, the setters refuse names the endpoint does not accept.
#[derive(Debug, Clone)]
pub struct EndpointCall<'a> {
    name: String,
    descriptor: &'a EndpointDescriptor,
    options: CallerOptions,
}

impl<'a> EndpointCall<'a> {
    pub fn new(name: impl Into<String>, descriptor: &'a EndpointDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            options: CallerOptions::new(),
        }
    }

    /// Replace the option set wholesale. Names are not checked here; unknown
    /// names are dropped from the query when the request is built.
    pub fn with_options(self, options: CallerOptions) -> Self {
        Self { options, ..self }
    }

    /// Set `key`, overwriting any earlier value.
    pub fn set_option(self, key: &str, value: impl Into<OptionValue>) -> Result<Self> {
        self.check_param(key)?;
        let options = self.options.with(key, value);
        Ok(Self { options, ..self })
    }

    /// Set `key` only if it has not been set yet.
    pub fn set_default(self, key: &str, value: impl Into<OptionValue>) -> Result<Self> {
        self.check_param(key)?;
        let options = self.options.with_default(key, value);
        Ok(Self { options, ..self })
    }

    pub fn build(&self) -> std::result::Result<BuiltRequest, ValidationErrors> {
        build(self.descriptor, &self.options)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &'a EndpointDescriptor {
        self.descriptor
    }

    pub fn options(&self) -> &CallerOptions {
        &self.options
    }

    pub fn into_options(self) -> CallerOptions {
        self.options
    }

    fn check_param(&self, key: &str) -> Result<()> {
        if self.descriptor.accepts(key) {
            Ok(())
        } else {
            Err(StatsError::InvalidParameter {
                endpoint: self.name.clone(),
                name: key.to_string(),
            })
        }
    }
}
