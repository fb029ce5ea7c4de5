//! Load-once, read-only lookup table of endpoint descriptors.

use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::types::EndpointDescriptor;
use crate::error::{Result, StatsError};


/// The MLB Stats API endpoint table shipped with the crate.
const BUILTIN_ENDPOINTS: &str = include_str!("endpoints.json");

static BUILTIN: OnceCell<EndpointRegistry> = OnceCell::new();

/// Immutable mapping from endpoint id to descriptor.
///
/// Every descriptor is validated when the registry is constructed, so a
/// registry that exists is known to be internally consistent.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, EndpointDescriptor>,
}

impl EndpointRegistry {
    /// Build a registry, rejecting the first inconsistent descriptor.
    pub fn new(endpoints: BTreeMap<String, EndpointDescriptor>) -> Result<Self> {
        for (name, descriptor) in &endpoints {
            descriptor.validate(name)?;
        }
        Ok(Self { endpoints })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let endpoints: BTreeMap<String, EndpointDescriptor> = serde_json::from_str(json)?;
        Self::new(endpoints)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading endpoint table");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The built-in table, parsed and validated on first use.
    pub fn builtin() -> Result<&'static EndpointRegistry> {
        BUILTIN.get_or_try_init(|| {
            let registry = Self::from_json_str(BUILTIN_ENDPOINTS)?;
            debug!(endpoints = registry.len(), "loaded built-in endpoint table");
            Ok(registry)
        })
    }

    pub fn lookup(&self, name: &str) -> Result<&EndpointDescriptor> {
        self.endpoints
            .get(name)
            .ok_or_else(|| StatsError::UnknownEndpoint {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains_key(name)
    }

    /// Endpoint ids in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointDescriptor)> {
        self.endpoints.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
