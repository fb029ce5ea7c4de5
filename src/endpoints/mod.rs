//! Endpoint table: descriptors and the registry that serves them.

pub mod registry;
pub mod types;

pub use registry::EndpointRegistry;
pub use types::{DefaultValue, DynamicDefault, EndpointDescriptor, PathParam, PathParamSpec};

/// Base URL the built-in endpoint templates are relative to.
pub const STATS_API_BASE_URL: &str = "https://statsapi.mlb.com/api/";
