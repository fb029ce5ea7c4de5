//! High-level Stats API client: registry lookup, request building and GET.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::core::{Config, HttpClient, HttpResponse, ReqwestClient};
use crate::endpoints::{EndpointDescriptor, EndpointRegistry};
use crate::error::{Result, StatsError};
use crate::request::{BuiltRequest, CallerOptions, EndpointCall};


/// Where the client's endpoint table lives.
#[derive(Debug, Clone)]
enum Registry {
    Builtin(&'static EndpointRegistry),
    Shared(Arc<EndpointRegistry>),
}

impl std::ops::Deref for Registry {
    type Target = EndpointRegistry;

    fn deref(&self) -> &EndpointRegistry {
        match self {
            Registry::Builtin(r) => r,
            Registry::Shared(r) => r,
        }
    }
}

/// Result of calling one endpoint with its `test_params`.
#[derive(Debug)]
pub struct SelfTestOutcome {
    pub endpoint: String,
    pub result: Result<HttpResponse>,
}

impl SelfTestOutcome {
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(response) if response.is_success())
    }
}

/// Stats API client over an injectable transport.
#[derive(Debug, Clone)]
pub struct StatsApiClient<C = ReqwestClient> {
    config: Config,
    registry: Registry,
    http: C,
}

impl StatsApiClient<ReqwestClient> {
    /// Client with the reqwest transport. Uses the endpoint file named in the
    /// config when present, otherwise the built-in table.
    pub fn new(config: Config) -> Result<Self> {
        let http = ReqwestClient::new(&config)?;
        let registry = match &config.endpoints_file {
            Some(path) => Registry::Shared(Arc::new(EndpointRegistry::from_path(path)?)),
            None => Registry::Builtin(EndpointRegistry::builtin()?),
        };
        Ok(Self {
            config,
            registry,
            http,
        })
    }
}

impl<C: HttpClient> StatsApiClient<C> {
    pub fn with_transport(config: Config, registry: Arc<EndpointRegistry>, http: C) -> Self {
        Self {
            config,
            registry: Registry::Shared(registry),
            http,
        }
    }

    /// Built-in endpoint table with a caller-supplied transport.
    pub fn with_builtin_registry(config: Config, http: C) -> Result<Self> {
        Ok(Self {
            config,
            registry: Registry::Builtin(EndpointRegistry::builtin()?),
            http,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn endpoint_info(&self, endpoint: &str) -> Result<&EndpointDescriptor> {
        self.registry.lookup(endpoint)
    }

    /// Start assembling options for `endpoint`.
    pub fn endpoint(&self, endpoint: &str) -> Result<EndpointCall<'_>> {
        let descriptor = self.registry.lookup(endpoint)?;
        Ok(EndpointCall::new(endpoint, descriptor))
    }

    /// Build and validate without sending. The URL is joined to the base URL.
    pub fn prepare(&self, endpoint: &str, options: &CallerOptions) -> Result<BuiltRequest> {
        let descriptor = self.registry.lookup(endpoint)?;
        let mut request = crate::request::build(descriptor, options)?;
        request.url = self.config.endpoint_url(&request.url);
        Ok(request)
    }

    /// Build, validate and GET. The status code is not checked.
    #[instrument(skip(self, options))]
    pub async fn call(&self, endpoint: &str, options: &CallerOptions) -> Result<HttpResponse> {
        let request = self.prepare(endpoint, options)?;
        debug!(url = %request.url, query = ?request.query, "calling endpoint");

        let response = self.http.get(&request.url, &request.query_pairs()).await?;
        info!(status = response.status, final_url = %response.final_url, "endpoint responded");
        Ok(response)
    }

    /// Send an assembled `EndpointCall`.
    pub async fn send(&self, call: &EndpointCall<'_>) -> Result<HttpResponse> {
        self.call(call.name(), call.options()).await
    }

    /// `call`, then require a 2xx status and parse the body as JSON.
    pub async fn call_json(&self, endpoint: &str, options: &CallerOptions) -> Result<Value> {
        let response = self.call(endpoint, options).await?;
        if !response.is_success() {
            return Err(StatsError::Status {
                status: response.status,
                url: response.final_url,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Call every endpoint (or those in `only`) with its test parameters,
    /// pausing `delay` between calls.
    pub async fn self_test(&self, only: &[String], delay: Duration) -> Vec<SelfTestOutcome> {
        let selected: Vec<(&str, &EndpointDescriptor)> = self
            .registry
            .iter()
            .filter(|(name, _)| only.is_empty() || only.iter().any(|o| o.as_str() == *name))
            .collect();

        let mut outcomes = Vec::with_capacity(selected.len());
        for (i, (endpoint, descriptor)) in selected.into_iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let result = self.call(endpoint, &descriptor.test_params).await;
            if let Err(e) = &result {
                warn!(endpoint, error = %e, "self-test call failed");
            }

            outcomes.push(SelfTestOutcome {
                endpoint: endpoint.to_string(),
                result,
            });
        }
        outcomes
    }
}
