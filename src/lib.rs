//! MLB Stats API Client Library
//!
//! A table-driven client for the MLB Stats REST API. Every endpoint is
//! described by a URL template, typed path-parameter rules, an allowlist of
//! query parameters and groups of parameters of which at least one is
//! required. Requests are built and validated from plain option maps before
//! any network I/O happens.
//!
//! ## Features
//!
//! - **Endpoint Registry**: The full Stats API endpoint table, loaded once and validated
//! - **Request Builder**: Path substitution, query filtering and complete validation reports
//! - **Pluggable Transport**: Any `HttpClient` implementation, reqwest by default
//! - **Shortcuts**: Rosters, schedules, teams, at-bats, player stats and info
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_statsapi::{CallerOptions, Config, StatsApiClient};
//!
//! # async fn example() -> mlb_statsapi::Result<()> {
//! let client = StatsApiClient::new(Config::from_env()?)?;
//!
//! let options = CallerOptions::new()
//!     .with("personId", 677594)
//!     .with("hydrate", "currentTeam");
//! let response = client.call("person", &options).await?;
//! println!("{} {}", response.status, response.final_url);
//! # Ok(())
//! # }
//! ```
//!
//! Building without sending:
//!
//! ```rust
//! use mlb_statsapi::{build, CallerOptions, EndpointRegistry};
//!
//! let registry = EndpointRegistry::builtin().unwrap();
//! let person = registry.lookup("person").unwrap();
//! let request = build(person, &CallerOptions::new().with("personId", "677594")).unwrap();
//! assert_eq!(request.url, "v1/people/677594");
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLB_STATSAPI_BASE_URL=https://statsapi.mlb.com/api/
//! export MLB_STATSAPI_TIMEOUT_SECS=30
//! export MLB_STATSAPI_ENDPOINTS=/path/to/endpoints.json   # optional table override
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod shortcuts;

// Re-export commonly used types
pub use client::{SelfTestOutcome, StatsApiClient};
pub use crate::core::{Config, HttpClient, HttpResponse, ReqwestClient};
pub use endpoints::{EndpointDescriptor, EndpointRegistry, PathParamSpec};
pub use error::{Result, StatsError};
pub use request::{
    build, BuiltRequest, CallerOptions, EndpointCall, OptionValue, ValidationError,
    ValidationErrors,
};
