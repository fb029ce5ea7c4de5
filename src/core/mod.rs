//! Core plumbing shared by the client and the CLI
//!
//! - `config`: environment-driven settings
//! - `http`: the transport trait and its reqwest implementation

pub mod config;
pub mod http;

pub use config::Config;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
