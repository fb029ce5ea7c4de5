//! Error types for the MLB Stats API client

use thiserror::Error;

use crate::request::ValidationErrors;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{name} is not a valid endpoint")]
    UnknownEndpoint { name: String },

    #[error("{name} is not a valid parameter for the {endpoint} endpoint")]
    InvalidParameter { endpoint: String, name: String },

    #[error("Invalid definition for endpoint {endpoint}: {message}")]
    InvalidConfig { endpoint: String, message: String },

    #[error("Request validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Request for {endpoint} failed validation with {count} error(s)")]
    InvalidRequest { endpoint: String, count: usize },

    #[error("Stats API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid option `{input}`, expected key=value")]
    InvalidOption { input: String },

    #[error("Stats API returned no data")]
    NoData,
}

impl From<ValidationErrors> for StatsError {
    fn from(errors: ValidationErrors) -> Self {
        StatsError::Validation(errors)
    }
}
