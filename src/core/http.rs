//! HTTP transport for Stats API calls.
//!
//! Request construction never touches the network; the GET itself goes
//! through the `HttpClient` trait so callers and tests can supply their own
//! transport. `ReqwestClient` is the default.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, instrument};

use super::config::Config;
use crate::Result;

/// Outcome of a GET, treated as opaque by the request builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    /// URI after redirects, including the encoded query string.
    pub final_url: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to perform a GET with query parameters.
///
/// Transport failures (DNS, TLS, timeouts) are returned as-is.
pub trait HttpClient {
    fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Default headers sent with every Stats API request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// `HttpClient` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(default_header_map())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    #[instrument(skip(self, query), fields(params = query.len()))]
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<HttpResponse> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        debug!(status, final_url = %final_url, "received response");

        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            body,
            final_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_default_header_map() {
        let headers = default_header_map();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_is_success() {
        let mut response = HttpResponse {
            status: 200,
            body: String::new(),
            final_url: "http://localhost/".to_string(),
        };
        assert!(response.is_success());
        response.status = 404;
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_reqwest_client_sends_query_and_reports_final_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/teams"))
            .and(query_param("sportId", "1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"teams":[]}"#))
            .mount(&mock_server)
            .await;

        let client = ReqwestClient::new(&Config::default()).unwrap();
        let url = format!("{}/api/v1/teams", mock_server.uri());
        let response = client
            .get(&url, &[("sportId".to_string(), "1".to_string())])
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"teams":[]}"#);
        assert!(response.final_url.ends_with("/api/v1/teams?sportId=1"));
    }

    #[tokio::test]
    async fn test_reqwest_client_passes_error_status_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let client = ReqwestClient::new(&Config::default()).unwrap();
        let response = client
            .get(&format!("{}/api/v1/nope", mock_server.uri()), &[])
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "Not Found");
    }
}
