//! `url` and `get` command implementations

use url::Url;

use crate::{
    cli::types::{options_from_args, OptionArg},
    client::StatsApiClient,
    core::HttpClient,
    error::StatsError,
    request::BuiltRequest,
    Result,
};

/// Render a built request as one URL with its query string.
///
/// No `?` is appended when the query is empty.
pub fn format_request_url(request: &BuiltRequest) -> Result<String> {
    let mut url = Url::parse(&request.url).map_err(|e| StatsError::Config {
        message: format!("cannot form a URL from {}: {}", request.url, e),
    })?;
    if !request.query.is_empty() {
        url.query_pairs_mut().extend_pairs(request.query_pairs());
    }
    Ok(url.to_string())
}

/// Print the request URL, or every validation error on stderr.
///
/// Validation failures come back as `InvalidRequest` with the error count.
pub fn handle_url<C: HttpClient>(
    client: &StatsApiClient<C>,
    endpoint: &str,
    options: &[OptionArg],
) -> Result<()> {
    let options = options_from_args(options);
    match client.prepare(endpoint, &options) {
        Ok(request) => {
            println!("{}", format_request_url(&request)?);
            Ok(())
        }
        Err(StatsError::Validation(errors)) => {
            for err in &errors {
                eprintln!("✗ {}", err);
            }
            Err(StatsError::InvalidRequest {
                endpoint: endpoint.to_string(),
                count: errors.len(),
            })
        }
        Err(e) => Err(e),
    }
}

/// Call the endpoint and print the body; non-2xx is an error.
pub async fn handle_get<C: HttpClient>(
    client: &StatsApiClient<C>,
    endpoint: &str,
    options: &[OptionArg],
    pretty: bool,
) -> Result<()> {
    let options = options_from_args(options);

    if pretty {
        let value = client.call_json(endpoint, &options).await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let response = client.call(endpoint, &options).await?;
    if !response.is_success() {
        return Err(StatsError::Status {
            status: response.status,
            url: response.final_url,
        });
    }
    println!("{}", response.body);
    Ok(())
}
