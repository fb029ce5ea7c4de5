//! `self-test` command implementation

use std::time::Duration;

use crate::{
    client::{SelfTestOutcome, StatsApiClient},
    core::HttpClient,
    Result,
};

pub fn format_outcome(outcome: &SelfTestOutcome) -> String {
    match &outcome.result {
        Ok(response) => {
            let mark = if response.is_success() { "✓" } else { "✗" };
            format!(
                "{} {} {} {}",
                mark, outcome.endpoint, response.status, response.final_url
            )
        }
        Err(e) => format!("✗ {} error: {}", outcome.endpoint, e),
    }
}

/// Run the self-test and print one line per endpoint plus a summary.
///
/// Returns the number of endpoints that did not pass.
pub async fn handle_self_test<C: HttpClient>(
    client: &StatsApiClient<C>,
    only: &[String],
    delay_ms: u64,
) -> Result<usize> {
    let outcomes = client
        .self_test(only, Duration::from_millis(delay_ms))
        .await;

    for outcome in &outcomes {
        println!("{}", format_outcome(outcome));
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    println!(
        "{} endpoints tested, {} passed, {} failed",
        outcomes.len(),
        outcomes.len() - failed,
        failed
    );
    Ok(failed)
}
