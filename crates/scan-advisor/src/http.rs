//! Response status handling for the completions endpoint.

use crate::error::AdvisorError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Return the response unchanged on success.
///
/// - **429** → [`AdvisorError::RateLimited`], honouring `Retry-After`
///   (60 s when absent or unparseable).
/// - any other non-success status → [`AdvisorError::Api`] with the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AdvisorError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AdvisorError::RateLimited {
            retry_after_secs: retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(AdvisorError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
