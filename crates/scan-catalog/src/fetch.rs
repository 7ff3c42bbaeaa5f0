//! Read a table from disk or over HTTP.

use std::path::PathBuf;
use std::time::Duration;

use scan_config::is_url;

use crate::error::CatalogError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Read the raw text of a catalog table from a path or URL.
pub async fn read_source(location: &str) -> Result<String, CatalogError> {
    if is_url(location) {
        fetch_remote(location).await
    } else {
        let path = PathBuf::from(location);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::Io { path, source })
    }
}

async fn fetch_remote(url: &str) -> Result<String, CatalogError> {
    tracing::debug!(url, "fetching remote catalog table");
    let client = reqwest::Client::builder()
        .user_agent("symptoscan/0.1")
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }
    Ok(resp.text().await?)
}
