//! The single outbound call to the world-state endpoint. Transport failure
//! here is the only error that aborts a report cycle.

use std::time::Duration;

use anyhow::{Context, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn fetch_world_state(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("build http client")?;

    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetch {url}"))?
        .error_for_status()
        .context("world-state endpoint returned error status")?;

    resp.text().await.context("read world-state body")
}
