use std::env;

use crate::{backend_path, DEFAULT_UPDATE_FEED_BASE, UPDATE_FEED_ENV, UPDATE_FEED_REQUEST_TIMEOUT};

/// What one poll of the release feed told us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedCheckOutcome {
    UpdateAvailable,
    UpToDate,
}

pub(crate) fn feed_base() -> String {
    env::var(UPDATE_FEED_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_UPDATE_FEED_BASE.to_string())
}

pub(crate) fn feed_url(base: &str, platform: &str, version: &str) -> String {
    format!("{}/{platform}/{version}", base.trim_end_matches('/'))
}

/// The feed answers 200 when a newer release exists for the requested
/// platform and version, 204 when the caller is current.
pub(crate) fn classify_feed_status(status: u16) -> Result<FeedCheckOutcome, String> {
    match status {
        200 => Ok(FeedCheckOutcome::UpdateAvailable),
        204 => Ok(FeedCheckOutcome::UpToDate),
        other => Err(format!("Unexpected update feed response status {other}")),
    }
}

pub(crate) async fn query_feed(current_version: &str) -> Result<FeedCheckOutcome, String> {
    let url = feed_url(&feed_base(), backend_path::platform_tag(), current_version);
    let client = reqwest::Client::builder()
        .timeout(UPDATE_FEED_REQUEST_TIMEOUT)
        .build()
        .map_err(|error| format!("Failed to build update feed client: {error}"))?;
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|error| format!("Failed to query update feed {url}: {error}"))?;
    classify_feed_status(response.status().as_u16())
}
