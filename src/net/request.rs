//! URL reachability probe.

use std::time::Duration;

use tracing::trace;

/// Returns true iff a HEAD request to `url` answers with a 2xx status within
/// `timeout`.
///
/// Transport errors, timeouts and non-success statuses all read as `false`;
/// a probe never returns an error.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use batchkit::check_url;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let client = reqwest::Client::new();
/// let alive = check_url(&client, "https://example.com", Duration::from_secs(5)).await;
/// assert!(alive);
/// # });
/// ```
pub async fn check_url(client: &reqwest::Client, url: &str, timeout: Duration) -> bool {
    match client.head(url).timeout(timeout).send().await {
        Ok(response) => response.status().is_success(),
        Err(err) => {
            trace!(url, error = %err, "url probe failed");
            false
        }
    }
}
