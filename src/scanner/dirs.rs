//! Common directory enumeration

use crate::http::HttpClient;
use futures::stream::{self, StreamExt};
use tracing::debug;
use url::Url;

/// Directories worth guessing on any target
pub const COMMON_DIRECTORIES: &[&str] = &[
    "admin/", "backup/", "config/", "db/", "includes/", "uploads/", "logs/",
];

/// Probes the wordlist against the target and reports every path that
/// answers exactly 200.
///
/// Probes are independent: one failing, timing out, or redirecting does not
/// stop the rest. Up to `threads` probes run at once through an
/// order-preserving buffer, so results always come back in wordlist order.
pub async fn scan(client: &HttpClient, target: &Url, threads: usize) -> Vec<String> {
    let concurrency = threads.max(1);
    stream::iter(COMMON_DIRECTORIES)
        .map(|dir| async move {
            let probe_url = match target.join(dir) {
                Ok(u) => u,
                Err(_) => return None,
            };
            let response = client.get(probe_url.as_str()).await;
            if response.status_code() == Some(200) {
                debug!("dirs: {probe_url} answered 200");
                Some(probe_url.to_string())
            } else {
                None
            }
        })
        .buffered(concurrency)
        .filter_map(|found| async { found })
        .collect()
        .await
}
