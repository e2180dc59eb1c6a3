//! Check modules and the scan engine

pub mod csrf;
pub mod dirs;
pub mod open_redirect;
pub mod robots;
pub mod security_headers;
pub mod sqli;
pub mod xss;

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ScanConfig, ScanReport, ScanResults};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use url::Url;

/// Name and description of every check, in report order
pub const MODULES: &[(&str, &str)] = &[
    (
        "xss",
        "Submits a script payload through each form and looks for an unescaped echo",
    ),
    (
        "sql",
        "Submits a quote-breaking payload and looks for database error output",
    ),
    ("csrf", "Flags forms that carry no CSRF token field"),
    ("robots", "Collects the paths robots.txt asks crawlers to skip"),
    (
        "security_headers",
        "Reports recommended response headers the target does not send",
    ),
    (
        "open_redirect",
        "Feeds an external URL to redirect fields and watches the Location header",
    ),
    (
        "directory_enumeration",
        "Probes a short list of commonly exposed directories",
    ),
];

/// Prefixes `http://` when the operator left the scheme off
pub fn normalize_target(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

/// Runs the seven checks against one target and assembles the report
pub struct ScanEngine {
    config: ScanConfig,
}

impl ScanEngine {
    /// Creates an engine from scan configuration
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scans a target supplied as raw operator input.
    ///
    /// Arbitrary strings are tolerated: the scheme is injected when
    /// missing, and input that still does not parse as a URL produces a
    /// report where every check is empty. Individual checks are fail-closed,
    /// so the aggregate always comes back complete. The only error here is
    /// failing to construct the HTTP client.
    pub async fn scan(&self, raw_url: &str) -> Result<ScanReport> {
        let normalized = normalize_target(raw_url);
        let mut report = ScanReport::new(&normalized);

        let target = match Url::parse(&normalized) {
            Ok(url) => url,
            Err(e) => {
                warn!("target {normalized:?} is not a usable URL: {e}");
                report.finish();
                return Ok(report);
            }
        };

        // One client per scan, dropped with the report handoff
        let client = HttpClient::from_config(&self.config)?;

        info!("Scanning {target}");
        report.results = if self.config.concurrent {
            self.run_concurrent(&client, &target).await
        } else {
            self.run_sequential(&client, &target).await
        };

        report.total_requests = client.request_count();
        report.finish();
        Ok(report)
    }

    /// Sequential execution: one check finishes all its probes before the
    /// next begins
    async fn run_sequential(&self, client: &HttpClient, target: &Url) -> ScanResults {
        let pb = ProgressBar::new(MODULES.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        let mut results = ScanResults::default();

        pb.set_message("xss");
        results.xss = xss::scan(client, target).await;
        pb.inc(1);

        pb.set_message("sql");
        results.sql = sqli::scan(client, target).await;
        pb.inc(1);

        pb.set_message("csrf");
        results.csrf = csrf::scan(client, target).await;
        pb.inc(1);

        pb.set_message("robots");
        results.robots = robots::scan(client, target).await;
        pb.inc(1);

        pb.set_message("security_headers");
        results.security_headers = security_headers::scan(client, target).await;
        pb.inc(1);

        pb.set_message("open_redirect");
        results.open_redirect = open_redirect::scan(client, target).await;
        pb.inc(1);

        pb.set_message("directory_enumeration");
        results.directory_enumeration = dirs::scan(client, target, self.config.threads).await;
        pb.inc(1);

        pb.finish_with_message("Scan complete");
        results
    }

    /// Concurrent execution. Each check owns its result slot, so joining
    /// them is the only synchronization needed.
    async fn run_concurrent(&self, client: &HttpClient, target: &Url) -> ScanResults {
        info!("Running all checks concurrently");
        let (xss, sql, csrf, robots, security_headers, open_redirect, directory_enumeration) = tokio::join!(
            xss::scan(client, target),
            sqli::scan(client, target),
            csrf::scan(client, target),
            robots::scan(client, target),
            security_headers::scan(client, target),
            open_redirect::scan(client, target),
            dirs::scan(client, target, self.config.threads),
        );

        ScanResults {
            xss,
            sql,
            csrf,
            robots,
            security_headers,
            open_redirect,
            directory_enumeration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_target_injects_scheme() {
        assert_eq!(normalize_target("x.com"), "http://x.com");
        assert_eq!(normalize_target("http://x.com"), "http://x.com");
        assert_eq!(normalize_target("https://x.com"), "https://x.com");
        assert_eq!(normalize_target(""), "http://");
    }
}
