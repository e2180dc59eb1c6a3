//! HTTP client wrapper with failure capture and request tracking
//!
//! Every transport-level failure (DNS, connect, timeout, TLS) is converted
//! into a `ProbeResponse` with `succeeded = false`, so checks never see an
//! error. One attempt per call, no retries: the callers treat absent data
//! as "not vulnerable".

use crate::error::Result;
use crate::models::{ProbeResponse, ScanConfig};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Probe method. Form data goes to the query string for GET and into a
/// form-encoded body for POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// HTTP client with request counting. One instance per scan, discarded
/// when the scan completes; nothing is shared across scans.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    no_redirect: Client,
    request_count: Arc<AtomicU64>,
}

impl HttpClient {
    /// Creates a new HttpClient from scan configuration.
    ///
    /// reqwest fixes its redirect policy at build time, so two inner
    /// clients are built from the same settings: one following up to ten
    /// redirects, one returning 3xx responses as-is with the `Location`
    /// header intact.
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let builder = || {
            Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(&config.user_agent)
                .cookie_store(true)
        };

        let client = builder().redirect(Policy::limited(10)).build()?;
        let no_redirect = builder().redirect(Policy::none()).build()?;

        Ok(Self {
            client,
            no_redirect,
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Sends a plain GET, following redirects
    pub async fn get(&self, url: &str) -> ProbeResponse {
        self.fetch(Method::Get, url, None, true).await
    }

    /// Sends a single request and captures the outcome.
    ///
    /// With `follow_redirects` unset, a 3xx response is returned as-is
    /// rather than followed. A body that cannot be read counts as a failed
    /// probe even though a status arrived.
    pub async fn fetch(
        &self,
        method: Method,
        url: &str,
        data: Option<&[(String, String)]>,
        follow_redirects: bool,
    ) -> ProbeResponse {
        let client = if follow_redirects {
            &self.client
        } else {
            &self.no_redirect
        };

        let request = match method {
            Method::Get => {
                let mut req = client.get(url);
                if let Some(params) = data {
                    req = req.query(params);
                }
                req
            }
            Method::Post => client.post(url).form(data.unwrap_or(&[])),
        };

        self.request_count.fetch_add(1, Ordering::Relaxed);

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                let headers = response.headers().clone();
                debug!("{status} for {url}");
                match response.text().await {
                    Ok(body) => ProbeResponse {
                        status: Some(status),
                        headers,
                        body,
                        succeeded: true,
                    },
                    Err(e) => {
                        debug!("body read failed for {url}: {e}");
                        ProbeResponse::failure()
                    }
                }
            }
            Err(e) => {
                debug!("request failed for {url}: {e}");
                ProbeResponse::failure()
            }
        }
    }

    /// Returns the total number of requests made
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
