//! Security header audit

use crate::http::HttpClient;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Audited headers with the explanation reported when one is missing.
/// Presence is all that is checked; a weak value still counts as present.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        "Content-Security-Policy",
        "The Content-Security-Policy (CSP) header helps to protect against Cross-Site Scripting (XSS) and other attacks. It allows you to define which dynamic resources are allowed to load.",
    ),
    (
        "X-Content-Type-Options",
        "The X-Content-Type-Options header prevents browsers from interpreting files as a different MIME type than what is specified in the Content-Type header.",
    ),
    (
        "X-Frame-Options",
        "The X-Frame-Options header protects against Clickjacking attacks by controlling whether the browser should allow a page to be displayed in an iframe.",
    ),
    (
        "Strict-Transport-Security",
        "The Strict-Transport-Security header ensures that browsers only connect to your site using HTTPS.",
    ),
    (
        "X-XSS-Protection",
        "The X-XSS-Protection header enables the cross-site scripting (XSS) filter built into most browsers.",
    ),
    (
        "Referrer-Policy",
        "The Referrer-Policy header controls how much referrer information should be included with requests.",
    ),
];

/// Reports the audited headers the target's response does not carry.
///
/// Header names match case-insensitively. A failed fetch yields an empty
/// map: fail-closed, not "all missing".
pub async fn scan(client: &HttpClient, target: &Url) -> HashMap<String, String> {
    let response = client.get(target.as_str()).await;
    if !response.succeeded {
        debug!("security_headers: fetch failed for {target}");
        return HashMap::new();
    }

    let mut missing = HashMap::new();
    for (name, description) in SECURITY_HEADERS {
        if !response.headers.contains_key(*name) {
            missing.insert(name.to_string(), description.to_string());
        }
    }
    missing
}
