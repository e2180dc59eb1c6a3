//! Core data models for the skopos prober

use chrono::{DateTime, Local};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// HTTP method of a discovered form. Anything other than `post`
/// (case-insensitive) is treated as GET, the browser default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    /// Parses a raw `method` attribute value
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(m) if m.eq_ignore_ascii_case("post") => FormMethod::Post,
            _ => FormMethod::Get,
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMethod::Get => write!(f, "GET"),
            FormMethod::Post => write!(f, "POST"),
        }
    }
}

/// A single `input` element of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// The `name` attribute; `None` when absent or empty. Such fields
    /// cannot be filled and are skipped at submission time
    pub name: Option<String>,
    /// The `type` attribute, `"text"` when absent
    #[serde(rename = "type")]
    pub kind: String,
}

/// An HTML form extracted from the target page.
///
/// Forms and their fields keep document order. Instances are built once per
/// page parse and discarded when the owning check completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormModel {
    /// Raw `action` attribute; `None` when absent or empty, in which case
    /// the form submits back to the page itself
    pub action: Option<String>,
    pub method: FormMethod,
    pub fields: Vec<FormField>,
}

impl FormModel {
    /// Resolves the form action against the page URL. An unresolvable
    /// action falls back to the page URL, mirroring what a browser submits.
    pub fn resolved_action(&self, page_url: &Url) -> Url {
        match self.action.as_deref() {
            Some(action) => page_url.join(action).unwrap_or_else(|_| page_url.clone()),
            None => page_url.clone(),
        }
    }

    /// One-line description for report output, e.g. `POST /login [user, pass]`
    pub fn summary(&self) -> String {
        let action = self.action.as_deref().unwrap_or("(page)");
        let names: Vec<&str> = self
            .fields
            .iter()
            .filter_map(|f| f.name.as_deref())
            .collect();
        if names.is_empty() {
            format!("{} {action} (no named fields)", self.method)
        } else {
            format!("{} {action} [{}]", self.method, names.join(", "))
        }
    }
}

/// Outcome of a single HTTP probe.
///
/// `succeeded = false` stands in for any network-level failure (DNS,
/// connect, timeout, TLS); status, headers, and body are empty in that
/// case. Transient, never serialized or persisted.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: Option<StatusCode>,
    pub headers: HeaderMap,
    pub body: String,
    pub succeeded: bool,
}

impl ProbeResponse {
    /// A response representing a failed probe
    pub fn failure() -> Self {
        Self {
            status: None,
            headers: HeaderMap::new(),
            body: String::new(),
            succeeded: false,
        }
    }

    /// Numeric status code, when the probe got a response at all
    pub fn status_code(&self) -> Option<u16> {
        self.status.map(|s| s.as_u16())
    }

    /// True when the probe completed and the status is 2xx
    pub fn is_success(&self) -> bool {
        self.succeeded && self.status.map(|s| s.is_success()).unwrap_or(false)
    }

    /// Header value lookup; names match case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Per-check results of one scan. Field names are the report keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResults {
    /// Form actions that echoed a script payload unescaped
    pub xss: Vec<String>,
    /// Form actions whose response carried a database error signature
    pub sql: Vec<String>,
    /// Forms with no CSRF token field
    pub csrf: Vec<FormModel>,
    /// URLs disallowed by robots.txt
    pub robots: Vec<String>,
    /// Missing security headers, name to description
    pub security_headers: HashMap<String, String>,
    /// Form actions that redirected to an attacker-supplied URL
    pub open_redirect: Vec<String>,
    /// Common directories answering 200
    pub directory_enumeration: Vec<String>,
}

impl ScanResults {
    /// Total findings across all checks
    pub fn total_findings(&self) -> usize {
        self.xss.len()
            + self.sql.len()
            + self.csrf.len()
            + self.robots.len()
            + self.security_headers.len()
            + self.open_redirect.len()
            + self.directory_enumeration.len()
    }
}

/// Result of a complete scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Normalized target URL
    pub target: String,
    /// Unique scan identifier
    pub scan_id: String,
    /// Scan start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Scan end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// Per-check results
    pub results: ScanResults,
    /// Total HTTP requests made
    pub total_requests: u64,
}

impl ScanReport {
    /// Creates a new ScanReport for a target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scan_id: uuid::Uuid::new_v4().to_string(),
            started_at: Local::now(),
            finished_at: None,
            results: ScanResults::default(),
            total_requests: 0,
        }
    }

    /// Marks the scan as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Concurrent directory probes (1 = strictly sequential)
    pub threads: usize,
    /// Run the seven checks concurrently
    #[serde(default)]
    pub concurrent: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: "Skopos-Prober/0.1.0".to_string(),
            threads: 4,
            concurrent: false,
        }
    }
}
