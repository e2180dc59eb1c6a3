//! Configuration management for the skopos prober

use crate::error::Result;
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching skopos.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    threads: Option<usize>,
    concurrent: Option<bool>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(timeout) = scan.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(ua) = scan.user_agent {
            config.user_agent = ua;
        }
        if let Some(threads) = scan.threads {
            config.threads = threads;
        }
        if let Some(concurrent) = scan.concurrent {
            config.concurrent = concurrent;
        }
    }

    Ok(config)
}

/// Merges CLI arguments into an existing ScanConfig
pub fn merge_cli_args(
    config: &mut ScanConfig,
    timeout: Option<u64>,
    user_agent: Option<String>,
    threads: Option<usize>,
    concurrent: bool,
) {
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    if let Some(ua) = user_agent {
        config.user_agent = ua;
    }
    if let Some(t) = threads {
        config.threads = t;
    }
    if concurrent {
        config.concurrent = true;
    }
}
