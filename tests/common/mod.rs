//! Common test utilities

use skopos::models::ScanConfig;

/// Scan configuration pointed at a wiremock server
pub fn test_config() -> ScanConfig {
    ScanConfig {
        timeout_secs: 5,
        user_agent: "Skopos-Test/0.1.0".to_string(),
        threads: 2,
        concurrent: false,
    }
}
