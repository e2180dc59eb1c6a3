//! Error types for the skopos prober

use thiserror::Error;

/// Main error type for skopos operations.
///
/// The scanning core is fail-closed and never surfaces errors; these
/// variants cover the shell around it: client construction, configuration
/// loading, and report output.
#[derive(Debug, Error)]
pub enum SkoposError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Result type alias for skopos operations
pub type Result<T> = std::result::Result<T, SkoposError>;
