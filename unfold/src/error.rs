//! Error types.

use thiserror::Error;

/// Problems loading or validating an [`ExpanderConfig`](crate::ExpanderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} of {value}ms is out of range")]
    InvalidDuration { field: &'static str, value: u32 },
}
