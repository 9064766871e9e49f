//! Error types for wall construction and configuration.
//!
//! Event handlers never fail: malformed input sequences are expected from real
//! touch hardware and are treated as no-ops. Only mounting a wall and parsing
//! its configuration can produce an error.

/// Errors raised while mounting or registering a wall.
#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    #[error("wall element not found: {selector}")]
    ElementNotFound { selector: String },
    #[error("wall already mounted: {selector}")]
    AlreadyMounted { selector: String },
    #[error("invalid viewport config: {0}")]
    Config(#[from] ConfigError),
    #[error("dom error: {0}")]
    Dom(String),
}

/// Errors raised while parsing or validating a [`crate::ViewportConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scale range must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidScaleRange { min: f64, max: f64 },
    #[error("{name} must be in (0, 1), got {value}")]
    InvalidStep { name: &'static str, value: f64 },
    #[error("{name} must not be empty")]
    EmptySelector { name: &'static str },
}
