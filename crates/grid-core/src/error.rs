use thiserror::Error;

/// Errors raised while reading a variant configuration.
///
/// Numeric values are never rejected: out-of-range numbers are sanitized when
/// the configuration is loaded. Only structural problems surface here.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    #[error("invalid color `{0}`: expected #rgb, #rrggbb or [r, g, b]")]
    Color(String),
}
