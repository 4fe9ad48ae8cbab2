use thiserror::Error;

/// Failures surfaced by the host seams and configuration boundaries.
///
/// None of these are fatal: callers either skip the cosmetic effect or perform
/// the primary action without it.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Audio error: {0}")]
    Audio(String),
    #[error("Config parsing error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid promo options: {0}")]
    InvalidOptions(String),
    #[error("{field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl UiError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
