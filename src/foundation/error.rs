/// Convenience result alias used throughout the crate.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error type for fallible library operations.
///
/// Carousel runtime operations never fail; this type covers loading content, validating
/// configuration and replaying scenarios.
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    /// Input data failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration is missing or out of range.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl VitrineError {
    /// Build a [`VitrineError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitrineError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for VitrineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
