/// Convenience result type used across QuietPage.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Top-level error taxonomy used by the render-and-encode pipeline.
#[derive(thiserror::Error, Debug)]
pub enum QuoteError {
    /// Invalid configuration, request, or surface dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// The text measurement or glyph capability could not produce a result.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// The BMP encoder refused to emit a malformed file.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuoteError {
    /// Build a [`QuoteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QuoteError::Measurement`] value.
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`QuoteError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
