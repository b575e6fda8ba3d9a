/// Convenience result type used across anchorage.
pub type AnchorageResult<T> = Result<T, AnchorageError>;

/// Top-level error taxonomy used by the expression and batch APIs.
#[derive(thiserror::Error, Debug)]
pub enum AnchorageError {
    /// Two expression shapes that the constraint primitive cannot express together.
    #[error("unsupported combination: {0}")]
    Unsupported(String),

    /// Invalid user-provided data, such as an out-of-range priority.
    #[error("validation error: {0}")]
    Validation(String),

    /// The layout engine refused a submission.
    #[error("engine error: {0}")]
    Engine(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from an embedding engine.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnchorageError {
    /// Build an [`AnchorageError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build an [`AnchorageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AnchorageError::Engine`] value.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Build an [`AnchorageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for the dimension-combination errors raised by the checked expression API.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
