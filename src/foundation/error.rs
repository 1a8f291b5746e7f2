/// Convenience result type used across reel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is raised while a composition, curve or spring is being built.
/// Rendering a frame never fails once construction succeeded.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Malformed sequence, transition or declaration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed keyframe sets, easing parameters or spring configs.
    #[error("animation error: {0}")]
    Animation(String),

    /// Failures while driving frame evaluation (thread pools, chunking).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing declarations.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Passthrough for lower-level errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
