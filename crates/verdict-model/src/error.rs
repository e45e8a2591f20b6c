//! Model error types

/// Failure while acquiring or deserializing model resources.
///
/// Raised once, at startup. A process that hits this must not serve
/// requests. Per-request failures use
/// [`verdict_core::InferenceError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to load model resources: {0}")]
    Load(String),
}

impl ModelError {
    pub(crate) fn load(context: &str, err: impl std::fmt::Display) -> Self {
        ModelError::Load(format!("{context}: {err}"))
    }
}
