use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a completion backend. Each maps to a distinct
/// user-facing message; none of them abort the process.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("credential rejected by the completion endpoint")]
    InvalidCredential,
    #[error("completion endpoint is rate limiting requests")]
    RateLimited,
    #[error("completion endpoint error: {0}")]
    Service(String),
    #[error("network failure reaching the completion endpoint: {0}")]
    Network(String),
    #[error("completion endpoint returned no usable text")]
    EmptyResponse,
}

/// Interface to a hosted completion endpoint: send one prompt, await the
/// full reply text. The backend is bound to a credential, a model
/// identifier, and its sampling settings at construction time.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}
