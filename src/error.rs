use thiserror::Error;

use crate::llm::ModelError;
use crate::request::MAX_SOURCE_CHARS;

/// Everything that can stop a submission short of a rendered result. The
/// first three are caught before any outbound request exists; `Remote`
/// wraps whatever the completion backend reported.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source code has {0} characters, the cap is {MAX_SOURCE_CHARS}")]
    InputTooLarge(usize),
    #[error("no API credential was provided")]
    MissingCredential,
    #[error("source and target language are the same")]
    NoOpConversion,
    #[error(transparent)]
    Remote(#[from] ModelError),
}
