//! Top-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::llm::LlmError;

/// Any failure a generation operation can surface
///
/// Configuration problems are raised synchronously at construction or
/// prompt-build time; remote-call failures come back from the completion
/// endpoint. Neither class is recovered automatically.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}
