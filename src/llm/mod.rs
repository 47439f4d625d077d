//! Completion client module
//!
//! The [`LlmClient`] trait is the injectable remote-completion capability;
//! [`DeepSeekClient`] is its production implementation.

mod client;
mod deepseek;
mod error;
mod types;

pub use client::LlmClient;
pub use deepseek::DeepSeekClient;
pub use error::LlmError;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, TokenUsage};

#[cfg(test)]
pub(crate) use client::mock;
