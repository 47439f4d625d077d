//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless chat-completion capability - each call is independent
///
/// This is the seam between the generator and the remote provider. The
/// concrete implementation is [`super::DeepSeekClient`]; tests substitute a
/// deterministic stub. No conversation state is kept between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one system + user exchange and wait for the full response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
