//! Completion request/response types
//!
//! These model the OpenAI Chat Completions wire shape that DeepSeek exposes,
//! but stay provider-agnostic at the struct level.

use serde::{Deserialize, Serialize};

/// A completion request - everything needed for one chat call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt, sent as the first message of the exchange
    pub system_prompt: String,

    /// Conversation messages; for this library always a single user message
    pub messages: Vec<Message>,

    /// Sampling temperature in 0.0..=1.0
    pub temperature: f64,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A completion response
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Text of the first choice; None when the provider returned no content
    pub content: Option<String>,

    /// Token accounting reported by the provider
    pub usage: TokenUsage,
}

/// Token usage for a single completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
