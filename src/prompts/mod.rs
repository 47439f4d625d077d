//! Prompt template system
//!
//! Embedded `.pmt` (prompt template) files rendered with Handlebars against
//! the domain entities and resolved options.

pub mod embedded;
mod builder;

pub use builder::{PromptBuilder, RenderedPrompt};
