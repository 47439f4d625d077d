//! reviewgen - product review and sourcing strategy generation
//!
//! A small library that assembles natural-language prompts from structured
//! product or sourcing-project data and forwards them to DeepSeek's
//! OpenAI-compatible chat-completion API, returning the generated text.
//!
//! # Core concepts
//!
//! - **One exchange per call**: every generation is a single system + user
//!   message pair; no conversation state is kept between calls
//! - **Fail fast**: options are validated at construction, and batch
//!   operations abort on the first error without partial results
//! - **Injectable capability**: the remote endpoint sits behind the
//!   [`llm::LlmClient`] trait so everything above it tests offline
//!
//! # Modules
//!
//! - [`config`] - options, defaults, and resolution
//! - [`domain`] - the `Product` and `SourcingProject` entities
//! - [`prompts`] - embedded Handlebars templates and the prompt builder
//! - [`llm`] - completion client trait and the DeepSeek implementation
//! - [`generator`] - the `ReviewGenerator` public surface
//!
//! # Example
//!
//! ```no_run
//! use reviewgen::{GeneratorOptions, Product, ReviewGenerator};
//!
//! # async fn run() -> Result<(), reviewgen::Error> {
//! let generator = ReviewGenerator::new(GeneratorOptions::new("sk-..."))?;
//!
//! let product = Product::new("Wireless Earbuds")
//!     .with_category("Electronics")
//!     .with_features(["ANC", "40h battery"]);
//!
//! let review = generator.generate_review(&product).await?;
//! println!("{review}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompts;

// Re-export commonly used types
pub use config::{ConfigError, GeneratorOptions, Length, ResolvedOptions, Sentiment};
pub use domain::{Product, SourcingProject};
pub use error::Error;
pub use generator::ReviewGenerator;
pub use llm::{CompletionRequest, CompletionResponse, DeepSeekClient, LlmClient, LlmError};
pub use prompts::{PromptBuilder, RenderedPrompt};
