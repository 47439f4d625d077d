//! Review generator
//!
//! Ties the resolved options, the prompt builder, and a completion client
//! together into the public generation operations. One generator instance
//! holds no per-call state and may be reused for any number of sequential
//! calls.

use std::sync::Arc;

use tracing::debug;

use crate::config::{GeneratorOptions, ResolvedOptions};
use crate::domain::{Product, SourcingProject};
use crate::error::Error;
use crate::llm::{CompletionRequest, DeepSeekClient, LlmClient, Message};
use crate::prompts::{PromptBuilder, RenderedPrompt};

/// Generates product delivery reviews and sourcing strategies
pub struct ReviewGenerator {
    options: ResolvedOptions,
    prompts: PromptBuilder,
    client: Arc<dyn LlmClient>,
}

impl ReviewGenerator {
    /// Create a generator backed by the DeepSeek client
    ///
    /// Options are validated here, before any remote capability is touched;
    /// an empty credential or out-of-range temperature fails construction.
    pub fn new(options: GeneratorOptions) -> Result<Self, Error> {
        debug!("ReviewGenerator::new: called");
        let options = options.resolve()?;
        let client = Arc::new(DeepSeekClient::from_options(&options)?);
        Self::assemble(options, client)
    }

    /// Create a generator with an injected completion capability
    ///
    /// Used by tests to substitute a deterministic stub for the remote
    /// endpoint; validation is identical to [`ReviewGenerator::new`].
    pub fn with_client(options: GeneratorOptions, client: Arc<dyn LlmClient>) -> Result<Self, Error> {
        debug!("ReviewGenerator::with_client: called");
        let options = options.resolve()?;
        Self::assemble(options, client)
    }

    fn assemble(options: ResolvedOptions, client: Arc<dyn LlmClient>) -> Result<Self, Error> {
        let prompts = PromptBuilder::new()?;
        Ok(Self {
            options,
            prompts,
            client,
        })
    }

    /// Generate a delivery review for one product
    pub async fn generate_review(&self, product: &Product) -> Result<String, Error> {
        debug!(product = %product.name, "generate_review: called");
        let prompt = self.prompts.review_prompt(product, &self.options)?;
        self.generate(prompt).await
    }

    /// Generate reviews for a list of products, strictly in input order
    ///
    /// Items are processed sequentially: the next remote call is not issued
    /// until the previous one completed. The first failure aborts the batch
    /// and discards any results accumulated so far.
    pub async fn generate_batch_reviews(&self, products: &[Product]) -> Result<Vec<String>, Error> {
        debug!(count = products.len(), "generate_batch_reviews: called");
        let mut reviews = Vec::with_capacity(products.len());
        for product in products {
            reviews.push(self.generate_review(product).await?);
        }
        Ok(reviews)
    }

    /// Generate a sourcing strategy for one project
    pub async fn generate_sourcing_strategy(&self, project: &SourcingProject) -> Result<String, Error> {
        debug!(project = %project.name, "generate_sourcing_strategy: called");
        let prompt = self.prompts.sourcing_prompt(project, &self.options)?;
        self.generate(prompt).await
    }

    /// Generate sourcing strategies for a list of projects, in input order
    ///
    /// Same sequential, fail-fast contract as [`Self::generate_batch_reviews`].
    pub async fn generate_batch_sourcing_strategies(
        &self,
        projects: &[SourcingProject],
    ) -> Result<Vec<String>, Error> {
        debug!(count = projects.len(), "generate_batch_sourcing_strategies: called");
        let mut strategies = Vec::with_capacity(projects.len());
        for project in projects {
            strategies.push(self.generate_sourcing_strategy(project).await?);
        }
        Ok(strategies)
    }

    /// Send one rendered prompt pair as a single system + user exchange
    async fn generate(&self, prompt: RenderedPrompt) -> Result<String, Error> {
        let request = CompletionRequest {
            system_prompt: prompt.system,
            messages: vec![Message::user(prompt.user)],
            temperature: self.options.temperature,
        };

        let response = self.client.complete(request).await.map_err(Error::Llm)?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "generate: completion received"
        );

        // A response without content counts as an empty generation, not an error
        Ok(response.content.unwrap_or_default())
    }
}
