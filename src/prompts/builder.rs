//! Prompt builder
//!
//! Renders the embedded Handlebars templates against a domain entity and the
//! resolved generator options. Rendering is deterministic: identical inputs
//! produce byte-identical output.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::config::{ConfigError, ResolvedOptions};
use crate::domain::{Product, SourcingProject};

use super::embedded;

/// A rendered system/user prompt pair, ready to send as one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// Fixed role description for the system message
    pub system: String,
    /// Entity-specific instruction for the user message
    pub user: String,
}

/// Context for rendering the review template
#[derive(Debug, Serialize)]
struct ReviewContext<'a> {
    name: &'a str,
    category: Option<&'a str>,
    /// Feature list joined with ", "; None when there are no features so the
    /// template omits the labeled line entirely
    features: Option<String>,
    length: &'static str,
    sentiment: &'static str,
    language: &'a str,
}

impl<'a> ReviewContext<'a> {
    fn new(product: &'a Product, options: &'a ResolvedOptions) -> Self {
        let features = if product.features.is_empty() {
            None
        } else {
            Some(product.features.join(", "))
        };

        Self {
            name: &product.name,
            category: product.category.as_deref(),
            features,
            length: options.length.adjective(),
            sentiment: options.sentiment.adjective(),
            language: &options.language,
        }
    }
}

/// Context for rendering the sourcing strategy template
#[derive(Debug, Serialize)]
struct SourcingContext<'a> {
    name: &'a str,
    contract_type: &'a str,
    contract_period: &'a str,
    renewal: &'static str,
    sourcing_method: &'a str,
    additional_info: Option<&'a str>,
    language: &'a str,
}

impl<'a> SourcingContext<'a> {
    fn new(project: &'a SourcingProject, options: &'a ResolvedOptions) -> Self {
        Self {
            name: &project.name,
            contract_type: &project.contract_type,
            contract_period: &project.contract_period,
            renewal: if project.is_renewal { "yes" } else { "no" },
            sourcing_method: &project.sourcing_method,
            additional_info: project.additional_info.as_deref(),
            language: &options.language,
        }
    }
}

/// Renders prompt pairs from the embedded templates
pub struct PromptBuilder {
    hbs: Handlebars<'static>,
}

impl PromptBuilder {
    /// Create a builder with the embedded templates registered
    pub fn new() -> Result<Self, ConfigError> {
        debug!("PromptBuilder::new: called");
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);

        hbs.register_template_string("review", embedded::REVIEW)
            .map_err(|e| ConfigError::Template(e.to_string()))?;
        hbs.register_template_string("sourcing", embedded::SOURCING)
            .map_err(|e| ConfigError::Template(e.to_string()))?;

        Ok(Self { hbs })
    }

    /// Render the system/user pair for a product delivery review
    pub fn review_prompt(
        &self,
        product: &Product,
        options: &ResolvedOptions,
    ) -> Result<RenderedPrompt, ConfigError> {
        debug!(product = %product.name, "PromptBuilder::review_prompt: called");
        let context = ReviewContext::new(product, options);
        let user = self
            .hbs
            .render("review", &context)
            .map_err(|e| ConfigError::Template(e.to_string()))?;

        Ok(RenderedPrompt {
            system: embedded::REVIEW_SYSTEM.to_string(),
            user,
        })
    }

    /// Render the system/user pair for a sourcing strategy
    pub fn sourcing_prompt(
        &self,
        project: &SourcingProject,
        options: &ResolvedOptions,
    ) -> Result<RenderedPrompt, ConfigError> {
        debug!(project = %project.name, "PromptBuilder::sourcing_prompt: called");
        let context = SourcingContext::new(project, options);
        let user = self
            .hbs
            .render("sourcing", &context)
            .map_err(|e| ConfigError::Template(e.to_string()))?;

        Ok(RenderedPrompt {
            system: embedded::SOURCING_SYSTEM.to_string(),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorOptions, Length, Sentiment};

    fn options() -> ResolvedOptions {
        let mut options = GeneratorOptions::new("sk-test");
        options.language = Some("English".to_string());
        options.resolve().unwrap()
    }

    fn earbuds() -> Product {
        Product::new("Wireless Earbuds")
            .with_category("Electronics")
            .with_features(["ANC", "40h battery"])
    }

    #[test]
    fn test_review_prompt_embeds_all_fields() {
        let builder = PromptBuilder::new().unwrap();
        let mut options = options();
        options.sentiment = Sentiment::Positive;
        options.length = Length::Short;

        let prompt = builder.review_prompt(&earbuds(), &options).unwrap();

        assert!(prompt.user.contains("Wireless Earbuds"));
        assert!(prompt.user.contains("Category: Electronics"));
        assert!(prompt.user.contains("Features: ANC, 40h battery"));
        assert!(prompt.user.contains("brief"));
        assert!(prompt.user.contains("positive"));
        assert!(prompt.user.contains("English"));
        assert!(prompt.system.contains("delivery reviews"));
    }

    #[test]
    fn test_review_prompt_omits_absent_fields() {
        let builder = PromptBuilder::new().unwrap();
        let prompt = builder.review_prompt(&Product::new("Thermos"), &options()).unwrap();

        assert!(prompt.user.contains("Product name: Thermos"));
        assert!(!prompt.user.contains("Category:"));
        assert!(!prompt.user.contains("Features:"));
        // No dangling empty lines where the labels would have been
        assert!(!prompt.user.contains("\n\n\n"));
    }

    #[test]
    fn test_review_prompt_is_deterministic() {
        let builder = PromptBuilder::new().unwrap();
        let options = options();
        let product = earbuds();

        let first = builder.review_prompt(&product, &options).unwrap();
        let second = builder.review_prompt(&product, &options).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sourcing_prompt_embeds_all_fields() {
        let builder = PromptBuilder::new().unwrap();
        let project = SourcingProject {
            name: "Data center hardware refresh".to_string(),
            contract_type: "framework agreement".to_string(),
            contract_period: "24 months".to_string(),
            is_renewal: true,
            sourcing_method: "open tender".to_string(),
            additional_info: Some("three incumbent suppliers".to_string()),
        };

        let prompt = builder.sourcing_prompt(&project, &options()).unwrap();

        assert!(prompt.user.contains("Project name: Data center hardware refresh"));
        assert!(prompt.user.contains("Contract type: framework agreement"));
        assert!(prompt.user.contains("Contract period: 24 months"));
        assert!(prompt.user.contains("Renewal: yes"));
        assert!(prompt.user.contains("Sourcing method: open tender"));
        assert!(prompt.user.contains("Additional information: three incumbent suppliers"));
        assert!(prompt.system.contains("procurement strategy consultant"));
    }

    #[test]
    fn test_sourcing_prompt_omits_additional_info() {
        let builder = PromptBuilder::new().unwrap();
        let project = SourcingProject {
            name: "Office cleaning services".to_string(),
            contract_type: "service contract".to_string(),
            contract_period: "12 months".to_string(),
            is_renewal: false,
            sourcing_method: "request for quotation".to_string(),
            additional_info: None,
        };

        let prompt = builder.sourcing_prompt(&project, &options()).unwrap();

        assert!(prompt.user.contains("Renewal: no"));
        assert!(!prompt.user.contains("Additional information:"));
    }

    #[test]
    fn test_no_html_escaping() {
        let builder = PromptBuilder::new().unwrap();
        let product = Product::new("R&D kit <beta>");
        let prompt = builder.review_prompt(&product, &options()).unwrap();

        assert!(prompt.user.contains("R&D kit <beta>"));
    }
}
