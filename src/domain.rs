//! Domain entities handed to the generator by the caller
//!
//! Both entities are ephemeral: they exist for the duration of one generation
//! call and carry no identity beyond structural equality.

use serde::{Deserialize, Serialize};

/// A product to write a delivery review for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product category (e.g. electronics, clothing, food)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Product features, in display order; empty means none
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Product {
    /// Create a product with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            features: Vec::new(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the feature list
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// A sourcing project to draft a procurement strategy for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourcingProject {
    /// Project name
    pub name: String,

    /// Contract type
    pub contract_type: String,

    /// Planned contract period
    pub contract_period: String,

    /// Whether this is a renewal of an existing contract
    pub is_renewal: bool,

    /// Sourcing method (e.g. open tender, single source)
    pub sourcing_method: String,

    /// Any other relevant information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}
