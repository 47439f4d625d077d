//! Embedded prompt templates
//!
//! These are compiled into the library from .pmt files at build time.

use tracing::debug;

/// Product delivery review user-prompt template
pub const REVIEW: &str = include_str!("../../prompts/review.pmt");

/// Sourcing strategy user-prompt template
pub const SOURCING: &str = include_str!("../../prompts/sourcing.pmt");

/// System role for review generation
pub const REVIEW_SYSTEM: &str =
    "You are an assistant that writes authentic, natural-sounding product delivery reviews.";

/// System role for sourcing strategy generation
pub const SOURCING_SYSTEM: &str = "You are a professional procurement strategy consultant who \
     drafts detailed sourcing strategies from basic project information.";

/// Get an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "review" => Some(REVIEW),
        "sourcing" => Some(SOURCING),
        _ => None,
    }
}
