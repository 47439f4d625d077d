//! Generate one product delivery review.
//!
//! Usage: DEEPSEEK_API_KEY=sk-... cargo run --example single_review

use eyre::{Result, WrapErr};
use reviewgen::{GeneratorOptions, Length, Product, ReviewGenerator, Sentiment};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("DEEPSEEK_API_KEY").wrap_err("DEEPSEEK_API_KEY is not set")?;

    let mut options = GeneratorOptions::new(api_key);
    options.sentiment = Some(Sentiment::Positive);
    options.length = Some(Length::Medium);
    options.language = Some("English".to_string());

    let generator = ReviewGenerator::new(options)?;

    let product = Product::new("Wireless Bluetooth Earbuds")
        .with_category("Electronics")
        .with_features(["active noise cancellation", "40h battery life", "IPX7 waterproof"]);

    let review = generator.generate_review(&product).await?;
    println!("Review for {}:\n{review}", product.name);

    Ok(())
}
