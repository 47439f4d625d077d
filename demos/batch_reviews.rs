//! Generate reviews for a list of products, sequentially.
//!
//! Usage: DEEPSEEK_API_KEY=sk-... cargo run --example batch_reviews

use eyre::{Result, WrapErr};
use reviewgen::{GeneratorOptions, Product, ReviewGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("DEEPSEEK_API_KEY").wrap_err("DEEPSEEK_API_KEY is not set")?;
    let generator = ReviewGenerator::new(GeneratorOptions::new(api_key))?;

    let products = vec![
        Product::new("Wireless Bluetooth Earbuds")
            .with_category("Electronics")
            .with_features(["active noise cancellation", "40h battery life", "IPX7 waterproof"]),
        Product::new("Thermos Flask")
            .with_category("Housewares")
            .with_features(["stainless steel", "keeps drinks hot for 24h", "500ml capacity"]),
    ];

    let reviews = generator.generate_batch_reviews(&products).await?;

    for (product, review) in products.iter().zip(&reviews) {
        println!("=== {} ===\n{review}\n", product.name);
    }

    Ok(())
}
