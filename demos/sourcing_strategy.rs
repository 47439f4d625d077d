//! Generate a sourcing strategy for one project.
//!
//! Usage: DEEPSEEK_API_KEY=sk-... cargo run --example sourcing_strategy

use eyre::{Result, WrapErr};
use reviewgen::{GeneratorOptions, ReviewGenerator, SourcingProject};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("DEEPSEEK_API_KEY").wrap_err("DEEPSEEK_API_KEY is not set")?;

    let mut options = GeneratorOptions::new(api_key);
    options.language = Some("English".to_string());
    let generator = ReviewGenerator::new(options)?;

    let project = SourcingProject {
        name: "Data center hardware refresh".to_string(),
        contract_type: "framework agreement".to_string(),
        contract_period: "24 months".to_string(),
        is_renewal: false,
        sourcing_method: "open tender".to_string(),
        additional_info: Some("three incumbent suppliers, budget approved".to_string()),
    };

    let strategy = generator.generate_sourcing_strategy(&project).await?;
    println!("Sourcing strategy for {}:\n{strategy}", project.name);

    Ok(())
}
