//! Chat and schema command handlers.

use procdoc::ProcdocConfig;
use std::error::Error;

/// Answer a documentation question.
pub async fn run_chat(
    config: &ProcdocConfig,
    message: &str,
    context: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let reply = config.refiner()?.chat(message, context).await?;
    println!("{}", reply);
    Ok(())
}

/// Print the effective section schema as TOML.
pub fn print_schema(config: &ProcdocConfig) -> Result<(), Box<dyn Error>> {
    let schema = config.schema()?;
    print!("{}", schema.to_toml_string()?);
    Ok(())
}
