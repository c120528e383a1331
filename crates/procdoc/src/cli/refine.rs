//! Section refinement command handler.

use super::output::{read_document, write_json};
use procdoc::ProcdocConfig;
use std::error::Error;
use std::path::Path;

/// Rewrite one section of a JSON document and write the updated document.
pub async fn run_refine(
    config: &ProcdocConfig,
    document: &Path,
    section: &str,
    feedback: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let document = read_document(document)?;
    let current = document.section(section).ok_or_else(|| {
        let known: Vec<&str> = document.sections().iter().map(|s| s.name().as_str()).collect();
        format!("No section named '{}'. Sections: {}", section, known.join(", "))
    })?;

    let revised = config.refiner()?.refine(current, feedback).await?;
    let updated = document
        .with_section(revised)
        .ok_or_else(|| format!("No section named '{}'", section))?;
    write_json(&updated, output)
}
