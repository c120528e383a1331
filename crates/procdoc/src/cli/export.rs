//! Export command handler.

use super::DocumentFormat;
use super::output::{read_document, write_artifact};
use procdoc::{ExportFormat, ProcdocConfig, export};
use std::error::Error;
use std::path::Path;

/// Render a JSON document without calling any backend.
pub fn run_export(
    config: &ProcdocConfig,
    document: &Path,
    format: DocumentFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let document = read_document(document)?;
    let artifact = export(&document, ExportFormat::from(format), &config.template()?)?;
    let path = write_artifact(&artifact, output)?;
    println!("{}", path.display());
    Ok(())
}
