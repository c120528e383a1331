//! Reading and writing documents on disk.

use procdoc::{ExportArtifact, ProcessDocument};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a rendered artifact, defaulting to its suggested file name.
pub fn write_artifact(
    artifact: &ExportArtifact,
    output: Option<&Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(artifact.filename()));
    std::fs::write(&path, artifact.body().as_bytes())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    info!(path = %path.display(), media_type = %artifact.media_type(), "Document written");
    Ok(path)
}

/// Write a document as JSON to `output`, or stdout.
pub fn write_json(
    document: &ProcessDocument,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(document)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            info!(path = %path.display(), "Document written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

/// Read a JSON document produced by `generate --format json`.
pub fn read_document(path: &Path) -> Result<ProcessDocument, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let document = serde_json::from_str(&json)
        .map_err(|e| format!("Invalid document {}: {}", path.display(), e))?;
    Ok(document)
}
