//! Document generation command handler.

use super::output::{write_artifact, write_json};
use super::{OutputFormat, SourceArgs};
use procdoc::{ArtifactKind, FfmpegToolkit, ProcdocConfig, RunContext};
use std::error::Error;
use std::path::Path;
use tracing::{info, warn};

/// Generate a document from a text file or an uploaded artifact.
pub async fn run_generate(
    config: &ProcdocConfig,
    source: SourceArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let pipeline = config.pipeline()?;
    let ctx = config.run_context();
    cancel_on_ctrl_c(&ctx);

    let document = match (source.text, source.input) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            pipeline.generate_from_text(&text, &ctx).await?
        }
        (None, Some(path)) => {
            let bytes = std::fs::read(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| format!("Input path has no file name: {}", path.display()))?;
            if ArtifactKind::from_filename(filename)?.is_video() {
                FfmpegToolkit::new(config.video().ffmpeg_path().clone())
                    .probe()
                    .await?;
            }
            pipeline.generate_from_upload(&bytes, filename, &ctx).await?
        }
        (None, None) => return Err("one of --text or --input is required".into()),
    };
    info!(
        process = %document.process_name(),
        sections = document.sections().len(),
        has_diagram = document.diagram().is_some(),
        "Document generated"
    );

    match format.export_format() {
        Some(export_format) => {
            let artifact = pipeline.render(&document, export_format)?;
            let path = write_artifact(&artifact, output)?;
            println!("{}", path.display());
        }
        None => write_json(&document, output)?,
    }
    Ok(())
}

fn cancel_on_ctrl_c(ctx: &RunContext) {
    let token = ctx.cancel_token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling run");
            token.cancel();
        }
    });
}
