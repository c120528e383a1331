//! End-to-end run orchestration.

use crate::{DiagramSynthesizer, SectionSchema, SectionStructurer};
use derive_builder::Builder;
use derive_getters::Getters;
use procdoc_core::{ArtifactKind, Narrative, ProcessDocument};
use procdoc_error::{
    ExtractionError, ExtractionErrorKind, PipelineError, PipelineErrorKind, ProcdocError,
    ProcdocErrorKind, ProcdocResult,
};
use procdoc_extract::{ContentExtractor, StagedArtifact};
use procdoc_interface::ProcdocDriver;
use procdoc_render::{ExportArtifact, ExportFormat, HtmlTemplate, export};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Unit of work a run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PipelineStage {
    /// Classifying and staging the input
    Ingest,
    /// Turning a staged artifact into a narrative
    Extract,
    /// Generating the schema sections
    Structure,
    /// Deriving the flow diagram
    Diagram,
    /// Producing the export artifact
    Render,
}

/// Cancellation and deadline applied to one run.
///
/// # Examples
///
/// ```
/// use procdoc_pipeline::RunContext;
/// use std::time::Duration;
///
/// let ctx = RunContext::new().with_timeout(Duration::from_secs(600));
/// ctx.cancel_token().cancel();
/// assert!(ctx.cancel_token().is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RunContext {
    /// A context that never times out and is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an externally owned cancellation token.
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Abandon the run once `timeout` has elapsed from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Token that cancels this run.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Run `work` as `stage`, abandoning it on cancellation or deadline.
    async fn guard<T, F>(&self, stage: PipelineStage, work: F) -> ProcdocResult<T>
    where
        F: Future<Output = ProcdocResult<T>>,
    {
        let stage_name = stage.to_string();
        if self.token.is_cancelled() {
            return Err(PipelineError::new(PipelineErrorKind::Cancelled { stage: stage_name }).into());
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                warn!(stage = %stage, "Run cancelled");
                Err(PipelineError::new(PipelineErrorKind::Cancelled { stage: stage_name }).into())
            }
            _ = expire(self.deadline) => {
                warn!(stage = %stage, "Run deadline exceeded");
                Err(PipelineError::new(PipelineErrorKind::DeadlineExceeded { stage: stage_name }).into())
            }
            result = work => result,
        }
    }
}

async fn expire(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Orchestration settings.
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
#[builder(setter(into), default)]
pub struct PipelineConfig {
    /// Sections to generate
    schema: SectionSchema,
    /// Markup template for HTML and PDF exports
    template: HtmlTemplate,
    /// Upper bound on in-flight section calls
    max_concurrent_sections: usize,
}

impl PipelineConfig {
    /// Creates a new builder for `PipelineConfig`.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schema: SectionSchema::bundled().expect("Valid bundled section schema"),
            template: HtmlTemplate::default(),
            max_concurrent_sections: 1,
        }
    }
}

/// Composes extraction, structuring, diagram synthesis and rendering.
///
/// Failures before structuring completes abort the run. Diagram failures
/// never do. Uploaded bytes are staged in a temporary file that is removed
/// when the run ends, whatever the outcome.
pub struct Pipeline<D: ProcdocDriver + Clone> {
    extractor: ContentExtractor<D>,
    structurer: SectionStructurer<D>,
    diagrams: DiagramSynthesizer<D>,
    config: PipelineConfig,
}

impl<D: ProcdocDriver + Clone> Pipeline<D> {
    /// Assemble a pipeline around an extractor and a generative backend.
    pub fn new(driver: D, extractor: ContentExtractor<D>, config: PipelineConfig) -> Self {
        Self {
            extractor,
            structurer: SectionStructurer::new(driver.clone())
                .with_max_concurrent(config.max_concurrent_sections),
            diagrams: DiagramSynthesizer::new(driver),
            config,
        }
    }

    /// Settings in effect.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build a document from a plain-text process description.
    ///
    /// # Errors
    ///
    /// Returns a structuring error if any section call fails, or a pipeline
    /// error on cancellation or deadline.
    #[instrument(skip(self, text, ctx), fields(chars = text.len()))]
    pub async fn generate_from_text(
        &self,
        text: &str,
        ctx: &RunContext,
    ) -> ProcdocResult<ProcessDocument> {
        info!(stage = %PipelineStage::Ingest, "Text input received");
        self.build_document(Narrative::new(text), ctx).await
    }

    /// Build a document from an uploaded file.
    ///
    /// The file name decides the extraction strategy. Classification happens
    /// before anything touches the disk.
    ///
    /// # Errors
    ///
    /// Returns an extraction error for unsupported or unreadable input, a
    /// structuring error if any section call fails, or a pipeline error on
    /// cancellation or deadline.
    #[instrument(skip(self, bytes, ctx), fields(size = bytes.len()))]
    pub async fn generate_from_upload(
        &self,
        bytes: &[u8],
        filename: &str,
        ctx: &RunContext,
    ) -> ProcdocResult<ProcessDocument> {
        let kind = ArtifactKind::from_filename(filename)?;

        let staged = ctx
            .guard(PipelineStage::Ingest, stage_upload(bytes, filename))
            .await?;
        info!(
            stage = %PipelineStage::Ingest,
            extension = %kind.extension(),
            video = kind.is_video(),
            "Upload staged"
        );

        let artifact = StagedArtifact::new(staged.path(), kind);
        let narrative = ctx
            .guard(PipelineStage::Extract, self.extractor.extract(&artifact))
            .await?;
        info!(stage = %PipelineStage::Extract, chars = narrative.as_str().len(), "Narrative extracted");

        // staged file is removed when `staged` drops, on every path
        self.build_document(narrative, ctx).await
    }

    /// Render a document in the requested format.
    ///
    /// # Errors
    ///
    /// Returns a render error if packing fails.
    #[instrument(skip(self, document), fields(process = %document.process_name()))]
    pub fn render(
        &self,
        document: &ProcessDocument,
        format: ExportFormat,
    ) -> ProcdocResult<ExportArtifact> {
        let artifact = export(document, format, &self.config.template)?;
        info!(stage = %PipelineStage::Render, filename = %artifact.filename(), "Document rendered");
        Ok(artifact)
    }

    async fn build_document(
        &self,
        narrative: Narrative,
        ctx: &RunContext,
    ) -> ProcdocResult<ProcessDocument> {
        if narrative.is_blank() {
            warn!("Narrative is blank, sections will be generated without source material");
        }

        let schema = &self.config.schema;
        let sections = ctx
            .guard(
                PipelineStage::Structure,
                self.structurer.structure(&narrative, schema),
            )
            .await?;
        info!(stage = %PipelineStage::Structure, count = sections.len(), "Sections structured");

        let diagram = match schema.steps_section(&sections) {
            Some(steps) => {
                let attempt = ctx
                    .guard(PipelineStage::Diagram, async {
                        Ok(self.diagrams.synthesize(steps.content()).await)
                    })
                    .await;
                // a late diagram is dropped; the sections still stand
                match attempt {
                    Err(e) if is_deadline(&e) => {
                        warn!(stage = %PipelineStage::Diagram, "Diagram skipped at deadline");
                        None
                    }
                    other => other?,
                }
            }
            None => None,
        };
        info!(stage = %PipelineStage::Diagram, has_diagram = diagram.is_some(), "Diagram attempted");

        Ok(ProcessDocument::new(sections, diagram))
    }
}

fn is_deadline(err: &ProcdocError) -> bool {
    matches!(
        err.kind(),
        ProcdocErrorKind::Pipeline(e) if matches!(e.kind, PipelineErrorKind::DeadlineExceeded { .. })
    )
}

async fn stage_upload(bytes: &[u8], filename: &str) -> ProcdocResult<tempfile::NamedTempFile> {
    let staging_error = |message: String| {
        ExtractionError::new(ExtractionErrorKind::Staging(format!(
            "Failed to stage {}: {}",
            filename, message
        )))
    };

    let bytes = bytes.to_vec();
    let suffix = format!("_{}", sanitize_filename(filename));
    let staged = tokio::task::spawn_blocking(move || -> std::io::Result<_> {
        let mut file = tempfile::Builder::new()
            .prefix("procdoc-upload-")
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(file)
    })
    .await
    .map_err(|e| staging_error(e.to_string()))?
    .map_err(|e| staging_error(e.to_string()))?;
    Ok(staged)
}

/// Keep only the final path component so a name cannot escape the temp dir.
fn sanitize_filename(filename: &str) -> String {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .to_string()
}
