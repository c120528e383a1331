//! Routing of staged artifacts to the right extraction strategy.

use crate::VideoSynthesizer;
use crate::document::join_text_units;
use derive_getters::Getters;
use procdoc_core::{ArtifactKind, DocumentKind, Narrative};
use procdoc_error::{ExtractionError, ExtractionErrorKind, ProcdocResult};
use procdoc_interface::{DocumentReader, ProcdocDriver};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// An uploaded artifact already written to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StagedArtifact {
    /// Location of the staged bytes
    path: PathBuf,
    /// Classification from the original file name
    kind: ArtifactKind,
}

impl StagedArtifact {
    /// Describe a staged artifact.
    pub fn new(path: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Resolves staged artifacts to narratives.
pub struct ContentExtractor<D: ProcdocDriver> {
    reader: Arc<dyn DocumentReader>,
    video: VideoSynthesizer<D>,
}

impl<D: ProcdocDriver> ContentExtractor<D> {
    /// Create an extractor from a document reader and a video synthesizer.
    pub fn new(reader: Arc<dyn DocumentReader>, video: VideoSynthesizer<D>) -> Self {
        Self { reader, video }
    }

    /// Extract a narrative from the artifact.
    ///
    /// # Errors
    ///
    /// Document path: `Staging` if the file cannot be read, `DocumentParse`
    /// if the reader fails. Video path: see [`VideoSynthesizer::synthesize`].
    #[instrument(skip(self), fields(path = %artifact.path().display(), kind = ?artifact.kind()))]
    pub async fn extract(&self, artifact: &StagedArtifact) -> ProcdocResult<Narrative> {
        let narrative = match artifact.kind() {
            ArtifactKind::Document(kind) => self.extract_document(artifact.path(), *kind).await?,
            ArtifactKind::Video(_) => self.video.synthesize(artifact.path()).await?,
        };
        info!(chars = narrative.as_str().len(), "Extraction complete");
        Ok(narrative)
    }

    async fn extract_document(&self, path: &Path, kind: DocumentKind) -> ProcdocResult<Narrative> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::Staging(format!(
                "Failed to read staged document {}: {}",
                path.display(),
                e
            )))
        })?;

        let reader = Arc::clone(&self.reader);
        let units = tokio::task::spawn_blocking(move || reader.text_units(&bytes, kind))
            .await
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::DocumentParse {
                    format: kind.to_string(),
                    message: format!("Reader task failed: {}", e),
                })
            })??;

        Ok(Narrative::new(join_text_units(units)))
    }
}
