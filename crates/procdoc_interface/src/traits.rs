//! Trait definitions for backends and media collaborators.

use crate::{AudioClip, SampledImage};
use async_trait::async_trait;
use procdoc_core::{DocumentKind, GenerateRequest, GenerateResponse};
use procdoc_error::ProcdocResult;
use std::path::Path;
use std::time::Duration;

/// Core trait that all generative backends must implement.
#[async_trait]
pub trait ProcdocDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> ProcdocResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: ProcdocDriver + ?Sized> ProcdocDriver for std::sync::Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> ProcdocResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Speech-to-text service.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a whole audio clip into text.
    async fn transcribe(&self, clip: &AudioClip) -> ProcdocResult<String>;
}

#[async_trait]
impl<T: Transcriber + ?Sized> Transcriber for std::sync::Arc<T> {
    async fn transcribe(&self, clip: &AudioClip) -> ProcdocResult<String> {
        (**self).transcribe(clip).await
    }
}

/// Audio extraction and frame sampling for video files.
///
/// Implementations write into `workdir`, which the caller owns and removes.
#[async_trait]
pub trait MediaToolkit: Send + Sync {
    /// Extract the audio track of `video` as a single clip.
    async fn extract_audio(&self, video: &Path, workdir: &Path) -> ProcdocResult<AudioClip>;

    /// Sample one still image every `interval`, in playback order.
    async fn sample_frames(
        &self,
        video: &Path,
        interval: Duration,
        workdir: &Path,
    ) -> ProcdocResult<Vec<SampledImage>>;
}

/// Pulls text units out of document bytes.
pub trait DocumentReader: Send + Sync {
    /// Text units (pages, paragraphs) in document order. Units may be empty.
    fn text_units(&self, bytes: &[u8], kind: DocumentKind) -> ProcdocResult<Vec<String>>;
}
