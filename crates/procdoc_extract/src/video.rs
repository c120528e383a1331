//! Video synthesis: transcription, frame description and fusion.

use crate::prompts::{frame_description_prompt, fusion_prompt};
use derive_builder::Builder;
use derive_getters::Getters;
use futures::stream::{self, StreamExt};
use procdoc_core::{Frame, Narrative};
use procdoc_error::{ExtractionError, ExtractionErrorKind, ProcdocResult};
use procdoc_interface::{
    MediaToolkit, ProcdocDriver, SampledImage, Transcriber, generate_text, image_request,
    text_request,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Tuning for the video path.
///
/// # Examples
///
/// ```
/// use procdoc_extract::VideoConfig;
/// use std::time::Duration;
///
/// let config = VideoConfig::builder()
///     .frame_interval(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.max_concurrent_frames(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into), default)]
pub struct VideoConfig {
    /// Time between sampled frames
    frame_interval: Duration,
    /// Upper bound on in-flight frame description calls
    max_concurrent_frames: usize,
}

impl VideoConfig {
    /// Creates a new builder for `VideoConfig`.
    pub fn builder() -> VideoConfigBuilder {
        VideoConfigBuilder::default()
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_secs(3),
            max_concurrent_frames: 4,
        }
    }
}

/// Turns a video file into a narrative.
///
/// Sub-stages run strictly in order: transcription, then frame sampling and
/// description, then fusion. Transcription, sampling and fusion failures are
/// fatal; individual frame description failures are not.
pub struct VideoSynthesizer<D: ProcdocDriver> {
    driver: D,
    transcriber: Arc<dyn Transcriber>,
    toolkit: Arc<dyn MediaToolkit>,
    config: VideoConfig,
}

impl<D: ProcdocDriver> VideoSynthesizer<D> {
    /// Create a synthesizer from its collaborators.
    pub fn new(
        driver: D,
        transcriber: Arc<dyn Transcriber>,
        toolkit: Arc<dyn MediaToolkit>,
        config: VideoConfig,
    ) -> Self {
        Self {
            driver,
            transcriber,
            toolkit,
            config,
        }
    }

    /// Produce a narrative from the video at `video`.
    ///
    /// # Errors
    ///
    /// - `MediaTool` if audio extraction or frame sampling fails
    /// - `Transcription` if the transcription service fails
    /// - `NoFramesExtracted` if sampling yields no frames
    /// - `Fusion` if the final combining call fails
    #[instrument(skip(self), fields(video = %video.display()))]
    pub async fn synthesize(&self, video: &Path) -> ProcdocResult<Narrative> {
        let workdir = tempfile::Builder::new()
            .prefix("procdoc-media-")
            .tempdir()
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::Staging(format!(
                    "Failed to create media scratch directory: {}",
                    e
                )))
            })?;

        let clip = self.toolkit.extract_audio(video, workdir.path()).await?;
        let transcript = self.transcriber.transcribe(&clip).await.map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::Transcription(e.to_string()))
        })?;
        info!(chars = transcript.len(), "Transcription complete");

        let images = self
            .toolkit
            .sample_frames(video, self.config.frame_interval, workdir.path())
            .await?;
        if images.is_empty() {
            return Err(ExtractionError::new(ExtractionErrorKind::NoFramesExtracted).into());
        }
        let sampled = images.len();

        let results = stream::iter(images.iter())
            .map(|image| {
                let transcript = transcript.as_str();
                async move { (*image.index(), self.describe_frame(image, transcript).await) }
            })
            .buffer_unordered(self.config.max_concurrent_frames.max(1))
            .collect::<Vec<_>>()
            .await;
        let frames = collect_frames(results);
        info!(sampled, described = frames.len(), "Frame description complete");

        let prompt = fusion_prompt(&transcript, &frames);
        let narrative = generate_text(&self.driver, &text_request(prompt))
            .await
            .map_err(|e| ExtractionError::new(ExtractionErrorKind::Fusion(e.to_string())))?;

        // workdir is dropped here, removing the audio file and frames
        Ok(Narrative::new(narrative.trim()))
    }

    async fn describe_frame(&self, image: &SampledImage, transcript: &str) -> ProcdocResult<String> {
        let offset = self.config.frame_interval.as_secs_f64() * (*image.index() as f64 - 1.0);
        let prompt = frame_description_prompt(transcript, *image.index(), offset);
        let description = generate_text(&self.driver, &image_request(prompt, image)).await?;
        debug!(index = image.index(), chars = description.len(), "Frame described");
        Ok(description)
    }
}

/// Keep the frames whose description succeeded, in sampling order.
///
/// Failed and blank descriptions are logged and dropped.
///
/// # Examples
///
/// ```
/// use procdoc_error::{ExtractionError, ExtractionErrorKind};
/// use procdoc_extract::collect_frames;
///
/// let frames = collect_frames(vec![
///     (2, Ok("Second".to_string())),
///     (3, Err(ExtractionError::new(ExtractionErrorKind::NoFramesExtracted).into())),
///     (1, Ok("First".to_string())),
/// ]);
///
/// let indices: Vec<_> = frames.iter().map(|f| *f.index()).collect();
/// assert_eq!(indices, vec![1, 2]);
/// ```
pub fn collect_frames(results: Vec<(usize, ProcdocResult<String>)>) -> Vec<Frame> {
    let mut frames: Vec<Frame> = results
        .into_iter()
        .filter_map(|(index, result)| match result {
            Ok(description) if !description.trim().is_empty() => {
                Some(Frame::new(index, description.trim()))
            }
            Ok(_) => {
                warn!(index, "Frame description was empty, dropping frame");
                None
            }
            Err(e) => {
                warn!(index, error = %e, "Frame description failed, dropping frame");
                None
            }
        })
        .collect();
    frames.sort_by_key(|frame| *frame.index());
    frames
}
