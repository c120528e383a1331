//! Stub collaborators for extraction tests.

#![allow(dead_code)]

use async_trait::async_trait;
use procdoc_core::{DocumentKind, GenerateRequest, GenerateResponse, Input, MediaSource};
use procdoc_error::{
    ExtractionError, ExtractionErrorKind, ModelsError, ModelsErrorKind, ProcdocResult,
};
use procdoc_interface::{
    AudioClip, DocumentReader, MediaToolkit, ProcdocDriver, SampledImage, Transcriber,
};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Driver that answers image requests with `screen <id>` (id = first image byte)
/// and text requests with a fixed narrative, recording every text prompt.
pub struct FrameAwareDriver {
    failing_frames: Vec<u8>,
    text_prompts: Mutex<Vec<String>>,
    fusion_fails: bool,
}

impl FrameAwareDriver {
    pub fn new(failing_frames: Vec<u8>) -> Self {
        Self {
            failing_frames,
            text_prompts: Mutex::new(Vec::new()),
            fusion_fails: false,
        }
    }

    pub fn with_failing_fusion(mut self) -> Self {
        self.fusion_fails = true;
        self
    }

    pub fn text_prompts(&self) -> Vec<String> {
        self.text_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcdocDriver for FrameAwareDriver {
    async fn generate(&self, req: &GenerateRequest) -> ProcdocResult<GenerateResponse> {
        let content = req.messages()[0].content();
        let image_id = content.iter().find_map(|input| match input {
            Input::Image {
                source: MediaSource::Binary(bytes),
                ..
            } => bytes.first().copied(),
            _ => None,
        });

        match image_id {
            Some(id) => {
                // later frames answer first, so completion order differs from sampling order
                tokio::time::sleep(Duration::from_millis(u64::from(10 - id.min(10)))).await;
                if self.failing_frames.contains(&id) {
                    Err(ModelsError::new(ModelsErrorKind::ApiError {
                        status: 500,
                        message: format!("frame {id} rejected"),
                    })
                    .into())
                } else {
                    Ok(GenerateResponse::from_text(format!("screen {id}")))
                }
            }
            None => {
                let prompt = content
                    .iter()
                    .filter_map(|input| match input {
                        Input::Text(text) => Some(text.as_str()),
                        _ => None,
                    })
                    .collect::<String>();
                self.text_prompts.lock().unwrap().push(prompt);
                if self.fusion_fails {
                    Err(ModelsError::new(ModelsErrorKind::Http("connection reset".into())).into())
                } else {
                    Ok(GenerateResponse::from_text(
                        "  1. Open the invoice queue\n2. Approve the invoice  ",
                    ))
                }
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-vision"
    }
}

pub struct StubTranscriber {
    pub fail: bool,
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> ProcdocResult<String> {
        if self.fail {
            Err(ModelsError::new(ModelsErrorKind::ApiError {
                status: 413,
                message: "file too large".into(),
            })
            .into())
        } else {
            Ok("We open the invoice queue and approve anything under five hundred.".into())
        }
    }
}

/// Toolkit that fabricates `frames` one-byte images with ids 1..=frames.
pub struct StubToolkit {
    pub frames: u8,
}

#[async_trait]
impl MediaToolkit for StubToolkit {
    async fn extract_audio(&self, _video: &Path, workdir: &Path) -> ProcdocResult<AudioClip> {
        assert!(workdir.is_dir(), "scratch directory exists during extraction");
        Ok(AudioClip::new(vec![0; 16], "audio.mp3", "audio/mpeg"))
    }

    async fn sample_frames(
        &self,
        _video: &Path,
        interval: Duration,
        _workdir: &Path,
    ) -> ProcdocResult<Vec<SampledImage>> {
        assert_eq!(interval, Duration::from_secs(3));
        Ok((1..=self.frames)
            .map(|id| SampledImage::new(usize::from(id), vec![id], "image/jpeg"))
            .collect())
    }
}

/// Reader that returns fixed units, or fails.
pub struct StubReader {
    pub units: Vec<String>,
    pub fail: bool,
}

impl DocumentReader for StubReader {
    fn text_units(&self, _bytes: &[u8], kind: DocumentKind) -> ProcdocResult<Vec<String>> {
        if self.fail {
            return Err(ExtractionError::new(ExtractionErrorKind::DocumentParse {
                format: kind.to_string(),
                message: "encrypted".into(),
            })
            .into());
        }
        Ok(self.units.clone())
    }
}
