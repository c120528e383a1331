//! Stub collaborators for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use procdoc_core::{DocumentKind, GenerateRequest, GenerateResponse, Input};
use procdoc_error::{ModelsError, ModelsErrorKind, ProcdocResult};
use procdoc_extract::{ContentExtractor, VideoConfig, VideoSynthesizer};
use procdoc_interface::{
    AudioClip, DocumentReader, MediaToolkit, ProcdocDriver, SampledImage, Transcriber,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SECTION_MARKER: &str = "Please provide the content for the '";
pub const DIAGRAM_MARKER: &str = "Convert the following process steps into a Mermaid";

/// Driver that answers section prompts with `<p>{name} content</p>`, diagram
/// prompts with a fenced flowchart and anything else with a short narrative.
pub struct SchemaDriver {
    failing_section: Option<String>,
    diagram_fails: bool,
    delay: Duration,
    diagram_delay: Duration,
    staggered: bool,
    prompts: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl SchemaDriver {
    pub fn new() -> Self {
        Self {
            failing_section: None,
            diagram_fails: false,
            delay: Duration::ZERO,
            diagram_delay: Duration::ZERO,
            staggered: false,
            prompts: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_section(mut self, name: &str) -> Self {
        self.failing_section = Some(name.to_string());
        self
    }

    pub fn failing_diagram(mut self) -> Self {
        self.diagram_fails = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay only the diagram call.
    pub fn with_diagram_delay(mut self, delay: Duration) -> Self {
        self.diagram_delay = delay;
        self
    }

    /// Earlier calls sleep longer, so calls finish in reverse issue order.
    pub fn staggered(mut self) -> Self {
        self.staggered = true;
        self
    }

    /// Section names in the order their calls finished.
    pub fn completed_sections(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn section_calls(&self) -> Vec<String> {
        self.prompts()
            .iter()
            .filter_map(|prompt| section_name(prompt))
            .collect()
    }
}

pub fn section_name(prompt: &str) -> Option<String> {
    let start = prompt.find(SECTION_MARKER)? + SECTION_MARKER.len();
    let end = prompt[start..].find("' section")?;
    Some(prompt[start..start + end].to_string())
}

fn api_failure(message: &str) -> procdoc_error::ProcdocError {
    ModelsError::new(ModelsErrorKind::ApiError {
        status: 503,
        message: message.to_string(),
    })
    .into()
}

#[async_trait]
impl ProcdocDriver for SchemaDriver {
    async fn generate(&self, req: &GenerateRequest) -> ProcdocResult<GenerateResponse> {
        let content = req.messages()[0].content();
        if content.iter().any(|input| matches!(input, Input::Image { .. })) {
            return Ok(GenerateResponse::from_text("Invoice queue screen"));
        }

        let prompt = content
            .iter()
            .filter_map(|input| match input {
                Input::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<String>();
        let issued = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.clone());
            prompts.len() as u64
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.staggered {
            tokio::time::sleep(Duration::from_millis(10 * 20u64.saturating_sub(issued))).await;
        }

        if let Some(name) = section_name(&prompt) {
            self.completed.lock().unwrap().push(name.clone());
            if self.failing_section.as_deref() == Some(name.as_str()) {
                return Err(api_failure("section backend unavailable"));
            }
            return Ok(GenerateResponse::from_text(format!("<p>{name} content</p>")));
        }

        if prompt.contains(DIAGRAM_MARKER) {
            if !self.diagram_delay.is_zero() {
                tokio::time::sleep(self.diagram_delay).await;
            }
            if self.diagram_fails {
                return Err(api_failure("diagram backend unavailable"));
            }
            return Ok(GenerateResponse::from_text(
                "```mermaid\ngraph TD\n  A[Open queue] --> B{Under limit?}\n  B -->|Yes| C[Approve]\n```",
            ));
        }

        Ok(GenerateResponse::from_text(
            "1. Open the invoice queue\n2. Approve invoices under five hundred",
        ))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-schema"
    }
}

pub struct StubTranscriber;

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> ProcdocResult<String> {
        Ok("We open the invoice queue and approve small invoices.".into())
    }
}

/// Toolkit that records the video path it was handed and yields one frame.
#[derive(Default)]
pub struct RecordingToolkit {
    pub seen: Mutex<Option<PathBuf>>,
}

#[async_trait]
impl MediaToolkit for RecordingToolkit {
    async fn extract_audio(&self, video: &Path, _workdir: &Path) -> ProcdocResult<AudioClip> {
        assert!(video.exists(), "upload is staged before extraction");
        *self.seen.lock().unwrap() = Some(video.to_path_buf());
        Ok(AudioClip::new(vec![0; 16], "audio.mp3", "audio/mpeg"))
    }

    async fn sample_frames(
        &self,
        _video: &Path,
        _interval: Duration,
        _workdir: &Path,
    ) -> ProcdocResult<Vec<SampledImage>> {
        Ok(vec![SampledImage::new(1, vec![1], "image/jpeg")])
    }
}

/// Reader that echoes fixed units.
pub struct StubReader {
    pub units: Vec<String>,
}

impl DocumentReader for StubReader {
    fn text_units(&self, _bytes: &[u8], _kind: DocumentKind) -> ProcdocResult<Vec<String>> {
        Ok(self.units.clone())
    }
}

pub fn extractor(
    driver: Arc<SchemaDriver>,
    toolkit: Arc<RecordingToolkit>,
) -> ContentExtractor<Arc<SchemaDriver>> {
    let video = VideoSynthesizer::new(
        driver,
        Arc::new(StubTranscriber),
        toolkit,
        VideoConfig::default(),
    );
    ContentExtractor::new(
        Arc::new(StubReader {
            units: vec!["Open the invoice queue.".into(), "Approve invoices.".into()],
        }),
        video,
    )
}
