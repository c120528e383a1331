//! Content extraction for procdoc.
//!
//! Resolves a staged source artifact into a single plain-text
//! [`Narrative`](procdoc_core::Narrative):
//!
//! - **Documents** (PDF, DOCX): text units are read in document order and
//!   joined with blank lines.
//! - **Videos** (MP4, MOV, AVI): the audio track is transcribed, frames are
//!   sampled and described with the transcript as context, and one fusion call
//!   merges both into a chronological step-by-step narrative.
//!
//! Scratch media lives in temporary directories that are removed when the
//! extraction finishes, whatever the outcome.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod extractor;
mod media;
mod prompts;
mod video;

pub use document::{NativeDocumentReader, join_text_units};
pub use extractor::{ContentExtractor, StagedArtifact};
pub use media::FfmpegToolkit;
pub use prompts::{VISUAL_ANALYSIS_UNAVAILABLE, frame_description_prompt, fusion_prompt};
pub use video::{VideoConfig, VideoConfigBuilder, VideoSynthesizer, collect_frames};
