//! Trait definitions for procdoc.
//!
//! The pipeline talks to the outside world only through these traits: a
//! generative driver, a transcription service, a media toolkit for audio
//! extraction and frame sampling, and a document text reader.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod prompting;
mod traits;
mod types;

pub use prompting::{generate_text, image_request, text_request};
pub use traits::{DocumentReader, MediaToolkit, ProcdocDriver, Transcriber};
pub use types::{AudioClip, SampledImage};
