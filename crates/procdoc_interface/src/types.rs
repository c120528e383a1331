//! Media payloads exchanged with collaborators.

use derive_getters::Getters;

/// An extracted audio track ready for transcription.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AudioClip {
    /// Encoded audio bytes
    bytes: Vec<u8>,
    /// File name presented to the transcription service
    filename: String,
    /// MIME type of the encoding
    mime: String,
}

impl AudioClip {
    /// Create an audio clip.
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            mime: mime.into(),
        }
    }
}

/// One still image sampled from a video.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SampledImage {
    /// Sampling order, starting at 1
    index: usize,
    /// Encoded image bytes
    bytes: Vec<u8>,
    /// MIME type of the encoding
    mime: String,
}

impl SampledImage {
    /// Create a sampled image.
    pub fn new(index: usize, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            index,
            bytes,
            mime: mime.into(),
        }
    }
}
