//! Source artifact classification.

use procdoc_error::{ExtractionError, ExtractionErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions accepted for upload, in the order they are reported to users.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".mp4", ".mov", ".avi"];

/// Document formats with a text extraction path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
}

/// Video containers handled by the transcription and frame sampling path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// MPEG-4
    Mp4,
    /// QuickTime
    Mov,
    /// Audio Video Interleave
    Avi,
}

/// Which extraction strategy an uploaded artifact needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Text-bearing document
    Document(DocumentKind),
    /// Screen recording or walkthrough video
    Video(VideoKind),
}

impl ArtifactKind {
    /// Classify an artifact by its file extension (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use procdoc_core::{ArtifactKind, DocumentKind, VideoKind};
    ///
    /// assert_eq!(
    ///     ArtifactKind::from_filename("Invoice Process.PDF").unwrap(),
    ///     ArtifactKind::Document(DocumentKind::Pdf)
    /// );
    /// assert_eq!(
    ///     ArtifactKind::from_filename("walkthrough.mov").unwrap(),
    ///     ArtifactKind::Video(VideoKind::Mov)
    /// );
    /// assert!(ArtifactKind::from_filename("notes.txt").is_err());
    /// ```
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        if let Ok(kind) = extension.parse::<DocumentKind>() {
            return Ok(Self::Document(kind));
        }
        if let Ok(kind) = extension.parse::<VideoKind>() {
            return Ok(Self::Video(kind));
        }

        Err(ExtractionError::new(ExtractionErrorKind::UnsupportedFormat {
            extension: if extension.is_empty() {
                filename.to_string()
            } else {
                format!(".{}", extension.to_lowercase())
            },
            supported: SUPPORTED_EXTENSIONS.join(", "),
        }))
    }

    /// Lowercase extension without the leading dot.
    pub fn extension(&self) -> String {
        match self {
            Self::Document(kind) => kind.to_string(),
            Self::Video(kind) => kind.to_string(),
        }
    }

    /// True for the video path.
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}
