//! Content extraction errors.

/// Specific content extraction failure conditions.
///
/// Every variant is fatal to the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// The artifact's extension is not one of the supported types
    #[display("Unsupported file type '{}'. Supported types: {}", extension, supported)]
    UnsupportedFormat {
        /// Extension (or file name) that was rejected
        extension: String,
        /// Human-readable list of accepted extensions
        supported: String,
    },

    /// The document parser could not read the bytes (corrupt, encrypted, parser panic)
    #[display("Failed to extract text from {} document: {}", format, message)]
    DocumentParse {
        /// Declared document type
        format: String,
        /// Parser message
        message: String,
    },

    /// The transcription service failed
    #[display("Transcription failed: {}", _0)]
    Transcription(String),

    /// Frame sampling yielded no frames
    #[display("No frames could be extracted from the video")]
    NoFramesExtracted,

    /// The media toolkit is unavailable or could not decode the input
    #[display("Media tool failed: {}", _0)]
    MediaTool(String),

    /// The fusion call combining transcript and frames failed
    #[display("Failed to fuse transcript and frame descriptions: {}", _0)]
    Fusion(String),

    /// Reading, writing or cleaning up staged files failed
    #[display("Staging failed: {}", _0)]
    Staging(String),
}

/// Content extraction error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at {}:{}", kind, file, line)]
pub struct ExtractionError {
    /// The specific error kind
    pub kind: ExtractionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new extraction error.
    ///
    /// # Examples
    ///
    /// ```
    /// use procdoc_error::{ExtractionError, ExtractionErrorKind};
    ///
    /// let err = ExtractionError::new(ExtractionErrorKind::NoFramesExtracted);
    /// assert_eq!(err.kind, ExtractionErrorKind::NoFramesExtracted);
    /// ```
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
