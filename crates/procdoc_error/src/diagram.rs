//! Diagram synthesis errors.
//!
//! These never abort a pipeline run; the synthesizer logs them and yields no diagram.

/// Diagram synthesis failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DiagramErrorKind {
    /// The generative call failed
    #[display("Diagram generation failed: {}", _0)]
    Generation(String),

    /// The model returned nothing usable after fence stripping
    #[display("Diagram generation returned empty output")]
    EmptyOutput,
}

/// Diagram synthesis error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Diagram Error: {} at {}:{}", kind, file, line)]
pub struct DiagramError {
    /// The specific error kind
    pub kind: DiagramErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl DiagramError {
    /// Create a new diagram error.
    #[track_caller]
    pub fn new(kind: DiagramErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
