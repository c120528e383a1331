//! Document rendering errors.

/// Rendering failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// The markup template is missing a required placeholder or unreadable
    #[display("Template error: {}", _0)]
    Template(String),

    /// Packing the office document failed
    #[display("DOCX packing failed: {}", _0)]
    Packing(String),
}

/// Rendering error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at {}:{}", kind, file, line)]
pub struct RenderError {
    /// The specific error kind
    pub kind: RenderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
