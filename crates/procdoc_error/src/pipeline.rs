//! Pipeline orchestration errors.

/// Orchestration failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The run's deadline elapsed while the named stage was active
    #[display("Deadline exceeded during {} stage", stage)]
    DeadlineExceeded {
        /// Stage that was abandoned
        stage: String,
    },

    /// The run was cancelled while the named stage was active
    #[display("Run cancelled during {} stage", stage)]
    Cancelled {
        /// Stage that was abandoned
        stage: String,
    },
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at {}:{}", kind, file, line)]
pub struct PipelineError {
    /// The specific error kind
    pub kind: PipelineErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
