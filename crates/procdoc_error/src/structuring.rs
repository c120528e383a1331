//! Section structuring errors.

/// A generative call for one schema section failed.
///
/// Structuring is all-or-nothing, so this error always aborts the run.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Structuring Error: section '{}' failed: {} at line {} in {}", section, message, line, file)]
pub struct StructuringError {
    /// Name of the section whose call failed
    pub section: String,
    /// Underlying cause
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StructuringError {
    /// Create a new StructuringError for the named section.
    ///
    /// # Examples
    ///
    /// ```
    /// use procdoc_error::StructuringError;
    ///
    /// let err = StructuringError::new("Objectives", "HTTP 500");
    /// assert_eq!(err.section, "Objectives");
    /// assert!(err.to_string().contains("HTTP 500"));
    /// ```
    #[track_caller]
    pub fn new(section: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            section: section.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
