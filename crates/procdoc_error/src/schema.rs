//! Section schema error types.

/// Invalid or unreadable section schema.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", message, line, file)]
pub struct SchemaError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use procdoc_error::SchemaError;
    ///
    /// let err = SchemaError::new("duplicate section name: Objectives");
    /// assert!(err.to_string().contains("Objectives"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
