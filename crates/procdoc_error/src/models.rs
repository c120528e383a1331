//! Model provider errors.

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// No API key was configured or found in the environment
    #[display("Missing API key: {}", _0)]
    MissingApiKey(String),

    /// The request could not be sent or the body could not be read
    #[display("Request failed: {}", _0)]
    Http(String),

    /// The API answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The response body did not match the expected shape
    #[display("Failed to parse response: {}", _0)]
    ResponseParse(String),

    /// The response contained no text output
    #[display("Response contained no text output")]
    EmptyResponse,

    /// The request used an input type this provider cannot send
    #[display("Unsupported input: {}", _0)]
    Unsupported(String),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    ///
    /// # Examples
    ///
    /// ```
    /// use procdoc_error::{ModelsError, ModelsErrorKind};
    ///
    /// let err = ModelsError::new(ModelsErrorKind::ApiError {
    ///     status: 429,
    ///     message: "rate limited".to_string(),
    /// });
    /// assert!(err.to_string().contains("429"));
    /// ```
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
