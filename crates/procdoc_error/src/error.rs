//! Top-level error wrapper types.

use crate::{
    ConfigError, DiagramError, ExtractionError, ModelsError, PipelineError, RenderError,
    SchemaError, StructuringError,
};

/// Every error a procdoc operation can surface.
///
/// # Examples
///
/// ```
/// use procdoc_error::{ProcdocError, ProcdocErrorKind, StructuringError};
///
/// let err: ProcdocError = StructuringError::new("Objectives", "timeout").into();
/// assert!(matches!(err.kind(), ProcdocErrorKind::Structuring(_)));
/// assert!(format!("{}", err).contains("Objectives"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ProcdocErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Section schema error
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Content extraction error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Section structuring error
    #[from(StructuringError)]
    Structuring(StructuringError),
    /// Diagram synthesis error
    #[from(DiagramError)]
    Diagram(DiagramError),
    /// Document rendering error
    #[from(RenderError)]
    Render(RenderError),
    /// Orchestration error (deadline, cancellation)
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// procdoc error with kind discrimination.
///
/// # Examples
///
/// ```
/// use procdoc_error::{ConfigError, ProcdocResult};
///
/// fn might_fail() -> ProcdocResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("procdoc Error: {}", _0)]
pub struct ProcdocError(Box<ProcdocErrorKind>);

impl ProcdocError {
    /// Create a new error from a kind.
    pub fn new(kind: ProcdocErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProcdocErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ProcdocErrorKind
impl<T> From<T> for ProcdocError
where
    T: Into<ProcdocErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for procdoc operations.
pub type ProcdocResult<T> = std::result::Result<T, ProcdocError>;
