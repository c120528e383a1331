//! Flow diagram source.

use serde::{Deserialize, Serialize};

/// Mermaid flow-diagram source text, already stripped of code fences.
///
/// # Examples
///
/// ```
/// use procdoc_core::Diagram;
///
/// let diagram = Diagram::new("graph TD\n    A[Start] --> B[End]");
/// assert!(diagram.as_str().starts_with("graph TD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct Diagram(String);

impl Diagram {
    /// Wrap diagram source.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Borrow the diagram source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
