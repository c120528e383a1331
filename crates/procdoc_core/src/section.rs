//! Named document sections.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One named unit of the structured document.
///
/// `name` comes from the section schema; `content` is generative output,
/// expected to be lightweight HTML and treated as untrusted text.
///
/// # Examples
///
/// ```
/// use procdoc_core::Section;
///
/// let section = Section::new("Objectives", "<p>Close the books.</p>");
/// let revised = section.with_content("<p>Close the books faster.</p>");
///
/// assert_eq!(revised.name(), "Objectives");
/// assert_ne!(section, revised);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Section {
    /// Schema name of the section
    name: String,
    /// Generated content (lightweight HTML)
    content: String,
}

impl Section {
    /// Create a section.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// A new section with the same name and replaced content.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::new(self.name.clone(), content)
    }
}
