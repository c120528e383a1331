//! The assembled result of a pipeline run.

use crate::{Diagram, Section, process_name};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Structured process document: ordered sections plus an optional flow diagram.
///
/// This is what a run produces before rendering, and what the JSON output of
/// the CLI contains. It can be read back later for another export.
///
/// # Examples
///
/// ```
/// use procdoc_core::{ProcessDocument, Section};
///
/// let doc = ProcessDocument::new(
///     vec![Section::new("Process Name", "<p>Invoice Approval</p>")],
///     None,
/// );
/// assert_eq!(doc.process_name(), "Invoice Approval");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ProcessDocument {
    /// Display name derived from the first section
    process_name: String,
    /// Sections in schema order
    sections: Vec<Section>,
    /// Mermaid source, absent when synthesis was skipped or failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diagram: Option<Diagram>,
}

impl ProcessDocument {
    /// Assemble a document, deriving its process name from the sections.
    pub fn new(sections: Vec<Section>, diagram: Option<Diagram>) -> Self {
        Self {
            process_name: process_name(&sections),
            sections,
            diagram,
        }
    }

    /// Look up a section by exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    /// A new document with the named section replaced, keeping order.
    ///
    /// Returns `None` if no section has the replacement's name.
    pub fn with_section(&self, replacement: Section) -> Option<Self> {
        let position = self
            .sections
            .iter()
            .position(|section| section.name() == replacement.name())?;

        let mut sections = self.sections.clone();
        sections[position] = replacement;
        Some(Self::new(sections, self.diagram.clone()))
    }
}
