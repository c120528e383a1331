//! The office document block model.

use procdoc_core::Diagram;

/// Heading depth inside a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HeadingLevel {
    /// Top-level grouping heading
    #[display("1")]
    One,
    /// Section heading
    #[display("2")]
    Two,
}

/// One renderable unit of an office document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered document title
    Title(String),
    /// Centered italic line under the title
    Subtitle(String),
    /// Heading at the given depth
    Heading {
        /// Depth
        level: HeadingLevel,
        /// Heading text
        text: String,
    },
    /// Plain paragraph
    Paragraph(String),
    /// Bulleted list item (text keeps its original marker)
    ListItem(String),
    /// Intentional blank paragraph
    Empty,
    /// Flow diagram: heading, caption, source and trailing blank paragraph
    Diagram(Diagram),
}

impl Block {
    /// Shorthand for a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }
}
