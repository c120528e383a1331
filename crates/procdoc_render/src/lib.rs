//! Rendering of process definition documents.
//!
//! Two targets are supported:
//!
//! - **Markup**: the ordered sections inside an HTML template, section
//!   content passed through as-is, the diagram embedded as a Mermaid block.
//! - **Office**: a block model (headings, paragraphs, list items, empty
//!   paragraphs and an optional diagram block) derived from section names
//!   and content, packed into a DOCX file.
//!
//! Rendering is pure: the same inputs always produce the same artifact.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blocks;
mod docx;
mod export;
mod heading;
mod html;
mod office;
mod reflow;

pub use blocks::{Block, HeadingLevel};
pub use docx::pack_docx;
pub use export::{ArtifactBody, ExportArtifact, ExportFormat, export, export_filename};
pub use heading::{HeadingPlan, heading_blocks, heading_plan};
pub use html::HtmlTemplate;
pub use office::{DIAGRAM_MARKERS, PDD_SUBTITLE, office_blocks};
pub use reflow::reflow;
