//! Export of a process document to a downloadable artifact.

use crate::{HtmlTemplate, office_blocks, pack_docx};
use derive_getters::Getters;
use procdoc_core::ProcessDocument;
use procdoc_error::RenderError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const HTML_MEDIA_TYPE: &str = "text/html";
const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Target format of an export.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    /// HTML page
    Html,
    /// Word document
    Docx,
    /// Print-ready HTML, converted to PDF by the browser
    Pdf,
}

impl ExportFormat {
    /// File extension of the produced artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html | Self::Pdf => "html",
            Self::Docx => "docx",
        }
    }

    /// Media type of the produced artifact.
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Html | Self::Pdf => HTML_MEDIA_TYPE,
            Self::Docx => DOCX_MEDIA_TYPE,
        }
    }

    /// Whether the artifact is meant to be opened in place rather than saved.
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Pdf)
    }
}

/// Artifact payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactBody {
    /// Text markup
    Markup(String),
    /// Binary file contents
    Binary(Vec<u8>),
}

impl ArtifactBody {
    /// Raw bytes of the payload.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Markup(markup) => markup.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }
}

/// A rendered document ready to be written or served.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ExportArtifact {
    /// Requested format
    format: ExportFormat,
    /// Suggested file name
    filename: String,
    /// Media type of the body
    #[getter(skip)]
    media_type: &'static str,
    /// Payload
    body: ArtifactBody,
}

impl ExportArtifact {
    /// Media type of the body.
    // Written by hand: `Getters` would emit `&'static self` for a `&'static` field.
    pub fn media_type(&self) -> &&'static str {
        &self.media_type
    }
}

/// Suggested file name for an exported document.
///
/// Whitespace, path separators and other characters that file systems reject
/// become underscores.
///
/// # Examples
///
/// ```
/// use procdoc_render::{export_filename, ExportFormat};
///
/// assert_eq!(
///     export_filename("Invoice Approval", ExportFormat::Docx),
///     "PDD_Invoice_Approval.docx"
/// );
/// assert_eq!(
///     export_filename("Invoice Approval", ExportFormat::Pdf),
///     "PDD_Invoice_Approval.html"
/// );
/// ```
pub fn export_filename(process_name: &str, format: ExportFormat) -> String {
    let stem: String = process_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("PDD_{}.{}", stem, format.extension())
}

/// Render a document in the requested format.
///
/// # Errors
///
/// Returns a packing error if the DOCX archive cannot be written.
#[instrument(skip(document, template), fields(process = %document.process_name(), sections = document.sections().len()))]
pub fn export(
    document: &ProcessDocument,
    format: ExportFormat,
    template: &HtmlTemplate,
) -> Result<ExportArtifact, RenderError> {
    let body = match format {
        ExportFormat::Html | ExportFormat::Pdf => ArtifactBody::Markup(template.render(
            document.process_name(),
            document.sections(),
            document.diagram().as_ref(),
        )),
        ExportFormat::Docx => {
            let blocks = office_blocks(
                document.process_name(),
                document.sections(),
                document.diagram().as_ref(),
            );
            debug!(blocks = blocks.len(), "Assembled office blocks");
            ArtifactBody::Binary(pack_docx(&blocks)?)
        }
    };

    let artifact = ExportArtifact {
        format,
        filename: export_filename(document.process_name(), format),
        media_type: format.media_type(),
        body,
    };
    debug!(filename = %artifact.filename, bytes = artifact.body.as_bytes().len(), "Rendered artifact");
    Ok(artifact)
}
