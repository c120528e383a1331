//! Text extraction from PDF and DOCX bytes.

use procdoc_core::DocumentKind;
use procdoc_error::{ExtractionError, ExtractionErrorKind, ProcdocResult};
use procdoc_interface::DocumentReader;
use tracing::{debug, warn};

/// Pure Rust document reader: `pdf-extract` for PDFs, `docx-rs` for DOCX.
///
/// PDF units are pages. DOCX units are body paragraphs, with each table row
/// flattened into one unit of ` | `-separated cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDocumentReader;

impl DocumentReader for NativeDocumentReader {
    fn text_units(&self, bytes: &[u8], kind: DocumentKind) -> ProcdocResult<Vec<String>> {
        let units = match kind {
            DocumentKind::Pdf => pdf_pages(bytes)?,
            DocumentKind::Docx => docx_units(bytes)?,
        };
        debug!(%kind, units = units.len(), "Read document text units");
        Ok(units)
    }
}

/// Trim every unit, drop the empty ones and join the rest with a blank line.
///
/// # Examples
///
/// ```
/// use procdoc_extract::join_text_units;
///
/// let text = join_text_units(vec![
///     " Step one ".to_string(),
///     "   ".to_string(),
///     "Step two".to_string(),
/// ]);
/// assert_eq!(text, "Step one\n\nStep two");
/// ```
pub fn join_text_units(units: impl IntoIterator<Item = String>) -> String {
    units
        .into_iter()
        .map(|unit| unit.trim().to_string())
        .filter(|unit| !unit.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn parse_error(kind: DocumentKind, message: impl Into<String>) -> ExtractionError {
    ExtractionError::new(ExtractionErrorKind::DocumentParse {
        format: kind.to_string(),
        message: message.into(),
    })
}

/// Run a third-party parser, turning both its errors and its panics into
/// parse errors. Both parsers panic on some malformed input.
fn guarded_parse<T, E: std::fmt::Display>(
    kind: DocumentKind,
    parse: impl FnOnce() -> Result<T, E>,
) -> Result<T, ExtractionError> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(parse)) {
        Ok(Ok(parsed)) => Ok(parsed),
        Ok(Err(e)) => Err(parse_error(kind, e.to_string())),
        Err(_) => {
            warn!(%kind, "Document parser panicked on malformed content");
            Err(parse_error(
                kind,
                format!("{} parser panicked on malformed content", kind),
            ))
        }
    }
}

/// Per-page PDF text.
fn pdf_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    guarded_parse(DocumentKind::Pdf, || {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })
}

fn docx_units(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let docx = guarded_parse(DocumentKind::Docx, || docx_rs::read_docx(bytes))?;

    let mut units = Vec::new();
    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(paragraph) => {
                units.push(paragraph_text(paragraph));
            }
            docx_rs::DocumentChild::Table(table) => {
                for row in &table.rows {
                    let docx_rs::TableChild::TableRow(row) = row;
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .map(|cell| {
                            let docx_rs::TableRowChild::TableCell(cell) = cell;
                            cell.children
                                .iter()
                                .filter_map(|content| match content {
                                    docx_rs::TableCellContent::Paragraph(p) => {
                                        Some(paragraph_text(p))
                                    }
                                    _ => None,
                                })
                                .collect::<Vec<_>>()
                                .join(" ")
                        })
                        .collect();
                    units.push(cells.join(" | "));
                }
            }
            _ => {}
        }
    }
    Ok(units)
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, &mut text),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = inner {
                        push_run_text(run, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(run: &docx_rs::Run, output: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => output.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => output.push('\t'),
            _ => {}
        }
    }
}
