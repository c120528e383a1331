//! HTML markup rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};
use procdoc_core::{Diagram, Section};
use procdoc_error::{RenderError, RenderErrorKind};
use std::path::Path;

const DEFAULT_TEMPLATE: &str = include_str!("../templates/pdd.html");
const SECTIONS_SLOT: &str = "{{sections}}";
const TITLE_SLOT: &str = "{{title}}";
const DIAGRAM_SLOT: &str = "{{diagram}}";

/// Page template with `{{title}}`, `{{sections}}` and `{{diagram}}` slots.
///
/// Only `{{sections}}` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTemplate {
    source: String,
}

impl Default for HtmlTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl HtmlTemplate {
    /// Use a custom template.
    ///
    /// # Errors
    ///
    /// Returns a template error if the `{{sections}}` slot is missing.
    pub fn new(source: impl Into<String>) -> Result<Self, RenderError> {
        let source = source.into();
        if !source.contains(SECTIONS_SLOT) {
            return Err(RenderError::new(RenderErrorKind::Template(format!(
                "template has no {} slot",
                SECTIONS_SLOT
            ))));
        }
        Ok(Self { source })
    }

    /// Load a custom template from disk.
    ///
    /// # Errors
    ///
    /// Returns a template error if the file cannot be read or lacks the sections slot.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            RenderError::new(RenderErrorKind::Template(format!(
                "Failed to read template {}: {}",
                path.display(),
                e
            )))
        })?;
        Self::new(source)
    }

    /// Render a complete page.
    ///
    /// Title and section names are escaped; section content is inserted
    /// unchanged.
    pub fn render(&self, title: &str, sections: &[Section], diagram: Option<&Diagram>) -> String {
        let sections_html: String = sections
            .iter()
            .map(|section| {
                format!(
                    "<section class=\"pdd-section\">\n<h2>{}</h2>\n<div class=\"pdd-content\">\n{}\n</div>\n</section>\n",
                    encode_double_quoted_attribute(section.name()),
                    section.content()
                )
            })
            .collect();

        let diagram_html = diagram
            .map(|diagram| {
                format!(
                    "<section class=\"pdd-diagram\">\n<h2>Process Flow Diagram</h2>\n<pre class=\"mermaid\">\n{}\n</pre>\n</section>\n",
                    encode_text(diagram.as_str())
                )
            })
            .unwrap_or_default();

        let title = encode_double_quoted_attribute(title);
        fill_slots(&self.source, |slot| match slot {
            TITLE_SLOT => Some(title.as_ref()),
            DIAGRAM_SLOT => Some(diagram_html.as_str()),
            SECTIONS_SLOT => Some(sections_html.as_str()),
            _ => None,
        })
    }
}

/// Replace each known slot of `source` in one pass.
///
/// Inserted text is never rescanned, so generated content that happens to
/// look like a slot (Mermaid's `X{{label}}` hexagons) stays literal.
fn fill_slots<'a>(source: &str, value: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let filled = tail
            .find("}}")
            .map(|close| &tail[..close + 2])
            .and_then(|slot| value(slot).map(|text| (slot.len(), text)));
        match filled {
            Some((len, text)) => {
                out.push_str(text);
                rest = &tail[len..];
            }
            None => {
                out.push_str("{{");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_slots_leaves_unknown_and_inserted_slots_alone() {
        let filled = fill_slots("{{a}} {{b}} {{x", |slot| match slot {
            "{{a}}" => Some("{{b}}"),
            "{{b}}" => Some("B"),
            _ => None,
        });
        assert_eq!(filled, "{{b}} B {{x");
    }
}
