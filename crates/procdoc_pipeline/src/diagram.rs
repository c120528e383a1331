//! Best-effort Mermaid diagram synthesis.

use crate::prompts::diagram_prompt;
use procdoc_core::Diagram;
use procdoc_error::{DiagramError, DiagramErrorKind};
use procdoc_interface::{ProcdocDriver, generate_text, text_request};
use tracing::{debug, instrument, warn};

const FENCE: &str = "```";

/// Remove a Markdown code fence wrapped around model output.
///
/// A leading line starting with triple backticks (with or without a language
/// tag) and a trailing line starting with triple backticks are dropped; the
/// rest is kept as-is and trimmed.
///
/// # Examples
///
/// ```
/// use procdoc_pipeline::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```mermaid\ngraph TD\n  A --> B\n```"), "graph TD\n  A --> B");
/// assert_eq!(strip_code_fence("graph TD\n  A --> B"), "graph TD\n  A --> B");
/// ```
pub fn strip_code_fence(text: &str) -> String {
    let mut lines: Vec<&str> = text.trim().lines().collect();
    if lines.first().is_some_and(|line| line.starts_with(FENCE)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.starts_with(FENCE)) {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

/// Derives a flow diagram from the process steps section.
pub struct DiagramSynthesizer<D: ProcdocDriver> {
    driver: D,
}

impl<D: ProcdocDriver> DiagramSynthesizer<D> {
    /// Create a synthesizer.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Generate a diagram, or `None` if generation fails or yields nothing.
    ///
    /// Failures are logged and never surfaced.
    #[instrument(skip(self, steps), fields(steps_chars = steps.len()))]
    pub async fn synthesize(&self, steps: &str) -> Option<Diagram> {
        match self.try_synthesize(steps).await {
            Ok(diagram) => {
                debug!(chars = diagram.as_str().len(), "Diagram generated");
                Some(diagram)
            }
            Err(e) => {
                warn!(error = %e, "Failed to generate diagram, continuing without one");
                None
            }
        }
    }

    async fn try_synthesize(&self, steps: &str) -> Result<Diagram, DiagramError> {
        let raw = generate_text(&self.driver, &text_request(diagram_prompt(steps)))
            .await
            .map_err(|e| DiagramError::new(DiagramErrorKind::Generation(e.to_string())))?;

        let code = strip_code_fence(&raw);
        if code.is_empty() {
            return Err(DiagramError::new(DiagramErrorKind::EmptyOutput));
        }
        Ok(Diagram::new(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_is_idempotent() {
        let inputs = [
            "```mermaid\ngraph TD\n  A --> B\n```",
            "```\ngraph TD\n```",
            "graph TD\n  A[Start] --> B[End]",
            "  \n```mermaid\ngraph TD\n  A --> B\n```\n\n",
            "",
        ];
        for input in inputs {
            let once = strip_code_fence(input);
            assert_eq!(strip_code_fence(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_strip_code_fence_keeps_interior() {
        assert_eq!(strip_code_fence("```mermaid\nX\n```"), "X");
        assert_eq!(
            strip_code_fence("```\ngraph TD\n\n  A --> B\n```"),
            "graph TD\n\n  A --> B"
        );
    }

    #[test]
    fn test_strip_code_fence_handles_unbalanced_fences() {
        assert_eq!(strip_code_fence("```mermaid\ngraph TD"), "graph TD");
        assert_eq!(strip_code_fence("graph TD\n```"), "graph TD");
        assert_eq!(strip_code_fence("```"), "");
    }
}
