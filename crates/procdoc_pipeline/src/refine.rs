//! Section refinement and authoring chat.

use crate::prompts::{chat_prompt, refine_prompt};
use procdoc_core::Section;
use procdoc_error::ProcdocResult;
use procdoc_interface::{ProcdocDriver, generate_text, text_request};
use tracing::{debug, instrument};

/// Revises sections from feedback and answers authoring questions.
pub struct SectionRefiner<D: ProcdocDriver> {
    driver: D,
}

impl<D: ProcdocDriver> SectionRefiner<D> {
    /// Create a refiner.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// A new section with the same name and revised content.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the call fails.
    #[instrument(skip(self, section, feedback), fields(section = %section.name()))]
    pub async fn refine(&self, section: &Section, feedback: &str) -> ProcdocResult<Section> {
        let prompt = refine_prompt(section.name(), section.content(), feedback);
        let revised = generate_text(&self.driver, &text_request(prompt)).await?;
        debug!(chars = revised.len(), "Section refined");
        Ok(section.with_content(revised.trim()))
    }

    /// Answer a question about writing the document.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the call fails.
    #[instrument(skip_all, fields(with_context = context.is_some()))]
    pub async fn chat(&self, message: &str, context: Option<&str>) -> ProcdocResult<String> {
        let reply = generate_text(&self.driver, &text_request(chat_prompt(message, context))).await?;
        Ok(reply.trim().to_string())
    }
}
