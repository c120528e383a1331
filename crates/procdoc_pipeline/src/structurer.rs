//! Mapping a narrative onto the section schema.

use crate::SectionSchema;
use crate::prompts::section_prompt;
use futures::stream::{self, StreamExt, TryStreamExt};
use procdoc_core::{Narrative, Section};
use procdoc_error::{ProcdocResult, StructuringError};
use procdoc_interface::{ProcdocDriver, generate_text, text_request};
use tracing::{debug, info, instrument};

/// Generates one section per schema entry.
///
/// Calls may overlap up to `max_concurrent` but results are always returned
/// in schema order. Any failed call fails the whole set.
pub struct SectionStructurer<D: ProcdocDriver> {
    driver: D,
    max_concurrent: usize,
}

impl<D: ProcdocDriver> SectionStructurer<D> {
    /// Create a structurer issuing one call at a time.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            max_concurrent: 1,
        }
    }

    /// Allow up to `max_concurrent` section calls in flight.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Produce the full section list for a narrative.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuringError`] naming the first section whose call failed.
    #[instrument(skip(self, narrative, schema), fields(sections = schema.sections().len(), narrative_chars = narrative.as_str().len()))]
    pub async fn structure(
        &self,
        narrative: &Narrative,
        schema: &SectionSchema,
    ) -> ProcdocResult<Vec<Section>> {
        let sections: Vec<Section> = stream::iter(schema.sections())
            .map(|entry| async move {
                let prompt = section_prompt(entry.prompt(), entry.name(), narrative.as_str());
                let content = generate_text(&self.driver, &text_request(prompt))
                    .await
                    .map_err(|e| StructuringError::new(entry.name(), e.to_string()))?;
                debug!(section = %entry.name(), chars = content.len(), "Section generated");
                Ok::<_, StructuringError>(Section::new(entry.name(), content))
            })
            .buffered(self.max_concurrent)
            .try_collect()
            .await?;

        info!(count = sections.len(), "Structuring complete");
        Ok(sections)
    }
}
