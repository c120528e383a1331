//! Section structuring, diagram synthesis and run orchestration.
//!
//! A run turns a narrative into a [`ProcessDocument`](procdoc_core::ProcessDocument):
//!
//! 1. the [`SectionStructurer`] makes one generative call per schema entry,
//! 2. the [`DiagramSynthesizer`] derives a Mermaid flow diagram from the
//!    process steps section, on a best-effort basis,
//! 3. the [`Pipeline`] ties both to content extraction and rendering, with
//!    cancellation and deadlines applied per stage.
//!
//! The [`SectionRefiner`] revises a single section from user feedback outside
//! of a run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod diagram;
mod orchestrator;
mod prompts;
mod refine;
mod schema;
mod structurer;

pub use diagram::{DiagramSynthesizer, strip_code_fence};
pub use orchestrator::{
    Pipeline, PipelineConfig, PipelineConfigBuilder, PipelineStage, RunContext,
};
pub use prompts::{chat_prompt, diagram_prompt, refine_prompt, section_prompt};
pub use refine::SectionRefiner;
pub use schema::{SchemaEntry, SectionSchema};
pub use structurer::SectionStructurer;
