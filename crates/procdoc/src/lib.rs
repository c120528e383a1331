//! procdoc - Process Definition Documents from process descriptions.
//!
//! procdoc turns a description of a business process into a structured
//! Process Definition Document (PDD). The source can be plain text, a PDF or
//! DOCX file, or a screen recording with narration.
//!
//! # Pipeline
//!
//! 1. **Extraction**: documents are read page by page or paragraph by
//!    paragraph; videos are transcribed, sampled into frames that are
//!    described one by one, and fused into a single narrative.
//! 2. **Structuring**: one generative call per schema section produces the
//!    section content, in schema order.
//! 3. **Diagram**: a Mermaid flowchart is derived from the process steps
//!    section when possible.
//! 4. **Rendering**: HTML (also used for PDF printing) or DOCX.
//!
//! # Quick Start
//!
//! ```no_run
//! use procdoc::{ExportFormat, ProcdocConfig, RunContext};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProcdocConfig::load()?;
//! let pipeline = config.pipeline()?;
//!
//! let document = pipeline
//!     .generate_from_text("Every morning the clerk opens the invoice queue...", &RunContext::new())
//!     .await?;
//! let artifact = pipeline.render(&document, ExportFormat::Docx)?;
//! std::fs::write(artifact.filename(), artifact.body().as_bytes())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `procdoc_error` - Error types
//! - `procdoc_core` - Data model and generative request types
//! - `procdoc_interface` - Backend and media collaborator traits
//! - `procdoc_models` - OpenAI-compatible backend
//! - `procdoc_extract` - Document and video extraction
//! - `procdoc_render` - HTML and DOCX rendering
//! - `procdoc_pipeline` - Structuring, diagrams and orchestration
//!
//! This crate re-exports everything and adds configuration and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{LlmSettings, PipelineSettings, ProcdocConfig, VideoSettings};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

pub use procdoc_core::*;
pub use procdoc_error::*;
pub use procdoc_extract::*;
pub use procdoc_interface::*;
pub use procdoc_models::*;
pub use procdoc_pipeline::*;
pub use procdoc_render::*;
