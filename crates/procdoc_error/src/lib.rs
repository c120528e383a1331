//! Error types for procdoc.
//!
//! This crate provides the foundation error types used throughout the procdoc workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every stage error converts into [`ProcdocError`], so callers can use `?` freely.
//!
//! # Examples
//!
//! ```
//! use procdoc_error::{ExtractionError, ExtractionErrorKind, ProcdocResult};
//!
//! fn classify(name: &str) -> ProcdocResult<()> {
//!     Err(ExtractionError::new(ExtractionErrorKind::UnsupportedFormat {
//!         extension: name.to_string(),
//!         supported: ".pdf, .docx".to_string(),
//!     }))?
//! }
//!
//! assert!(classify("notes.txt").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod diagram;
mod error;
mod extraction;
mod models;
mod pipeline;
mod render;
mod schema;
mod structuring;

pub use config::ConfigError;
pub use diagram::{DiagramError, DiagramErrorKind};
pub use error::{ProcdocError, ProcdocErrorKind, ProcdocResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use schema::SchemaError;
pub use structuring::StructuringError;
