//! Core data types for procdoc.
//!
//! Two families of types live here: the multimodal request/response types
//! spoken to generative backends, and the process-documentation domain model
//! (narratives, sections, frames, diagrams and the assembled document).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod diagram;
mod document;
mod frame;
mod input;
mod markup;
mod media;
mod message;
mod narrative;
mod request;
mod role;
mod section;

pub use artifact::{ArtifactKind, DocumentKind, SUPPORTED_EXTENSIONS, VideoKind};
pub use diagram::Diagram;
pub use document::ProcessDocument;
pub use frame::Frame;
pub use input::Input;
pub use markup::{DEFAULT_PROCESS_NAME, process_name, strip_tags};
pub use media::MediaSource;
pub use message::{Message, MessageBuilder};
pub use narrative::Narrative;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder, Output,
};
pub use role::Role;
pub use section::Section;
