//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the procdoc binary.

mod chat;
mod commands;
mod export;
mod generate;
mod output;
mod refine;

pub use chat::{run_chat, print_schema};
pub use commands::{Cli, Commands, DocumentFormat, OutputFormat, SourceArgs};
pub use export::run_export;
pub use generate::run_generate;
pub use refine::run_refine;
