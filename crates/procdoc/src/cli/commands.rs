//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use procdoc::ExportFormat;
use std::path::PathBuf;

/// procdoc - Generate Process Definition Documents from process descriptions
#[derive(Parser, Debug)]
#[command(name = "procdoc")]
#[command(about = "Generate Process Definition Documents from text, documents and screen recordings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a document from a process description
    Generate {
        /// Where the description comes from
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, default_value = "html")]
        format: OutputFormat,

        /// Output path (defaults to PDD_<name>.<ext>, or stdout for JSON)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render a previously generated JSON document
    Export {
        /// Path to the JSON document
        #[arg(long)]
        document: PathBuf,

        /// Output format
        #[arg(long)]
        format: DocumentFormat,

        /// Output path (defaults to PDD_<name>.<ext>)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Rewrite one section of a JSON document from feedback
    Refine {
        /// Path to the JSON document
        #[arg(long)]
        document: PathBuf,

        /// Name of the section to rewrite
        #[arg(long)]
        section: String,

        /// What to change
        #[arg(long)]
        feedback: String,

        /// Where to write the updated JSON document (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Ask a question about writing a process document
    Chat {
        /// The question
        #[arg(long)]
        message: String,

        /// Process description to ground the answer
        #[arg(long)]
        context: Option<String>,
    },

    /// Print the section schema in effect
    Schema,
}

/// Source of a process description; exactly one is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Plain-text description file
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// PDF, DOCX, MP4, MOV or AVI file
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Formats a generated document can be written in
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML page
    Html,
    /// Word document
    Docx,
    /// Print-ready HTML
    Pdf,
    /// Structured JSON, reusable with `export` and `refine`
    Json,
}

impl OutputFormat {
    /// The rendered format, or `None` for JSON.
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Html => Some(ExportFormat::Html),
            Self::Docx => Some(ExportFormat::Docx),
            Self::Pdf => Some(ExportFormat::Pdf),
            Self::Json => None,
        }
    }
}

/// Rendered document formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    /// HTML page
    Html,
    /// Word document
    Docx,
    /// Print-ready HTML
    Pdf,
}

impl From<DocumentFormat> for ExportFormat {
    fn from(format: DocumentFormat) -> Self {
        match format {
            DocumentFormat::Html => ExportFormat::Html,
            DocumentFormat::Docx => ExportFormat::Docx,
            DocumentFormat::Pdf => ExportFormat::Pdf,
        }
    }
}
