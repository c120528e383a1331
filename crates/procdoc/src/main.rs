//! procdoc CLI binary.
//!
//! This binary provides command-line access to procdoc's functionality:
//! - Generate documents from text, PDF, DOCX or video input
//! - Re-export and refine previously generated documents
//! - Ask documentation questions

use clap::Parser;
use procdoc::{ObservabilityConfig, ProcdocConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, print_schema, run_chat, run_export, run_generate, run_refine,
    };

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    let config = ProcdocConfig::load_from(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            source,
            format,
            output,
        } => {
            run_generate(&config, source, format, output.as_deref()).await?;
        }

        Commands::Export {
            document,
            format,
            output,
        } => {
            run_export(&config, &document, format, output.as_deref())?;
        }

        Commands::Refine {
            document,
            section,
            feedback,
            output,
        } => {
            run_refine(&config, &document, &section, &feedback, output.as_deref()).await?;
        }

        Commands::Chat { message, context } => {
            run_chat(&config, &message, context.as_deref()).await?;
        }

        Commands::Schema => {
            print_schema(&config)?;
        }
    }

    Ok(())
}
