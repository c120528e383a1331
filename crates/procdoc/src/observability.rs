//! Logging setup for the procdoc binary.

use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Log filter directive (e.g., "info", "procdoc_pipeline=debug"), from `RUST_LOG` by default
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Initialize logging with default configuration.
pub fn init_observability() -> Result<(), Box<dyn std::error::Error>> {
    init_observability_with_config(ObservabilityConfig::default())
}

/// Initialize logging with custom configuration.
///
/// Logs go to stderr so generated documents can be piped from stdout.
pub fn init_observability_with_config(
    config: ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_new(&config.log_level)?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );
    Ok(())
}
