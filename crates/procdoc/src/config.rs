//! Layered configuration.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use procdoc_error::{ConfigError, ProcdocError, ProcdocResult};
use procdoc_extract::{
    ContentExtractor, FfmpegToolkit, NativeDocumentReader, VideoConfig, VideoSynthesizer,
};
use procdoc_models::{OpenAiClient, OpenAiConfig};
use procdoc_pipeline::{Pipeline, PipelineConfig, RunContext, SectionRefiner, SectionSchema};
use procdoc_render::HtmlTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../procdoc.toml");
const ENV_PREFIX: &str = "PROCDOC";

/// Generative backend settings (`[llm]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct LlmSettings {
    /// API base URL
    api_base: String,
    /// API key; `OPENAI_API_KEY` is used when absent
    #[serde(default)]
    api_key: Option<String>,
    /// Chat model
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Completion token limit
    #[serde(default)]
    max_tokens: Option<u32>,
    /// Transcription model
    transcription_model: String,
    /// Per-request timeout in seconds
    timeout_secs: u64,
}

/// Video extraction settings (`[video]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct VideoSettings {
    /// Seconds between sampled frames
    frame_interval_secs: u64,
    /// Upper bound on in-flight frame description calls
    max_concurrent_frames: usize,
    /// ffmpeg executable
    ffmpeg_path: PathBuf,
}

/// Orchestration settings (`[pipeline]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PipelineSettings {
    /// Upper bound on in-flight section calls
    max_concurrent_sections: usize,
    /// Custom section schema; the bundled one is used when absent
    #[serde(default)]
    schema_path: Option<PathBuf>,
    /// Custom HTML template; the bundled one is used when absent
    #[serde(default)]
    template_path: Option<PathBuf>,
    /// Run deadline in seconds
    #[serde(default)]
    deadline_secs: Option<u64>,
}

/// Complete procdoc configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ProcdocConfig {
    /// Generative backend
    llm: LlmSettings,
    /// Video extraction
    video: VideoSettings,
    /// Orchestration
    pipeline: PipelineSettings,
}

impl ProcdocConfig {
    /// Load configuration with the standard precedence and no explicit file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use procdoc::ProcdocConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ProcdocConfig::load()?;
    /// println!("model: {}", config.llm().model());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load() -> ProcdocResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration, optionally layering an explicit file.
    ///
    /// Sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (procdoc.toml shipped with the crate)
    /// 2. `~/.config/procdoc/procdoc.toml`
    /// 3. `./procdoc.toml`
    /// 4. The explicit file, which must exist when given
    /// 5. `PROCDOC_`-prefixed environment variables (`__` separates sections)
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed or the explicit
    /// file is missing.
    pub fn load_from(explicit: Option<&Path>) -> ProcdocResult<Self> {
        Self::load_layers(explicit, None)
    }

    /// Like [`load_from`](Self::load_from) but reading environment overrides
    /// from `env` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load_with_env(
        explicit: Option<&Path>,
        env: HashMap<String, String>,
    ) -> ProcdocResult<Self> {
        Self::load_layers(explicit, Some(env))
    }

    #[instrument(skip(env))]
    fn load_layers(
        explicit: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> ProcdocResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/procdoc/procdoc.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("procdoc").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        builder = builder.add_source(match env {
            Some(map) => environment.source(Some(map)),
            None => environment,
        });

        builder
            .build()
            .map_err(|e| {
                ProcdocError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ProcdocError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Backend settings for the OpenAI-compatible client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are inconsistent.
    pub fn openai_config(&self) -> ProcdocResult<OpenAiConfig> {
        let mut builder = OpenAiConfig::builder();
        builder
            .api_base(self.llm.api_base.clone())
            .model(self.llm.model.clone())
            .temperature(self.llm.temperature)
            .transcription_model(self.llm.transcription_model.clone())
            .timeout(Duration::from_secs(self.llm.timeout_secs));
        if let Some(key) = &self.llm.api_key {
            builder.api_key(key.clone());
        }
        if let Some(max_tokens) = self.llm.max_tokens {
            builder.max_tokens(max_tokens);
        }

        builder.build().map_err(|e| {
            ConfigError::new(format!("Invalid [llm] configuration: {}", e)).into()
        })
    }

    /// Settings for the video path.
    pub fn video_config(&self) -> VideoConfig {
        VideoConfig::builder()
            .frame_interval(Duration::from_secs(self.video.frame_interval_secs.max(1)))
            .max_concurrent_frames(self.video.max_concurrent_frames.max(1))
            .build()
            .unwrap_or_default()
    }

    /// The section schema in effect.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the configured schema file is invalid.
    pub fn schema(&self) -> ProcdocResult<SectionSchema> {
        Ok(SectionSchema::load(self.pipeline.schema_path.as_deref())?)
    }

    /// The HTML template in effect.
    ///
    /// # Errors
    ///
    /// Returns a render error if the configured template cannot be used.
    pub fn template(&self) -> ProcdocResult<HtmlTemplate> {
        match &self.pipeline.template_path {
            Some(path) => Ok(HtmlTemplate::from_file(path)?),
            None => Ok(HtmlTemplate::default()),
        }
    }

    /// Orchestration settings with schema and template resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema or template cannot be loaded.
    pub fn pipeline_config(&self) -> ProcdocResult<PipelineConfig> {
        PipelineConfig::builder()
            .schema(self.schema()?)
            .template(self.template()?)
            .max_concurrent_sections(self.pipeline.max_concurrent_sections.max(1))
            .build()
            .map_err(|e| {
                ConfigError::new(format!("Invalid [pipeline] configuration: {}", e)).into()
            })
    }

    /// A run context honouring the configured deadline.
    pub fn run_context(&self) -> RunContext {
        match self.pipeline.deadline_secs {
            Some(secs) => RunContext::new().with_timeout(Duration::from_secs(secs)),
            None => RunContext::new(),
        }
    }

    /// The OpenAI-compatible client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available.
    pub fn client(&self) -> ProcdocResult<Arc<OpenAiClient>> {
        Ok(Arc::new(OpenAiClient::new(self.openai_config()?)?))
    }

    /// A fully wired pipeline backed by the OpenAI-compatible client,
    /// the native document reader and ffmpeg.
    ///
    /// # Errors
    ///
    /// Returns an error if the client, schema or template cannot be set up.
    pub fn pipeline(&self) -> ProcdocResult<Pipeline<Arc<OpenAiClient>>> {
        let client = self.client()?;
        let video = VideoSynthesizer::new(
            Arc::clone(&client),
            client.clone(),
            Arc::new(FfmpegToolkit::new(self.video.ffmpeg_path.clone())),
            self.video_config(),
        );
        let extractor = ContentExtractor::new(Arc::new(NativeDocumentReader), video);
        Ok(Pipeline::new(client, extractor, self.pipeline_config()?))
    }

    /// A section refiner backed by the OpenAI-compatible client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available.
    pub fn refiner(&self) -> ProcdocResult<SectionRefiner<Arc<OpenAiClient>>> {
        Ok(SectionRefiner::new(self.client()?))
    }
}
