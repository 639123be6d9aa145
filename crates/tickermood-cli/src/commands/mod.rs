mod analyze;
mod extract;
mod keywords;

use serde_json::Value;
use tickermood_core::{
    EnglishStopWords, Envelope, EnvelopeMeta, PipelineConfig, SentimentPipeline, StaticSource,
    VaderScorer,
};
use tracing::debug;
use uuid::Uuid;

use crate::cli::{Cli, Command, RunArgs};
use crate::error::CliError;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
    pub input: Option<String>,
    pub sources: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            latency_ms: 0,
            input: None,
            sources: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_input(mut self, input: impl Into<String>, sources: Vec<String>) -> Self {
        self.input = Some(input.into());
        self.sources = sources;
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let config = PipelineConfig::load(cli.config.as_deref())?;
    debug!(
        instruments = config.instruments.len(),
        sources = ?config.sources,
        limit = config.limit,
        "configuration loaded"
    );

    let command_result = match &cli.command {
        Command::Analyze(args) => analyze::run(args, apply_overrides(config, args)?)?,
        Command::Extract(args) => extract::run(args, apply_overrides(config, args)?)?,
        Command::Keywords => keywords::run(&config)?,
    };

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), command_result.latency_ms)?
        .with_sources(command_result.sources);
    if let Some(input) = command_result.input {
        meta = meta.with_input(input);
    }
    for warning in command_result.warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::success(meta, command_result.data))
}

/// CLI flags win over file/env configuration.
fn apply_overrides(
    mut config: PipelineConfig,
    args: &RunArgs,
) -> Result<PipelineConfig, CliError> {
    if !args.sources.is_empty() {
        config.sources = args.sources.clone();
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if let Some(max_sentence_length) = args.max_sentence_length {
        config.extraction.max_sentence_length = max_sentence_length;
    }
    if let Some(window_radius) = args.window_radius {
        config.extraction.window_radius = window_radius;
    }
    config.validate()?;
    Ok(config)
}

fn build_pipeline(config: &PipelineConfig) -> SentimentPipeline<VaderScorer, EnglishStopWords> {
    SentimentPipeline::new(
        config.instruments.clone(),
        config.extraction,
        VaderScorer::new(),
        EnglishStopWords::new(),
    )
}

fn load_source(args: &RunArgs) -> Result<StaticSource, CliError> {
    Ok(StaticSource::from_path(&args.input)?)
}

fn elapsed_ms(started: std::time::Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use tickermood_core::ValidationError;

    fn args() -> RunArgs {
        RunArgs {
            input: PathBuf::from("feeds.json"),
            sources: Vec::new(),
            limit: None,
            max_sentence_length: None,
            window_radius: None,
        }
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let config = apply_overrides(PipelineConfig::default(), &args()).expect("valid");
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn flags_override_config_values() {
        let args = RunArgs {
            sources: vec![String::from("wallstreetbets")],
            limit: Some(5),
            window_radius: Some(2),
            ..args()
        };
        let config = apply_overrides(PipelineConfig::default(), &args).expect("valid");
        assert_eq!(config.sources, ["wallstreetbets"]);
        assert_eq!(config.limit, 5);
        assert_eq!(config.extraction.window_radius, 2);
        assert_eq!(config.extraction.max_sentence_length, 30);
    }

    #[test]
    fn zero_override_is_a_validation_error() {
        let args = RunArgs {
            max_sentence_length: Some(0),
            ..args()
        };
        let err = apply_overrides(PipelineConfig::default(), &args).expect_err("must fail");
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::ZeroValue {
                field: "max_sentence_length"
            })
        ));
    }
}
