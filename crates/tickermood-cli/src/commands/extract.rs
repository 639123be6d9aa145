use std::time::Instant;

use serde::Serialize;
use tickermood_core::{ContentSource, MentionWindow, PipelineConfig, RunStats};

use crate::cli::RunArgs;
use crate::error::CliError;

use super::{build_pipeline, elapsed_ms, load_source, CommandResult};

#[derive(Debug, Serialize)]
struct ExtractResponseData {
    windows: Vec<MentionWindow>,
    stats: RunStats,
}

pub fn run(args: &RunArgs, config: PipelineConfig) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let source = load_source(args)?;
    let request = config.fetch_request()?;
    let pipeline = build_pipeline(&config);

    let records = source.fetch_records(&request)?;
    let extraction = pipeline.extract(&records);

    let data = serde_json::to_value(ExtractResponseData {
        windows: extraction.windows,
        stats: extraction.stats,
    })?;

    Ok(CommandResult::ok(data)
        .with_input(args.input.display().to_string(), request.sources)
        .with_latency(elapsed_ms(started)))
}
