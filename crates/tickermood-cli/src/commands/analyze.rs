use std::time::Instant;

use tickermood_core::PipelineConfig;

use crate::cli::RunArgs;
use crate::error::CliError;

use super::{build_pipeline, elapsed_ms, load_source, CommandResult};

pub fn run(args: &RunArgs, config: PipelineConfig) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let source = load_source(args)?;
    let request = config.fetch_request()?;
    let pipeline = build_pipeline(&config);

    let report = pipeline.run(&source, &request)?;

    let mut warnings = Vec::new();
    if report.stats.records_relevant == 0 {
        warnings.push(String::from(
            "no record mentions a tracked instrument; every ticker reports no data",
        ));
    }
    if report.stats.unattributed > 0 {
        warnings.push(format!(
            "{} window(s) lost their ticker during cleaning and were not scored",
            report.stats.unattributed
        ));
    }

    Ok(CommandResult::ok(serde_json::to_value(&report)?)
        .with_warnings(warnings)
        .with_input(args.input.display().to_string(), request.sources)
        .with_latency(elapsed_ms(started)))
}
