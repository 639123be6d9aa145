use serde::Serialize;
use tickermood_core::{build_keyword_set, InstrumentCatalog, PipelineConfig};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct KeywordsResponseData<'a> {
    instruments: &'a InstrumentCatalog,
    keywords: Vec<&'a str>,
}

pub fn run(config: &PipelineConfig) -> Result<CommandResult, CliError> {
    let keywords = build_keyword_set(&config.instruments);
    let data = serde_json::to_value(KeywordsResponseData {
        instruments: &config.instruments,
        keywords: keywords.iter().collect(),
    })?;

    Ok(CommandResult::ok(data))
}
