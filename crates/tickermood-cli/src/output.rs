use serde_json::Value;
use tickermood_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in table_lines(envelope)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_lines(envelope: &Envelope<Value>) -> Result<Vec<String>, CliError> {
    let meta = &envelope.meta;
    let mut lines = vec![
        format!("run_id      : {}", meta.run_id),
        format!("generated_at: {}", meta.generated_at),
    ];
    if let Some(input) = &meta.input {
        lines.push(format!("input       : {input}"));
    }
    if !meta.sources.is_empty() {
        lines.push(format!("sources     : {}", meta.sources.join(",")));
    }
    lines.push(format!("latency_ms  : {}", meta.latency_ms));

    if !meta.warnings.is_empty() {
        lines.push(String::from("warnings:"));
        lines.extend(meta.warnings.iter().map(|warning| format!("  - {warning}")));
    }

    match envelope.data["sentiment"]["tickers"].as_array() {
        Some(tickers) => {
            lines.push(String::from("sentiment:"));
            lines.extend(tickers.iter().map(ticker_line));
        }
        None => {
            lines.push(String::from("data:"));
            let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
            lines.extend(pretty_data.lines().map(|line| format!("  {line}")));
        }
    }

    Ok(lines)
}

fn ticker_line(ticker: &Value) -> String {
    let symbol = ticker["symbol"].as_str().unwrap_or_default();
    let name = ticker["name"].as_str().unwrap_or_default();
    match ticker["score"]["value"].as_f64() {
        Some(average) => format!(
            "  {symbol} ({name}): {average:.3}  [{} mentions]",
            ticker["mentions"]
        ),
        None => format!("  {symbol} ({name}): No data found"),
    }
}
