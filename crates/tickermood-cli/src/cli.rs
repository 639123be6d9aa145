//! CLI argument definitions for tickermood.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Per-ticker sentiment averages for a feed file |
//! | `extract` | Mention windows only, no scoring |
//! | `keywords` | Instrument catalog and derived keyword set |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--config` | none | Config file (falls back to `TICKERMOOD_CONFIG`) |
//!
//! # Examples
//!
//! ```bash
//! tickermood analyze --input feeds.json --pretty
//! tickermood extract --input feeds.ndjson --window-radius 3
//! tickermood keywords --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Ticker mention sentiment over social-media feeds.
#[derive(Debug, Parser)]
#[command(
    name = "tickermood",
    author,
    version,
    about = "Ticker mention extraction and sentiment aggregation"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// JSON config file with instruments, sources, limit and extraction settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline and print per-ticker averages.
    ///
    /// # Examples
    ///
    ///   tickermood analyze --input feeds.json
    ///   tickermood analyze --input feeds.json --source stocks --limit 10
    Analyze(RunArgs),

    /// Print the mention windows without scoring them.
    Extract(RunArgs),

    /// Print the instrument catalog and the derived keyword set.
    Keywords,
}

/// Arguments shared by `analyze` and `extract`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Feed file: JSON object keyed by source name, or NDJSON (`.ndjson`/`.jsonl`).
    #[arg(long)]
    pub input: PathBuf,

    /// Source names to read (repeatable). Overrides the config file.
    #[arg(long = "source")]
    pub sources: Vec<String>,

    /// Records taken per source. Overrides the config file.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Sentences with at most this many words are kept whole.
    #[arg(long)]
    pub max_sentence_length: Option<usize>,

    /// Words kept on each side of a mention in longer sentences.
    #[arg(long)]
    pub window_radius: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_overrides() {
        let cli = Cli::try_parse_from([
            "tickermood",
            "analyze",
            "--input",
            "feeds.json",
            "--source",
            "stocks",
            "--source",
            "investing",
            "--window-radius",
            "3",
            "--format",
            "table",
        ])
        .expect("must parse");

        assert_eq!(cli.format, OutputFormat::Table);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.sources, ["stocks", "investing"]);
        assert_eq!(args.window_radius, Some(3));
        assert_eq!(args.limit, None);
    }

    #[test]
    fn input_is_required_for_extract() {
        assert!(Cli::try_parse_from(["tickermood", "extract"]).is_err());
    }

    #[test]
    fn keywords_takes_no_arguments() {
        let cli = Cli::try_parse_from(["tickermood", "keywords", "--pretty"]).expect("must parse");
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Keywords));
    }
}
