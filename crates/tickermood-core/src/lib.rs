//! Core contracts for tickermood.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Keyword index, text normalization and token cleaning
//! - Mention window extraction and per-ticker sentiment aggregation
//! - Content source / scorer / stop-word seams and the pipeline that wires them

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod source;
pub mod stopwords;
pub mod tokens;

pub use aggregate::{aggregate, aggregate_indexed, SentimentReport, TickerScore, TickerSentiment};
pub use config::{PipelineConfig, CONFIG_ENV_VAR};
pub use domain::{Instrument, InstrumentCatalog, RawTextRecord, Symbol, UtcDateTime};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use extract::{extract_windows, ExtractionConfig, MentionWindow};
pub use keywords::{build_keyword_set, resolve_symbol, KeywordIndex, KeywordSet};
pub use normalize::normalize;
pub use pipeline::{is_relevant, record_texts, Extraction, PipelineReport, RunStats, SentimentPipeline};
pub use scorer::{ScoreError, SentimentScorer, VaderScorer};
pub use source::{ContentSource, FetchRequest, SourceError, SourceErrorKind, StaticSource};
pub use stopwords::EnglishStopWords;
pub use tokens::{clean_sentence, clean_token, StopWords};
