//! Behavior-driven tests for error handling
//!
//! These tests verify HOW failures surface: collaborator errors are fatal and
//! propagate unchanged, while missing data is tolerated.

use std::io::Write;

use tickermood_core::{
    ContentSource, CoreError, EnglishStopWords, ExtractionConfig, FetchRequest,
    InstrumentCatalog, PipelineConfig, RawTextRecord, ScoreError, SentimentPipeline,
    SourceError, SourceErrorKind, StaticSource, TickerScore, ValidationError,
};
use tickermood_tests::{request, FailingScorer, FixedScorer};

struct OfflineSource;

impl ContentSource for OfflineSource {
    fn id(&self) -> &str {
        "offline"
    }

    fn fetch_records(&self, _req: &FetchRequest) -> Result<Vec<RawTextRecord>, SourceError> {
        Err(SourceError::unavailable("upstream returned 503"))
    }
}


// =============================================================================
// Error Handling: Collaborator failures
// =============================================================================

#[test]
fn when_content_source_fails_run_returns_the_source_error_unchanged() {
    // Given: A pipeline wired to a source that is down
    let pipeline = SentimentPipeline::new(
        InstrumentCatalog::default(),
        ExtractionConfig::default(),
        FixedScorer(0.0),
        EnglishStopWords::new(),
    );

    // When: The run starts
    let err = pipeline.run(&OfflineSource, &request(&["stocks"])).expect_err("must fail");

    // Then: The source error surfaces with its classification intact
    let source_error = match err {
        CoreError::Source(source_error) => source_error,
        other => panic!("expected source error, got {other:?}"),
    };
    assert_eq!(source_error.kind(), SourceErrorKind::Unavailable);
    assert!(source_error.retryable());
    assert_eq!(source_error.code(), "source.unavailable");
}

#[test]
fn when_scorer_fails_run_aborts_without_partial_report() {
    // Given: A relevant post and a broken scorer
    let source = StaticSource::new("fixture")
        .with_feed("stocks", vec![RawTextRecord::new("AAPL breaks out")]);
    let pipeline = SentimentPipeline::new(
        InstrumentCatalog::default(),
        ExtractionConfig::default(),
        FailingScorer,
        EnglishStopWords::new(),
    );

    // When: The run reaches aggregation
    let err = pipeline.run(&source, &request(&["stocks"])).expect_err("must fail");

    // Then: The scorer error propagates
    assert!(matches!(err, CoreError::Score(ScoreError::Failed { .. })));
}

#[test]
fn scorer_is_not_called_when_nothing_is_extracted() {
    // Given: A feed with no relevant posts and a broken scorer
    let source = StaticSource::new("fixture")
        .with_feed("stocks", vec![RawTextRecord::new("bonds are boring")]);
    let pipeline = SentimentPipeline::new(
        InstrumentCatalog::default(),
        ExtractionConfig::default(),
        FailingScorer,
        EnglishStopWords::new(),
    );

    // When: The run completes
    let report = pipeline.run(&source, &request(&["stocks"])).expect("must succeed");

    // Then: Every ticker reports no data
    assert!(report
        .sentiment
        .tickers
        .iter()
        .all(|t| t.score == TickerScore::NoData));
}

// =============================================================================
// Error Handling: Tolerated input
// =============================================================================

#[test]
fn absent_body_is_treated_as_empty() {
    // Given: A feed document whose records omit body and comments
    let source = StaticSource::from_json_str(
        "fixture",
        r#"{"stocks":[{"title":"TSLA recall news"},{"title":"Amazon","body":null}]}"#,
    )
    .expect("valid document");
    let pipeline = SentimentPipeline::new(
        InstrumentCatalog::default(),
        ExtractionConfig::default(),
        FixedScorer(0.0),
        EnglishStopWords::new(),
    );

    // When: The pipeline runs
    let report = pipeline.run(&source, &request(&["stocks"])).expect("must run");

    // Then: Only titles are processed and both tickers are attributed
    assert_eq!(report.stats.texts, 2);
    assert_eq!(report.sentiment.get("TSLA").map(|t| t.mentions), Some(1));
    assert_eq!(report.sentiment.get("AMZN").map(|t| t.mentions), Some(1));
}

#[test]
fn malformed_feed_document_is_rejected() {
    let err = StaticSource::from_json_str("fixture", r#"{"stocks": "not a list"}"#)
        .expect_err("must fail");
    assert_eq!(err.kind(), SourceErrorKind::Malformed);
    assert_eq!(err.code(), "source.malformed");
}

// =============================================================================
// Error Handling: Configuration
// =============================================================================

#[test]
fn config_file_with_invalid_radius_is_a_validation_error() {
    // Given: A config file with a zero window radius
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"extraction":{{"window_radius":0}}}}"#).expect("write");

    // When: The config is loaded
    let err = PipelineConfig::load(Some(file.path())).expect_err("must fail");

    // Then: The field is named in the error
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::ZeroValue {
            field: "window_radius"
        })
    ));
}

#[test]
fn config_with_unknown_field_is_rejected() {
    let err = PipelineConfig::from_json_str(r#"{"subreddits":["stocks"]}"#)
        .expect_err("must fail");
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn catalog_accepts_unconventional_symbols_but_not_blank_ones() {
    // Given: A share-class symbol and a numeric exchange code
    let catalog = InstrumentCatalog::from_pairs([("brk.b", "Berkshire"), ("7203", "Toyota")])
        .expect("non-empty symbols are valid");

    // Then: Both are kept, uppercased
    let symbols: Vec<&str> = catalog.iter().map(|i| i.symbol.as_str()).collect();
    assert_eq!(symbols, ["BRK.B", "7203"]);

    // And: A blank symbol is still rejected
    let err = InstrumentCatalog::from_pairs([("  ", "Nobody")]).expect_err("must fail");
    assert_eq!(err, ValidationError::EmptySymbol);
}
