use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::extract::WORD;
use crate::{
    aggregate_indexed, extract_windows, normalize, ContentSource, CoreError, ExtractionConfig,
    FetchRequest, InstrumentCatalog, KeywordIndex, KeywordSet, MentionWindow, RawTextRecord,
    SentimentReport, SentimentScorer, StopWords,
};

/// True when the title or body names a keyword. Comments never count.
pub fn is_relevant(record: &RawTextRecord, keywords: &KeywordSet) -> bool {
    let headline = format!("{} {}", record.title, record.body_text());
    WORD
        .find_iter(&headline)
        .any(|found| keywords.contains(&found.as_str().to_uppercase()))
}

/// Normalized title, body and comments of a record, skipping an empty title
/// or body.
pub fn record_texts(record: &RawTextRecord) -> Vec<String> {
    let mut texts = Vec::with_capacity(record.comments.len() + 2);
    if !record.title.is_empty() {
        texts.push(normalize(&record.title));
    }
    if !record.body_text().is_empty() {
        texts.push(normalize(record.body_text()));
    }
    texts.extend(record.comments.iter().map(|comment| normalize(comment)));
    texts
}

/// Counters describing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub records_fetched: usize,
    pub records_relevant: usize,
    pub texts: usize,
    pub windows: usize,
    pub unattributed: usize,
}

/// Report plus run statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub sentiment: SentimentReport,
    pub stats: RunStats,
}

/// Windows collected from a batch of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub windows: Vec<MentionWindow>,
    pub stats: RunStats,
}

/// Batch pipeline: relevant records → texts → windows → per-ticker averages.
///
/// The scorer and stop words are owned by the pipeline; the content source is
/// supplied per run.
#[derive(Debug)]
pub struct SentimentPipeline<S, W> {
    catalog: InstrumentCatalog,
    index: KeywordIndex,
    extraction: ExtractionConfig,
    scorer: S,
    stopwords: W,
}

impl<S, W> SentimentPipeline<S, W>
where
    S: SentimentScorer,
    W: StopWords,
{
    pub fn new(
        catalog: InstrumentCatalog,
        extraction: ExtractionConfig,
        scorer: S,
        stopwords: W,
    ) -> Self {
        let index = KeywordIndex::new(&catalog);
        Self {
            catalog,
            index,
            extraction,
            scorer,
            stopwords,
        }
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    pub fn keywords(&self) -> &KeywordSet {
        self.index.keywords()
    }

    pub fn extraction_config(&self) -> &ExtractionConfig {
        &self.extraction
    }

    /// Windows from every text of every relevant record.
    pub fn extract(&self, records: &[RawTextRecord]) -> Extraction {
        let keywords = self.index.keywords();
        let mut stats = RunStats {
            records_fetched: records.len(),
            ..RunStats::default()
        };
        let mut windows = Vec::new();

        for record in records.iter().filter(|record| is_relevant(record, keywords)) {
            stats.records_relevant += 1;
            for text in record_texts(record) {
                stats.texts += 1;
                windows.extend(extract_windows(
                    &text,
                    keywords,
                    &self.extraction,
                    &self.stopwords,
                ));
            }
        }

        stats.windows = windows.len();
        if stats.records_fetched > 0 && stats.records_relevant == 0 {
            warn!(
                records = stats.records_fetched,
                "no fetched record mentions a tracked instrument"
            );
        }
        debug!(
            records = stats.records_fetched,
            relevant = stats.records_relevant,
            texts = stats.texts,
            windows = stats.windows,
            "extraction finished"
        );

        Extraction { windows, stats }
    }

    /// Extract and aggregate an already-fetched batch.
    pub fn analyze_records(&self, records: &[RawTextRecord]) -> Result<PipelineReport, CoreError> {
        let Extraction { windows, mut stats } = self.extract(records);
        let sentiment = aggregate_indexed(&windows, &self.catalog, &self.index, &self.scorer)?;
        stats.unattributed = sentiment.unattributed;
        debug!(
            windows = stats.windows,
            unattributed = stats.unattributed,
            "aggregation finished"
        );
        Ok(PipelineReport { sentiment, stats })
    }

    /// Fetch from `source` and run the full pipeline. Source and scorer
    /// failures propagate unchanged.
    pub fn run<C>(&self, source: &C, req: &FetchRequest) -> Result<PipelineReport, CoreError>
    where
        C: ContentSource + ?Sized,
    {
        let records = source.fetch_records(req)?;
        debug!(
            source = source.id(),
            sources = ?req.sources,
            limit = req.limit,
            records = records.len(),
            "records fetched"
        );
        self.analyze_records(&records)
    }
}
