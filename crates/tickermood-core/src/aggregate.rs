use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    InstrumentCatalog, KeywordIndex, MentionWindow, ScoreError, SentimentScorer, Symbol,
};

/// Final per-ticker value: a mean score or an explicit "no data" marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum TickerScore {
    Average(f64),
    NoData,
}

impl TickerScore {
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            Self::NoData
        } else {
            Self::Average(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }

    pub const fn average(self) -> Option<f64> {
        match self {
            Self::Average(value) => Some(value),
            Self::NoData => None,
        }
    }
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSentiment {
    pub symbol: Symbol,
    pub name: String,
    pub mentions: usize,
    pub score: TickerScore,
}

/// Per-ticker results in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub tickers: Vec<TickerSentiment>,
    /// Windows whose tokens no longer resolved to any instrument.
    pub unattributed: usize,
}

impl SentimentReport {
    pub fn get(&self, symbol: &str) -> Option<&TickerSentiment> {
        self.tickers
            .iter()
            .find(|ticker| ticker.symbol.as_str() == symbol)
    }
}

/// Score every window and average the scores per instrument.
pub fn aggregate<S>(
    windows: &[MentionWindow],
    catalog: &InstrumentCatalog,
    scorer: &S,
) -> Result<SentimentReport, ScoreError>
where
    S: SentimentScorer + ?Sized,
{
    let index = KeywordIndex::new(catalog);
    aggregate_indexed(windows, catalog, &index, scorer)
}

/// [`aggregate`] with a prebuilt index.
///
/// Each window is credited to the first token resolving to an instrument;
/// windows with no resolvable token are dropped.
pub fn aggregate_indexed<S>(
    windows: &[MentionWindow],
    catalog: &InstrumentCatalog,
    index: &KeywordIndex,
    scorer: &S,
) -> Result<SentimentReport, ScoreError>
where
    S: SentimentScorer + ?Sized,
{
    // Accumulator slots follow catalog order, one per symbol.
    let mut accumulators: Vec<(&Symbol, Vec<f64>)> = catalog
        .iter()
        .map(|instrument| (&instrument.symbol, Vec::new()))
        .collect();
    let mut unattributed = 0;

    for window in windows {
        let text = window.text();
        let score = scorer.compound_score(&text)?;

        let resolved = window
            .tokens
            .iter()
            .find_map(|token| index.resolve(&token.to_uppercase()));

        match resolved.and_then(|symbol| {
            accumulators
                .iter_mut()
                .find(|(slot, _)| *slot == symbol)
        }) {
            Some((symbol, scores)) => {
                trace!(symbol = %symbol, score, text = %text, "window attributed");
                scores.push(score);
            }
            None => {
                trace!(keyword = %window.keyword, text = %text, "window unattributed");
                unattributed += 1;
            }
        }
    }

    let tickers = catalog
        .iter()
        .zip(accumulators)
        .map(|(instrument, (_, scores))| TickerSentiment {
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            mentions: scores.len(),
            score: TickerScore::from_scores(&scores),
        })
        .collect();

    Ok(SentimentReport {
        tickers,
        unattributed,
    })
}
