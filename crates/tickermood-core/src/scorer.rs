use thiserror::Error;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Scorer failures. Fatal to a run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("compound score {value} for '{text}' is outside [-1, 1]")]
    OutOfRange { text: String, value: f64 },
    #[error("scorer returned no compound score for '{text}'")]
    MissingCompound { text: String },
    #[error("scorer failed: {message}")]
    Failed { message: String },
}

impl ScoreError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "score.out_of_range",
            Self::MissingCompound { .. } => "score.missing_compound",
            Self::Failed { .. } => "score.failed",
        }
    }
}

/// Maps a text to a compound polarity score in `[-1, 1]`.
///
/// Implementations must be deterministic for identical input.
pub trait SentimentScorer {
    fn compound_score(&self, text: &str) -> Result<f64, ScoreError>;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn compound_score(&self, text: &str) -> Result<f64, ScoreError> {
        (**self).compound_score(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Box<T> {
    fn compound_score(&self, text: &str) -> Result<f64, ScoreError> {
        (**self).compound_score(text)
    }
}

/// Reject scores outside the compound contract.
pub fn check_compound(text: &str, value: f64) -> Result<f64, ScoreError> {
    if value.is_finite() && (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScoreError::OutOfRange {
            text: text.to_owned(),
            value,
        })
    }
}

/// Lexicon-based scorer backed by VADER's compound score.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound_score(&self, text: &str) -> Result<f64, ScoreError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores
            .get("compound")
            .copied()
            .ok_or_else(|| ScoreError::MissingCompound {
                text: text.to_owned(),
            })?;
        check_compound(text, compound)
    }
}
