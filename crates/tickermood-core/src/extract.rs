//! Mention window extraction.
//!
//! A normalized text is split into sentences; every sentence that contains a
//! keyword yields either the whole cleaned sentence (short sentences) or one
//! bounded word window per occurrence (long sentences).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{clean_sentence, normalize, KeywordSet, StopWords, ValidationError};

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is a valid regex"));

pub(crate) static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

const DEFAULT_MAX_SENTENCE_LENGTH: usize = 30;
const DEFAULT_WINDOW_RADIUS: usize = 5;

/// Whole-sentence vs windowed extraction thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Sentences with at most this many words are emitted whole.
    pub max_sentence_length: usize,
    /// Words kept on each side of an occurrence in a long sentence.
    pub window_radius: usize,
}

impl ExtractionConfig {
    pub fn new(max_sentence_length: usize, window_radius: usize) -> Result<Self, ValidationError> {
        let config = Self {
            max_sentence_length,
            window_radius,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sentence_length == 0 {
            return Err(ValidationError::ZeroValue {
                field: "max_sentence_length",
            });
        }
        if self.window_radius == 0 {
            return Err(ValidationError::ZeroValue {
                field: "window_radius",
            });
        }
        Ok(())
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_sentence_length: DEFAULT_MAX_SENTENCE_LENGTH,
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

/// Cleaned tokens around one keyword hit.
///
/// `keyword` records what triggered extraction; attribution is recomputed
/// from `tokens` during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionWindow {
    pub keyword: String,
    pub tokens: Vec<String>,
}

impl MentionWindow {
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Extract every mention window from a raw text blob.
///
/// Output order is sentence order, then keyword-set order, then occurrence
/// order. A sentence matching two keywords yields two windows.
pub fn extract_windows<S>(
    text: &str,
    keywords: &KeywordSet,
    config: &ExtractionConfig,
    stopwords: &S,
) -> Vec<MentionWindow>
where
    S: StopWords + ?Sized,
{
    let normalized = normalize(text);
    let mut windows = Vec::new();

    for sentence in SENTENCE_BREAK
        .split(&normalized)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
    {
        let words = WORD
            .find_iter(sentence)
            .map(|found| found.as_str())
            .collect::<Vec<_>>();
        let upper = words
            .iter()
            .map(|word| word.to_uppercase())
            .collect::<Vec<_>>();

        for keyword in keywords.iter() {
            if !upper.iter().any(|word| word == keyword) {
                continue;
            }

            if words.len() <= config.max_sentence_length {
                windows.push(MentionWindow {
                    keyword: keyword.to_owned(),
                    tokens: clean_sentence(sentence, stopwords),
                });
                continue;
            }

            for (index, _) in upper
                .iter()
                .enumerate()
                .filter(|(_, word)| *word == keyword)
            {
                let (start, end) = window_bounds(index, words.len(), config.window_radius);
                let context = words[start..end].join(" ");
                windows.push(MentionWindow {
                    keyword: keyword.to_owned(),
                    tokens: clean_sentence(&context, stopwords),
                });
            }
        }
    }

    windows
}

/// Half-open `[start, end)` slice of `radius` words on each side of `index`,
/// clamped to `[0, len)`.
fn window_bounds(index: usize, len: usize, radius: usize) -> (usize, usize) {
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).saturating_add(1).min(len);
    (start, end)
}
