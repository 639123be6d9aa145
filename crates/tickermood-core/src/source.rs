use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Deserialize;

use crate::RawTextRecord;

/// Content-source error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidRequest,
    Malformed,
    Internal,
}

/// Structured content-source error. Propagated unchanged by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Malformed,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Malformed => "source.malformed",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Which feeds to read and how many records to take from each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub sources: Vec<String>,
    pub limit: usize,
}

impl FetchRequest {
    pub fn new(sources: Vec<String>, limit: usize) -> Result<Self, SourceError> {
        if sources.is_empty() {
            return Err(SourceError::invalid_request(
                "fetch request must include at least one source",
            ));
        }
        if sources.iter().any(|source| source.trim().is_empty()) {
            return Err(SourceError::invalid_request(
                "source names must not be blank",
            ));
        }
        if limit == 0 {
            return Err(SourceError::invalid_request(
                "fetch request limit must be greater than zero",
            ));
        }
        Ok(Self { sources, limit })
    }
}

/// Supplier of raw post/comment records.
pub trait ContentSource: Send + Sync {
    fn id(&self) -> &str;
    fn fetch_records(&self, req: &FetchRequest) -> Result<Vec<RawTextRecord>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct SourcedRecord {
    source: String,
    #[serde(flatten)]
    record: RawTextRecord,
}

/// Pre-collected feeds keyed by source name.
///
/// Loaded from JSON (`{"stocks": [record, ...], ...}`) or NDJSON (one record
/// per line carrying a `source` field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    id: String,
    feeds: BTreeMap<String, Vec<RawTextRecord>>,
}

impl StaticSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            feeds: BTreeMap::new(),
        }
    }

    pub fn with_feed(mut self, source: impl Into<String>, records: Vec<RawTextRecord>) -> Self {
        self.feeds.entry(source.into()).or_default().extend(records);
        self
    }

    pub fn from_json_str(id: impl Into<String>, input: &str) -> Result<Self, SourceError> {
        let feeds = serde_json::from_str::<BTreeMap<String, Vec<RawTextRecord>>>(input)
            .map_err(|error| SourceError::malformed(format!("invalid feed document: {error}")))?;
        Ok(Self {
            id: id.into(),
            feeds,
        })
    }

    pub fn from_ndjson_str(id: impl Into<String>, input: &str) -> Result<Self, SourceError> {
        let mut source = Self::new(id);
        for (line_no, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parsed = serde_json::from_str::<SourcedRecord>(line).map_err(|error| {
                SourceError::malformed(format!("invalid record on line {}: {error}", line_no + 1))
            })?;
            source
                .feeds
                .entry(parsed.source)
                .or_default()
                .push(parsed.record);
        }
        Ok(source)
    }

    /// Load a feed file; `.ndjson` / `.jsonl` select the line format.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let id = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|error| SourceError::unavailable(format!("failed to read '{id}': {error}")))?;

        let line_delimited = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "ndjson" | "jsonl"));

        if line_delimited {
            Self::from_ndjson_str(id, &contents)
        } else {
            Self::from_json_str(id, &contents)
        }
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.feeds.keys().map(String::as_str)
    }
}

impl ContentSource for StaticSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_records(&self, req: &FetchRequest) -> Result<Vec<RawTextRecord>, SourceError> {
        let mut records = Vec::new();
        for name in &req.sources {
            let feed = self.feeds.get(name).ok_or_else(|| {
                SourceError::invalid_request(format!("unknown source '{name}' in '{}'", self.id))
            })?;
            records.extend(feed.iter().take(req.limit).cloned());
        }
        Ok(records)
    }
}
