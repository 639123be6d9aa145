use thiserror::Error;

use crate::scorer::ScoreError;
use crate::source::SourceError;

/// Validation and contract errors exposed by `tickermood-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("display name for '{symbol}' cannot be empty")]
    EmptyDisplayName { symbol: String },
    #[error("instrument catalog must contain at least one instrument")]
    EmptyCatalog,
    #[error("symbol '{symbol}' appears more than once in the instrument catalog")]
    DuplicateSymbol { symbol: String },

    #[error("field '{field}' must be greater than zero")]
    ZeroValue { field: &'static str },
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("run_id must be at least 8 characters")]
    InvalidRunId,
}

/// Top-level error type for pipeline operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
