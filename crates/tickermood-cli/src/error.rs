use thiserror::Error;

use tickermood_core::{CoreError, ScoreError, SourceError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Source(_) => 3,
            Self::Score(_) | Self::Serialization(_) => 4,
            Self::Io { .. } => 10,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Source(error) => Self::Source(error),
            CoreError::Score(error) => Self::Score(error),
            CoreError::Serialization(error) => Self::Serialization(error),
            CoreError::Io { path, source } => Self::Io { path, source },
        }
    }
}
