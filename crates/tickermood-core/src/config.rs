use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CoreError, ExtractionConfig, FetchRequest, InstrumentCatalog, ValidationError};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "TICKERMOOD_CONFIG";

const DEFAULT_SOURCES: [&str; 2] = ["stocks", "investing"];
const DEFAULT_LIMIT: usize = 30;

/// Run configuration. Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub instruments: InstrumentCatalog,
    pub sources: Vec<String>,
    pub limit: usize,
    pub extraction: ExtractionConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            instruments: InstrumentCatalog::default(),
            sources: DEFAULT_SOURCES.iter().map(|s| (*s).to_owned()).collect(),
            limit: DEFAULT_LIMIT,
            extraction: ExtractionConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.extraction.validate()?;
        if self.limit == 0 {
            return Err(ValidationError::ZeroValue { field: "limit" });
        }
        if self.sources.is_empty() || self.sources.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptyField { field: "sources" });
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let config = serde_json::from_str::<Self>(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Explicit path, then [`CONFIG_ENV_VAR`], then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CoreError> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });

        match path {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn fetch_request(&self) -> Result<FetchRequest, CoreError> {
        Ok(FetchRequest::new(self.sources.clone(), self.limit)?)
    }
}
