//! Configuration file types.
//!
//! A [`ConfigSpec`] describes how the summarizer and its surroundings are set
//! up: frequency keying, stop-word list, default export format and logging.
//! These types are the input to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "keying": "case_folded",
//!   "stopwords": { "source": "nltk", "extra": ["lorem"] },
//!   "export": { "format": "pdf" },
//!   "logging": { "format": "pretty", "level": "info" },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};
use crate::export::ExportFormat;
use crate::logging::LogFormat;
use crate::types::{FrequencyKeying, StopwordSource, SummarizerConfig};

/// Current config file version.
pub const CONFIG_VERSION: u32 = 1;

/// Top-level configuration (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSpec {
    /// Config version (currently `1`).
    pub v: u32,

    /// Frequency-table keying.
    #[serde(default)]
    pub keying: FrequencyKeying,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    #[serde(default)]
    pub export: ExportSpec,

    #[serde(default)]
    pub logging: LoggingSpec,

    /// Treat unrecognized fields as errors.
    #[serde(default)]
    pub strict: bool,

    /// Leftover top-level keys, reported by validation.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for ConfigSpec {
    fn default() -> Self {
        Self {
            v: CONFIG_VERSION,
            keying: FrequencyKeying::default(),
            stopwords: StopwordSpec::default(),
            export: ExportSpec::default(),
            logging: LoggingSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl ConfigSpec {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SummarizeError::Config(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The engine settings described by this config.
    pub fn summarizer_config(&self) -> SummarizerConfig {
        SummarizerConfig {
            keying: self.keying,
            stopwords: self.stopwords.source,
            extra_stopwords: self.stopwords.extra.clone(),
        }
    }
}

/// Stop-word list selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    #[serde(default)]
    pub source: StopwordSource,

    /// Words added on top of the selected list.
    #[serde(default)]
    pub extra: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Export defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSpec {
    #[serde(default)]
    pub format: ExportFormat,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Logging output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSpec {
    #[serde(default)]
    pub format: LogFormat,

    /// Default filter directive when `RUST_LOG` is unset (e.g. `"info"`).
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for LoggingSpec {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_log_level(),
            unknown_fields: HashMap::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
