//! Configuration loading from a TOML file, overridden by CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetLoader;
use crate::types::{GraphError, GraphResult, DEFAULT_DELIMITER, DEFAULT_STORY_SEPARATOR};

/// Investigation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Field delimiter of dataset rows.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Separator between story ids in the stories field.
    #[serde(default = "default_story_separator")]
    pub story_separator: char,
    /// URL prefix for story title lookup. No lookup when unset.
    #[serde(default)]
    pub title_url: Option<String>,
    /// Where to write the TGF export, if anywhere.
    #[serde(default)]
    pub tgf_output: Option<PathBuf>,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_story_separator() -> char {
    DEFAULT_STORY_SEPARATOR
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            story_separator: default_story_separator(),
            title_url: None,
            tgf_output: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// A dataset loader using this configuration's separators.
    pub fn loader(&self) -> DatasetLoader {
        DatasetLoader::new()
            .delimiter(self.delimiter)
            .story_separator(self.story_separator)
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> GraphResult<Config> {
    toml::from_str(content).map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))
}
