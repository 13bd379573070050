use markdown_digest_engine::{Markdown, MetadataExtension, SnippetExtension};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {config_path}: snippet.max_len must be greater than 0")]
    InvalidSnippetLength { config_path: PathBuf },
}

/// Which extensions a pipeline gets, and how they are tuned.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub metadata: MetadataConfig,
    pub snippet: SnippetConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    pub enabled: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    pub enabled: bool,
    /// Snippet capacity in bytes.
    pub max_len: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_len: DEFAULT_SNIPPET_LEN,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // A zero capacity would silently empty every snippet.
        if config.snippet.enabled && config.snippet.max_len == 0 {
            return Err(ConfigError::InvalidSnippetLength {
                config_path: config_path.to_path_buf(),
            });
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-digest");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds a pipeline with the enabled extensions installed.
    pub fn markdown(&self) -> Markdown {
        let mut builder = Markdown::builder();
        if self.metadata.enabled {
            builder = builder.extension(MetadataExtension);
        }
        if self.snippet.enabled {
            builder = builder.extension(SnippetExtension::new(self.snippet.max_len));
        }
        builder.build()
    }
}
