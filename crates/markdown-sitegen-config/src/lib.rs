use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in a site directory by [`Config::default_path`].
pub const CONFIG_FILE_NAME: &str = "sitegen.toml";

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
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub markup: MarkupConfig,
}

/// Options that change the shape of the generated HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Element wrapping every block of a document.
    pub root_tag: String,
    /// When set, the rest of a fenced code block's opening line is read as
    /// an info string and emitted as `class="{prefix}{info}"`. When unset the
    /// fence interior is kept verbatim.
    pub code_language_prefix: Option<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            code_language_prefix: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
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

        Ok(Some(config))
    }

    /// Loads `sitegen.toml` from `site_dir`, falling back to defaults when absent.
    pub fn load_or_default<P: AsRef<Path>>(site_dir: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::default_path(site_dir))?.unwrap_or_default())
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

    pub fn default_path<P: AsRef<Path>>(site_dir: P) -> PathBuf {
        site_dir.as_ref().join(CONFIG_FILE_NAME)
    }
}
