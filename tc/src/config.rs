//! Configuration for tplcache

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::engine::RenderOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Language used for label fallback
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Directory holding `{locale}.yml` language files layered over the
    /// embedded tables
    #[serde(default)]
    pub lang_dir: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Nesting limit for partial includes
    #[serde(default = "default_max_include_depth")]
    pub max_include_depth: usize,

    /// Leave an HTML comment where a partial could not be included
    #[serde(default = "default_mark_missing_partials")]
    pub mark_missing_partials: bool,
}

fn default_locale() -> String {
    crate::DEFAULT_LOCALE.to_string()
}

fn default_max_include_depth() -> usize {
    crate::DEFAULT_MAX_INCLUDE_DEPTH
}

fn default_mark_missing_partials() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_include_depth: default_max_include_depth(),
            mark_missing_partials: default_mark_missing_partials(),
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            max_include_depth: config.max_include_depth,
            mark_missing_partials: config.mark_missing_partials,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            lang_dir: None,
            log_level: None,
            render: RenderConfig::default(),
        }
    }
}

/// Only the log level, so it can be read before the full config
#[derive(Deserialize)]
struct LogLevelOnly {
    #[serde(default)]
    log_level: Option<String>,
}

impl Config {
    /// Read just `log_level` from the first config file that has one
    ///
    /// Runs before logging is set up, so failures are silent here and get
    /// reported by the full [`Config::load`] afterwards.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::search_paths(config_path).into_iter().find_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            serde_yaml::from_str::<LogLevelOnly>(&content).ok()?.log_level
        })
    }

    fn search_paths(config_path: Option<&PathBuf>) -> Vec<PathBuf> {
        match config_path {
            Some(path) => vec![path.clone()],
            None => [
                Some(PathBuf::from("tplcache.yml")),
                dirs::config_dir().map(|p| p.join("tplcache").join("tplcache.yml")),
            ]
            .into_iter()
            .flatten()
            .collect(),
        }
    }

    /// Load config with fallback chain
    ///
    /// Explicit path, then `./tplcache.yml`, then
    /// `~/.config/tplcache/tplcache.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .wrap_err_with(|| format!("Failed to load config from {}", path.display()));
        }

        for path in Self::search_paths(None) {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        debug!("Config::load: no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.render)
    }
}
