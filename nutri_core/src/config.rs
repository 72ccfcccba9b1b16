//! Configuration file support for NutriGuide.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/nutriguide/config.toml`.

use crate::{ActivityLevel, Error, Goal, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATASET_FILE_NAME: &str = "Anuvaad_INDB_2024.11.csv";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub defaults: QueryDefaults,
}

/// Dataset location
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

/// Fallback values for query parameters the caller leaves out
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryDefaults {
    #[serde(default = "default_goal")]
    pub goal: String,

    #[serde(default = "default_diet")]
    pub diet: String,

    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_high_in_limit")]
    pub high_in_limit: usize,

    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            goal: default_goal(),
            diet: default_diet(),
            recommend_limit: default_recommend_limit(),
            search_limit: default_search_limit(),
            page_size: default_page_size(),
            high_in_limit: default_high_in_limit(),
            activity_level: default_activity_level(),
        }
    }
}

impl QueryDefaults {
    pub fn goal(&self) -> Goal {
        Goal::parse(&self.goal)
    }

    pub fn activity_level(&self) -> ActivityLevel {
        ActivityLevel::parse(&self.activity_level)
    }
}

// Default value functions
fn home_dir_or_cwd() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_dataset_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir_or_cwd().join(".local/share"));
    base.join("nutriguide").join(DATASET_FILE_NAME)
}

fn default_goal() -> String {
    "maintenance".into()
}

fn default_diet() -> String {
    "veg".into()
}

fn default_recommend_limit() -> usize {
    crate::recommend::DEFAULT_RECOMMEND_LIMIT
}

fn default_search_limit() -> usize {
    20
}

fn default_page_size() -> usize {
    50
}

fn default_high_in_limit() -> usize {
    crate::recommend::DEFAULT_HIGH_IN_LIMIT
}

fn default_activity_level() -> String {
    "moderate".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir_or_cwd().join(".config"));
        base.join("nutriguide").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
