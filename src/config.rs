use eyre::{Context, ContextCompat, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the source directory, in order of preference
const CONFIG_CANDIDATES: [&str; 4] = [".featpp.yaml", ".featpp.yml", "featpp.yaml", "featpp.yml"];

/// Build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Extensions of files run through the preprocessor; everything else is copied as-is
    pub extensions: Vec<String>,
    /// Names skipped when the source root has no ignore file
    pub skip: Vec<String>,
    /// Name of the ignore file looked up at the source root
    pub ignore_file: String,
}

impl Config {
    /// Load configuration, preferring an explicit path over the search locations
    pub fn load(config_path: Option<&PathBuf>, source_dir: &Path) -> Result<Self> {
        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(eyre::eyre!("Config file not found: {}", path.display()));
                }
                path.clone()
            }
            None => match Self::default_config_path(source_dir) {
                Ok(path) => path,
                Err(e) => {
                    log::debug!("No user config directory: {}", e);
                    return Ok(Self::default());
                }
            },
        };

        if !config_file.exists() {
            return Ok(Self::default());
        }

        log::debug!("Loading config from {}", config_file.display());
        let content = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_file.display()))
    }

    /// Parse configuration from YAML; missing fields keep their defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Get the configuration file path for a source directory
    fn default_config_path(source_dir: &Path) -> Result<PathBuf> {
        for candidate in CONFIG_CANDIDATES {
            let path = source_dir.join(candidate);
            if path.exists() {
                return Ok(path);
            }
        }

        let config_dir = dirs::config_local_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .context("Could not determine config directory")?;

        Ok(config_dir.join("featpp").join("config.yaml"))
    }

    /// Check whether a file should be run through the preprocessor
    pub fn is_processed(&self, file_path: &Path) -> bool {
        let Some(ext) = file_path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        self.extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.') == ext)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: [".js", ".ts", ".jsx", ".py", ".txt", ".html", ".css"]
                .into_iter()
                .map(String::from)
                .collect(),
            skip: ["node_modules", "dist", ".git", ".DS_Store"]
                .into_iter()
                .map(String::from)
                .collect(),
            ignore_file: ".featppignore".to_string(),
        }
    }
}
