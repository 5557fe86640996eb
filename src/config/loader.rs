//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{QuoteError, QuoteResult};
use crate::i18n::Translations;

use super::types::{CalculatorConfig, CalculatorSettings};

/// Loads calculator configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── calculator.yaml    # Data file location and default language
/// └── translations.yaml  # Turkish and English strings
/// ```
///
/// # Example
///
/// ```no_run
/// use tuition_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config")?;
/// println!("Fee data: {}", config.data_path().display());
/// # Ok::<(), tuition_engine::error::QuoteError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns the configuration on success, or an error if:
    /// - either file is missing (`ConfigNotFound`)
    /// - either file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> QuoteResult<CalculatorConfig> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalculatorSettings>(&path.join("calculator.yaml"))?;
        let translations = Self::load_translations(&path.join("translations.yaml"))?;
        let data_path = Self::resolve_data_path(path, &settings.data_file);

        info!(
            config_dir = %path.display(),
            data_path = %data_path.display(),
            default_language = %settings.default_language,
            "Calculator configuration loaded"
        );

        Ok(CalculatorConfig::new(settings, data_path, translations))
    }

    fn read_file(path: &Path) -> QuoteResult<String> {
        fs::read_to_string(path).map_err(|_| QuoteError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> QuoteResult<T> {
        let content = Self::read_file(path)?;
        serde_yaml::from_str(&content).map_err(|e| QuoteError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn load_translations(path: &Path) -> QuoteResult<Translations> {
        let content = Self::read_file(path)?;
        Translations::from_yaml_str(&content).map_err(|e| QuoteError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Resolves a relative data file against the config directory's parent.
    fn resolve_data_path(config_dir: &Path, data_file: &Path) -> PathBuf {
        if data_file.is_absolute() {
            return data_file.to_path_buf();
        }
        config_dir
            .parent()
            .unwrap_or(config_dir)
            .join(data_file)
    }
}
