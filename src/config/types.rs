//! Configuration types for the tuition calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::i18n::{Language, Translations};

fn default_data_file() -> PathBuf {
    PathBuf::from("data/fees.json")
}

/// Settings read from `calculator.yaml`.
///
/// # Example
///
/// ```
/// use tuition_engine::config::CalculatorSettings;
/// use tuition_engine::i18n::Language;
///
/// let settings: CalculatorSettings = serde_yaml::from_str("default_language: en").unwrap();
/// assert_eq!(settings.default_language, Language::English);
/// assert_eq!(settings.data_file.to_str(), Some("data/fees.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculatorSettings {
    /// Path to the JSON fee table. Relative paths are resolved against the
    /// parent of the configuration directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// The language used until the user switches.
    #[serde(default)]
    pub default_language: Language,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_language: Language::default(),
        }
    }
}

/// The complete calculator configuration.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    settings: CalculatorSettings,
    data_path: PathBuf,
    translations: Translations,
}

impl CalculatorConfig {
    /// Creates a configuration from its parts.
    pub fn new(settings: CalculatorSettings, data_path: PathBuf, translations: Translations) -> Self {
        Self {
            settings,
            data_path,
            translations,
        }
    }

    /// Returns the raw settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Returns the resolved path of the fee data file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Returns the default interface language.
    pub fn default_language(&self) -> Language {
        self.settings.default_language
    }

    /// Returns the loaded translations.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}
