//! Supported interface languages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// An interface language.
///
/// # Example
///
/// ```
/// use tuition_engine::i18n::Language;
///
/// assert_eq!("en".parse::<Language>().unwrap(), Language::English);
/// assert_eq!(Language::default().code(), "tr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Language {
    /// Turkish, the default.
    #[default]
    #[strum(serialize = "tr")]
    Turkish,
    /// English.
    #[strum(serialize = "en")]
    English,
}

impl Language {
    /// Returns the two-letter language code.
    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    /// Returns the other language, as toggled by the language switcher.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Turkish => Language::English,
            Language::English => Language::Turkish,
        }
    }

    /// Thousands separator used when formatting amounts.
    pub fn group_separator(&self) -> char {
        match self {
            Language::Turkish => '.',
            Language::English => ',',
        }
    }

    /// Decimal separator used when formatting amounts.
    pub fn decimal_separator(&self) -> char {
        match self {
            Language::Turkish => ',',
            Language::English => '.',
        }
    }
}

impl TryFrom<String> for Language {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
