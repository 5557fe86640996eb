//! Translation tables.
//!
//! Translations are authored as nested YAML maps per language and flattened
//! into dotted keys (`results.fields.totalTuitionFee`). Option labels live
//! under `fields.<field>.options.<value>`, keyed by the raw data value.

use std::collections::HashMap;

use serde_yaml::Value;
use tracing::warn;

use super::language::Language;

/// Translation strings for every supported language.
///
/// # Example
///
/// ```
/// use tuition_engine::i18n::{Language, Translations};
///
/// let translations = Translations::fallback();
/// assert_eq!(
///     translations.translate(Language::English, "page.stepCounter", &[("current", "2"), ("total", "3")]),
///     "Step 2 / 3"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Translations {
    /// Parses translations from YAML with one top-level map per language code.
    ///
    /// Unknown language codes are ignored.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let root: HashMap<String, Value> = serde_yaml::from_str(content)?;
        let mut tables = HashMap::new();
        for (code, tree) in root {
            let Ok(language) = code.parse::<Language>() else {
                warn!(language = %code, "Ignoring translations for unsupported language");
                continue;
            };
            let mut table = HashMap::new();
            flatten_into(&mut table, String::new(), &tree);
            tables.insert(language, table);
        }
        Ok(Self { tables })
    }

    /// The minimal built-in table used when no translation file is available.
    pub fn fallback() -> Self {
        let turkish = [
            ("page.title", "Ücret Simülatörü"),
            ("page.stepCounter", "Adım {current} / {total}"),
            ("buttons.next", "Devam Et"),
            ("buttons.back", "Geri"),
            ("buttons.calculate", "Sonucu Hesapla"),
        ];
        let english = [
            ("page.title", "Tuition Calculator"),
            ("page.stepCounter", "Step {current} / {total}"),
            ("buttons.next", "Continue"),
            ("buttons.back", "Back"),
            ("buttons.calculate", "Calculate Result"),
        ];

        let table = |entries: [(&str, &str); 5]| -> HashMap<String, String> {
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        };

        let mut tables = HashMap::new();
        tables.insert(Language::Turkish, table(turkish));
        tables.insert(Language::English, table(english));
        Self { tables }
    }

    /// Returns true if translations exist for `language`.
    pub fn supports(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Looks up a key without any fallback.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables.get(&language)?.get(key).map(String::as_str)
    }

    /// Translates `key`, substituting `{name}` placeholders from `params`.
    ///
    /// A missing key is logged and returned as-is. Placeholders without a
    /// matching parameter are left untouched.
    pub fn translate(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String {
        match self.get(language, key) {
            Some(template) => substitute(template, params),
            None => {
                warn!(key, language = %language, "Translation key not found");
                key.to_string()
            }
        }
    }

    /// Returns the label for a raw option value, or the value itself.
    pub fn option_label(&self, language: Language, field: &str, value: &str) -> String {
        let key = format!("fields.{}.options.{}", field, value);
        self.get(language, &key)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())
    }
}

fn flatten_into(table: &mut HashMap<String, String>, prefix: String, node: &Value) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match node {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                let Some(key) = scalar_text(key) else {
                    continue;
                };
                flatten_into(table, join(&key), child);
            }
        }
        Value::Tagged(tagged) => flatten_into(table, prefix, &tagged.value),
        other => {
            if let Some(text) = scalar_text(other) {
                table.insert(prefix, text);
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(param, _)| *param == name) {
                    Some((_, value)) => output.push_str(value),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
tr:
  results:
    title: "Hesaplama Sonucu"
  fields:
    waivers:
      options:
        "Koç Group Retiree": "Koç Topluluğu Emeklisi"
    admitYear:
      options:
        2024: "2024-2025"
en:
  results:
    title: "Calculation Result"
de:
  results:
    title: "Ergebnis"
"#;

    #[test]
    fn test_nested_keys_are_flattened() {
        let translations = Translations::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(
            translations.get(Language::Turkish, "results.title"),
            Some("Hesaplama Sonucu")
        );
        assert_eq!(
            translations.get(Language::English, "results.title"),
            Some("Calculation Result")
        );
    }

    #[test]
    fn test_unsupported_language_is_ignored() {
        let translations = Translations::from_yaml_str(SAMPLE).unwrap();
        assert!(translations.supports(Language::Turkish));
        assert!(translations.supports(Language::English));
        assert_eq!(translations.tables.len(), 2);
    }

    #[test]
    fn test_option_label_translates_raw_value() {
        let translations = Translations::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(
            translations.option_label(Language::Turkish, "waivers", "Koç Group Retiree"),
            "Koç Topluluğu Emeklisi"
        );
        assert_eq!(
            translations.option_label(Language::Turkish, "admitYear", "2024"),
            "2024-2025"
        );
    }

    #[test]
    fn test_option_label_falls_back_to_value() {
        let translations = Translations::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(
            translations.option_label(Language::English, "waivers", "Koç Group Retiree"),
            "Koç Group Retiree"
        );
    }

    #[test]
    fn test_missing_key_returns_key() {
        let translations = Translations::fallback();
        assert_eq!(
            translations.translate(Language::English, "results.noDataFound", &[]),
            "results.noDataFound"
        );
    }

    #[test]
    fn test_placeholders_are_substituted() {
        let translations = Translations::fallback();
        assert_eq!(
            translations.translate(
                Language::Turkish,
                "page.stepCounter",
                &[("current", "1"), ("total", "3")]
            ),
            "Adım 1 / 3"
        );
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        assert_eq!(substitute("Step {current} / {total}", &[("current", "2")]), "Step 2 / {total}");
        assert_eq!(substitute("open { brace", &[]), "open { brace");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Translations::from_yaml_str("tr: [unclosed").is_err());
    }
}
