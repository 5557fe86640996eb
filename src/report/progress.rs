//! Step progress labels.

use crate::i18n::{Language, Translations};
use crate::wizard::WizardStep;

/// Returns the translated "Step n / 3" counter for a step.
///
/// # Example
///
/// ```
/// use tuition_engine::i18n::{Language, Translations};
/// use tuition_engine::report::step_counter;
/// use tuition_engine::wizard::WizardStep;
///
/// let translations = Translations::fallback();
/// assert_eq!(
///     step_counter(WizardStep::FinalDetails, &translations, Language::English),
///     "Step 3 / 3"
/// );
/// ```
pub fn step_counter(step: WizardStep, translations: &Translations, language: Language) -> String {
    let current = step.number().to_string();
    let total = WizardStep::MAX_STEPS.to_string();
    translations.translate(
        language,
        "page.stepCounter",
        &[("current", current.as_str()), ("total", total.as_str())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_counter() {
        let translations = Translations::fallback();
        assert_eq!(
            step_counter(WizardStep::BasicInfo, &translations, Language::Turkish),
            "Adım 1 / 3"
        );
    }
}
