//! Locale-aware amount formatting.

use rust_decimal::Decimal;

use super::language::Language;

/// Formats an amount with the language's digit grouping.
///
/// Whole amounts carry no fractional part; any non-zero fraction is kept
/// after the language's decimal separator.
///
/// # Example
///
/// ```
/// use tuition_engine::i18n::{Language, format_amount};
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(1_173_750), Language::Turkish), "1.173.750");
/// assert_eq!(format_amount(Decimal::from(1_173_750), Language::English), "1,173,750");
/// ```
pub fn format_amount(amount: Decimal, language: Language) -> String {
    let normalized = amount.normalize();
    let digits = normalized.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if normalized.is_sign_negative() && !normalized.is_zero() {
        grouped.push('-');
    }
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(language.group_separator());
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push(language.decimal_separator());
        grouped.push_str(fraction);
    }
    grouped
}
