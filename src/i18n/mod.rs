//! Localization: interface languages, translation tables and amount
//! formatting.

mod format;
mod language;
mod translations;

pub use format::format_amount;
pub use language::Language;
pub use translations::Translations;
