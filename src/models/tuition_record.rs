//! Tuition record model.
//!
//! A [`TuitionRecord`] is one row of the fee table: the tuition charged for a
//! given admit year, academic program, admit type and citizenship.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The currency a tuition record is denominated in.
///
/// # Example
///
/// ```
/// use tuition_engine::models::Currency;
///
/// assert_eq!(Currency::from_label("Turkish Lira").code(), "TL");
/// assert_eq!(Currency::from_label("US Dollar").code(), "USD");
/// assert_eq!(Currency::from_label("Euro").code(), "Euro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// Turkish Lira, displayed as "TL".
    TurkishLira,
    /// US Dollar, displayed as "USD".
    USDollar,
    /// Any other currency; the label is displayed unchanged.
    Other(String),
}

impl Currency {
    /// Maps the data label (e.g. "Turkish Lira") to a currency.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Turkish Lira" => Currency::TurkishLira,
            "US Dollar" => Currency::USDollar,
            other => Currency::Other(other.to_string()),
        }
    }

    /// Returns the label used in the data file.
    pub fn label(&self) -> &str {
        match self {
            Currency::TurkishLira => "Turkish Lira",
            Currency::USDollar => "US Dollar",
            Currency::Other(label) => label,
        }
    }

    /// Returns the display code shown next to amounts.
    pub fn code(&self) -> &str {
        match self {
            Currency::TurkishLira => "TL",
            Currency::USDollar => "USD",
            Currency::Other(label) => label,
        }
    }
}

impl From<String> for Currency {
    fn from(label: String) -> Self {
        Currency::from_label(&label)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.label().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the tuition fee table.
///
/// Field names serialize to the flat keys used by the fee data file
/// (`Admit_Year`, `Academic_Program`, ...).
///
/// # Example
///
/// ```
/// use tuition_engine::models::{Currency, TuitionRecord};
/// use rust_decimal::Decimal;
///
/// let record = TuitionRecord {
///     admit_year: 2024,
///     academic_program: "Other".to_string(),
///     admit_type: "LYS".to_string(),
///     citizenship: "Turkish Citizen".to_string(),
///     tuition_fee: Some(Decimal::from(1_565_000)),
///     tuition_fall: Some(Decimal::from(782_500)),
///     tuition_spring: Some(Decimal::from(899_875)),
///     currency: Currency::TurkishLira,
/// };
/// assert!(record.is_valid());
/// assert!(record.has_installments());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitionRecord {
    /// The year of admission.
    #[serde(rename = "Admit_Year")]
    pub admit_year: i32,
    /// The academic program (e.g. "School of Medicine").
    #[serde(rename = "Academic_Program")]
    pub academic_program: String,
    /// The admission type (e.g. "LYS", "International").
    #[serde(rename = "Admit_Type")]
    pub admit_type: String,
    /// The citizenship category (e.g. "Turkish Citizen").
    #[serde(rename = "Citizenship")]
    pub citizenship: String,
    /// The annual tuition for a single payment.
    #[serde(rename = "Tuition_Fee", default)]
    pub tuition_fee: Option<Decimal>,
    /// The fall semester installment.
    #[serde(rename = "Tuition_Fall", default)]
    pub tuition_fall: Option<Decimal>,
    /// The spring semester installment.
    #[serde(rename = "Tuition_Spring", default)]
    pub tuition_spring: Option<Decimal>,
    /// The currency all fees are denominated in.
    #[serde(rename = "Currency")]
    pub currency: Currency,
}

impl TuitionRecord {
    /// Returns true if every key field is present and at least one fee is set.
    pub fn is_valid(&self) -> bool {
        self.admit_year > 0
            && !self.academic_program.trim().is_empty()
            && !self.admit_type.trim().is_empty()
            && !self.citizenship.trim().is_empty()
            && (self.tuition_fee.is_some()
                || self.tuition_fall.is_some()
                || self.tuition_spring.is_some())
    }

    /// Returns true if both semester installments are known.
    pub fn has_installments(&self) -> bool {
        self.tuition_fall.is_some() && self.tuition_spring.is_some()
    }

    /// Returns the single-payment base fee.
    ///
    /// When the record carries no combined fee, the semester installments
    /// are summed, with a missing half counting as zero.
    pub fn single_payment_fee(&self) -> Decimal {
        self.tuition_fee.unwrap_or_else(|| {
            self.tuition_fall.unwrap_or_default() + self.tuition_spring.unwrap_or_default()
        })
    }
}
