//! Built-in sample records.
//!
//! Used when the fee data file cannot be loaded, so that the calculator
//! stays usable.

use rust_decimal::Decimal;

use crate::models::{Currency, TuitionRecord};

fn record(
    academic_program: &str,
    admit_type: &str,
    citizenship: &str,
    fees: (i64, i64, i64),
    currency: Currency,
) -> TuitionRecord {
    TuitionRecord {
        admit_year: 2024,
        academic_program: academic_program.to_string(),
        admit_type: admit_type.to_string(),
        citizenship: citizenship.to_string(),
        tuition_fee: Some(Decimal::from(fees.0)),
        tuition_fall: Some(Decimal::from(fees.1)),
        tuition_spring: Some(Decimal::from(fees.2)),
        currency,
    }
}

/// Returns the three sample records.
pub fn fallback_records() -> Vec<TuitionRecord> {
    vec![
        record(
            "Other",
            "LYS",
            "Turkish Citizen",
            (1_565_000, 782_500, 899_875),
            Currency::TurkishLira,
        ),
        record(
            "School of Medicine",
            "LYS",
            "Turkish Citizen",
            (2_330_000, 1_165_000, 1_339_750),
            Currency::TurkishLira,
        ),
        record(
            "Other",
            "International",
            "Other",
            (28_000, 14_000, 14_000),
            Currency::USDollar,
        ),
    ]
}
