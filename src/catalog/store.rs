//! The in-memory tuition catalog.
//!
//! This module provides the [`Catalog`] type, the read-only set of valid
//! tuition records, and the queries that drive the dependent form fields.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{QuoteError, QuoteResult};
use crate::models::{CatalogField, FieldValue, Selection, TuitionRecord};

use super::fallback::fallback_records;
use super::record_parser::parse_record;

/// The read-only set of valid tuition records.
///
/// Records are kept in the order they were loaded; that order breaks ties
/// when several records match the same selection.
///
/// # Example
///
/// ```
/// use tuition_engine::catalog::Catalog;
/// use tuition_engine::models::{CatalogField, FieldValue, Selection};
///
/// let catalog = Catalog::fallback();
///
/// let programs = catalog.distinct_values(CatalogField::AcademicProgram, &Selection::new());
/// assert_eq!(
///     programs,
///     vec![
///         FieldValue::Text("Other".to_string()),
///         FieldValue::Text("School of Medicine".to_string()),
///     ]
/// );
///
/// let selection = Selection::new()
///     .with_admit_year(2024)
///     .with_academic_program("Other")
///     .with_admit_type("International")
///     .with_citizenship("Other");
/// assert!(catalog.find_match(&selection).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<TuitionRecord>,
}

impl Catalog {
    /// Builds a catalog from the raw fee data.
    ///
    /// # Returns
    ///
    /// Returns the catalog of valid records, or an error if:
    /// - the input is not a non-empty array of objects (`InvalidData`)
    /// - every record is incomplete (`EmptyCatalog`)
    pub fn load(data: &Value) -> QuoteResult<Self> {
        let rows = data.as_array().ok_or_else(|| QuoteError::InvalidData {
            message: "expected an array of tuition records".to_string(),
        })?;
        if rows.is_empty() {
            return Err(QuoteError::InvalidData {
                message: "expected a non-empty array of tuition records".to_string(),
            });
        }

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if let Some(record) = parse_record(index, row)? {
                records.push(record);
            }
        }

        info!(
            valid_records = records.len(),
            total_records = rows.len(),
            "Filtered tuition data"
        );
        Self::non_empty(records)
    }

    /// Builds a catalog from typed records, dropping invalid ones.
    pub fn from_records(records: Vec<TuitionRecord>) -> QuoteResult<Self> {
        let total = records.len();
        let records: Vec<TuitionRecord> = records.into_iter().filter(|r| r.is_valid()).collect();
        info!(
            valid_records = records.len(),
            total_records = total,
            "Filtered tuition data"
        );
        Self::non_empty(records)
    }

    /// Returns the catalog of built-in sample records.
    pub fn fallback() -> Self {
        Self {
            records: fallback_records(),
        }
    }

    fn non_empty(records: Vec<TuitionRecord>) -> QuoteResult<Self> {
        if records.is_empty() {
            return Err(QuoteError::EmptyCatalog);
        }
        Ok(Self { records })
    }

    /// Returns all records in catalog order.
    pub fn records(&self) -> &[TuitionRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the distinct values of `field` among the records admitted by
    /// `filter`.
    ///
    /// Every chosen catalog field in `filter` is an equality constraint;
    /// unchosen fields impose none. Years are sorted descending and text
    /// values in case-sensitive order. Empty values are never returned.
    pub fn distinct_values(&self, field: CatalogField, filter: &Selection) -> Vec<FieldValue> {
        let mut seen = HashSet::new();
        let mut values: Vec<FieldValue> = self
            .records
            .iter()
            .filter(|record| filter.admits(record))
            .map(|record| field.value_of(record))
            .filter(|value| !value.is_empty() && seen.insert(value.clone()))
            .collect();
        if field.is_numeric() {
            values.sort_by(|a, b| b.cmp(a));
        } else {
            values.sort();
        }

        debug!(field = field.key(), count = values.len(), "Computed distinct values");
        values
    }

    /// Returns the options for a dependent form field.
    ///
    /// Only the catalog fields that precede `field` constrain its options:
    /// the year is never constrained, the program by the year, the admit
    /// type by year and program, the citizenship by all three.
    pub fn options_for(&self, field: CatalogField, selection: &Selection) -> Vec<FieldValue> {
        self.distinct_values(field, &selection.preceding(field))
    }

    /// Returns true if `value` is currently offered for `field`.
    pub fn offers(&self, field: CatalogField, selection: &Selection, value: &FieldValue) -> bool {
        self.options_for(field, selection).contains(value)
    }

    /// Finds the record matching a complete selection.
    ///
    /// Admit year, academic program, admit type and citizenship must all be
    /// chosen and equal the record's values. When several records match,
    /// the first in catalog order wins. Returns `None` when nothing matches.
    pub fn find_match(&self, selection: &Selection) -> Option<&TuitionRecord> {
        let (Some(year), Some(program), Some(admit_type), Some(citizenship)) = (
            selection.admit_year,
            selection.academic_program.as_deref(),
            selection.admit_type.as_deref(),
            selection.citizenship.as_deref(),
        ) else {
            return None;
        };

        self.records.iter().find(|record| {
            record.admit_year == year
                && record.academic_program == program
                && record.admit_type == admit_type
                && record.citizenship == citizenship
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    fn create_record(year: i32, program: &str, admit_type: &str, citizenship: &str) -> TuitionRecord {
        TuitionRecord {
            admit_year: year,
            academic_program: program.to_string(),
            admit_type: admit_type.to_string(),
            citizenship: citizenship.to_string(),
            tuition_fee: Some(Decimal::from(1000)),
            tuition_fall: None,
            tuition_spring: None,
            currency: Currency::TurkishLira,
        }
    }

    fn create_catalog() -> Catalog {
        Catalog::from_records(vec![
            create_record(2024, "Other", "LYS", "Turkish Citizen"),
            create_record(2025, "Other", "LYS", "Turkish Citizen"),
            create_record(2024, "School of Medicine", "LYS", "Turkish Citizen"),
            create_record(2024, "Other", "International", "Other"),
            create_record(2023, "Law", "International", "Dual Citizen"),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_rejects_non_array() {
        let result = Catalog::load(&json!({"Admit_Year": 2024}));
        assert!(matches!(result, Err(QuoteError::InvalidData { .. })));
    }

    #[test]
    fn test_load_rejects_empty_array() {
        match Catalog::load(&json!([])) {
            Err(QuoteError::InvalidData { message }) => assert!(message.contains("non-empty")),
            other => panic!("Expected InvalidData error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_non_record_rows() {
        let result = Catalog::load(&json!([1, 2, 3]));
        assert!(matches!(result, Err(QuoteError::InvalidData { .. })));
    }

    #[test]
    fn test_load_fails_when_every_record_is_incomplete() {
        let data = json!([
            {"Admit_Year": 2024, "Academic_Program": "Other"},
            {"Academic_Program": "Other", "Admit_Type": "LYS", "Citizenship": "Other", "Tuition_Fee": 10}
        ]);
        assert!(matches!(Catalog::load(&data), Err(QuoteError::EmptyCatalog)));
    }

    #[test]
    fn test_load_filters_incomplete_records() {
        let data = json!([
            {
                "Admit_Year": 2024, "Academic_Program": "Other", "Admit_Type": "LYS",
                "Citizenship": "Turkish Citizen", "Tuition_Fee": 1565000, "Currency": "Turkish Lira"
            },
            {
                "Admit_Year": 2024, "Academic_Program": "Other", "Admit_Type": "LYS",
                "Citizenship": "Turkish Citizen", "Tuition_Fee": "NA", "Currency": "Turkish Lira"
            }
        ]);
        let catalog = Catalog::load(&data).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_load_keeps_rows_with_whole_float_years() {
        let data = json!([
            {
                "Admit_Year": 2024.0, "Academic_Program": "Other", "Admit_Type": "LYS",
                "Citizenship": "Turkish Citizen", "Tuition_Fee": 1565000, "Currency": "Turkish Lira"
            },
            {
                "Admit_Year": 2023, "Academic_Program": "Other", "Admit_Type": "LYS",
                "Citizenship": "Turkish Citizen", "Tuition_Fee": 1400000, "Currency": "Turkish Lira"
            }
        ]);
        let catalog = Catalog::load(&data).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.distinct_values(CatalogField::AdmitYear, &Selection::new()),
            vec![FieldValue::Year(2024), FieldValue::Year(2023)]
        );
    }

    #[test]
    fn test_padded_lys_admit_type_still_unlocks_scholarship() {
        let data = json!([{
            "Admit_Year": 2024, "Academic_Program": "Other", "Admit_Type": " LYS ",
            "Citizenship": "Turkish Citizen", "Tuition_Fee": 1565000, "Currency": "Turkish Lira"
        }]);
        let catalog = Catalog::load(&data).unwrap();
        let selection = Selection::matching(&catalog.records()[0]);
        assert!(selection.is_lys_admission());
        assert!(catalog.find_match(&selection.with_admit_type("LYS")).is_some());
    }

    #[test]
    fn test_from_records_rejects_all_invalid() {
        let result = Catalog::from_records(vec![create_record(2024, "", "LYS", "Other")]);
        assert!(matches!(result, Err(QuoteError::EmptyCatalog)));
    }

    #[test]
    fn test_distinct_years_sort_descending() {
        let years = create_catalog().distinct_values(CatalogField::AdmitYear, &Selection::new());
        assert_eq!(
            years,
            vec![
                FieldValue::Year(2025),
                FieldValue::Year(2024),
                FieldValue::Year(2023)
            ]
        );
    }

    #[test]
    fn test_distinct_text_values_sort_lexicographically() {
        let programs =
            create_catalog().distinct_values(CatalogField::AcademicProgram, &Selection::new());
        assert_eq!(
            programs,
            vec![text("Law"), text("Other"), text("School of Medicine")]
        );
    }

    #[test]
    fn test_distinct_text_values_are_case_sensitive() {
        let catalog = Catalog::from_records(vec![
            create_record(2024, "law", "LYS", "Other"),
            create_record(2024, "Medicine", "LYS", "Other"),
            create_record(2024, "Engineering", "LYS", "Other"),
        ])
        .unwrap();
        assert_eq!(
            catalog.distinct_values(CatalogField::AcademicProgram, &Selection::new()),
            vec![text("Engineering"), text("Medicine"), text("law")]
        );
    }

    #[test]
    fn test_distinct_values_respect_chosen_fields() {
        let catalog = create_catalog();
        let filter = Selection::new().with_admit_year(2024).with_academic_program("Other");

        let types = catalog.distinct_values(CatalogField::AdmitType, &filter);
        assert_eq!(types, vec![text("International"), text("LYS")]);

        let filter = filter.with_admit_type("LYS");
        let citizenships = catalog.distinct_values(CatalogField::Citizenship, &filter);
        assert_eq!(citizenships, vec![text("Turkish Citizen")]);
    }

    #[test]
    fn test_distinct_values_for_unknown_value_are_empty() {
        let filter = Selection::new().with_academic_program("Astronomy");
        let types = create_catalog().distinct_values(CatalogField::AdmitType, &filter);
        assert!(types.is_empty());
    }

    #[test]
    fn test_distinct_values_are_stable_across_calls() {
        let catalog = create_catalog();
        let first = catalog.distinct_values(CatalogField::Citizenship, &Selection::new());
        let _ = catalog.distinct_values(CatalogField::AdmitYear, &Selection::new().with_admit_year(2023));
        let second = catalog.distinct_values(CatalogField::Citizenship, &Selection::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_options_ignore_later_fields() {
        let catalog = create_catalog();
        let selection = Selection::new()
            .with_admit_year(2024)
            .with_citizenship("Other");

        let programs = catalog.options_for(CatalogField::AcademicProgram, &selection);
        assert_eq!(programs, vec![text("Other"), text("School of Medicine")]);

        let years = catalog.options_for(CatalogField::AdmitYear, &selection);
        assert_eq!(years.len(), 3);
    }

    #[test]
    fn test_offers_checks_dependent_options() {
        let catalog = create_catalog();
        let selection = Selection::new().with_admit_year(2023);
        assert!(catalog.offers(CatalogField::AcademicProgram, &selection, &text("Law")));
        assert!(!catalog.offers(CatalogField::AcademicProgram, &selection, &text("Other")));
    }

    #[test]
    fn test_find_match_returns_exact_record() {
        let catalog = create_catalog();
        let expected = &catalog.records()[3];
        let found = catalog.find_match(&Selection::matching(expected));
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_find_match_requires_every_key_field() {
        let catalog = create_catalog();
        let selection = Selection::new()
            .with_admit_year(2024)
            .with_academic_program("Other")
            .with_admit_type("LYS");
        assert_eq!(catalog.find_match(&selection), None);
    }

    #[test]
    fn test_find_match_without_match_is_none() {
        let selection = Selection::new()
            .with_admit_year(2025)
            .with_academic_program("School of Medicine")
            .with_admit_type("LYS")
            .with_citizenship("Turkish Citizen");
        assert_eq!(create_catalog().find_match(&selection), None);
    }

    #[test]
    fn test_find_match_prefers_first_duplicate() {
        let mut first = create_record(2024, "Other", "LYS", "Turkish Citizen");
        first.tuition_fee = Some(Decimal::from(1));
        let mut second = first.clone();
        second.tuition_fee = Some(Decimal::from(2));
        let catalog = Catalog::from_records(vec![first.clone(), second]).unwrap();

        let found = catalog.find_match(&Selection::matching(&first)).unwrap();
        assert_eq!(found.tuition_fee, Some(Decimal::from(1)));
    }
}
