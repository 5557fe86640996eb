//! User selection model.
//!
//! A [`Selection`] is built up field by field as the user moves through the
//! quote form. Catalog-derived fields hold free-form values taken from the
//! tuition data; discount fields hold values from the fixed option sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};

use super::options::{
    LYS_ADMIT_TYPE, LysScholarship, PaymentMethod, SiblingDiscount, Waiver, deserialize_lenient,
};
use super::tuition_record::TuitionRecord;

/// A field whose legal values are drawn from the tuition data.
///
/// Variants are declared in dependency order: each field's options are
/// constrained by the fields before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogField {
    /// The year of admission.
    AdmitYear,
    /// The academic program.
    AcademicProgram,
    /// The admission type.
    AdmitType,
    /// The citizenship category.
    Citizenship,
}

impl CatalogField {
    /// All catalog fields in dependency order.
    pub const ALL: [CatalogField; 4] = [
        CatalogField::AdmitYear,
        CatalogField::AcademicProgram,
        CatalogField::AdmitType,
        CatalogField::Citizenship,
    ];

    /// Returns the form field key (e.g. "admitYear").
    pub fn key(&self) -> &'static str {
        match self {
            CatalogField::AdmitYear => "admitYear",
            CatalogField::AcademicProgram => "academicProgram",
            CatalogField::AdmitType => "admitType",
            CatalogField::Citizenship => "citizenship",
        }
    }

    /// Returns true if the field holds numbers rather than text.
    ///
    /// Numeric options are listed newest first, text options in
    /// case-sensitive string order.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CatalogField::AdmitYear)
    }

    /// Reads this field from a record.
    pub fn value_of(&self, record: &TuitionRecord) -> FieldValue {
        match self {
            CatalogField::AdmitYear => FieldValue::Year(record.admit_year),
            CatalogField::AcademicProgram => FieldValue::Text(record.academic_program.clone()),
            CatalogField::AdmitType => FieldValue::Text(record.admit_type.clone()),
            CatalogField::Citizenship => FieldValue::Text(record.citizenship.clone()),
        }
    }
}

/// A value of a [`CatalogField`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An admit year.
    Year(i32),
    /// A textual value such as a program name.
    Text(String),
}

impl FieldValue {
    /// Returns true for empty text values, which are never offered.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Year(year) => *year == 0,
            FieldValue::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Year(year) => write!(f, "{}", year),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

/// Parses an admit year from its textual form (e.g. a form value).
///
/// # Example
///
/// ```
/// use tuition_engine::models::parse_admit_year;
///
/// assert_eq!(parse_admit_year(" 2024 ").unwrap(), 2024);
/// assert!(parse_admit_year("twenty").is_err());
/// ```
pub fn parse_admit_year(text: &str) -> QuoteResult<i32> {
    let trimmed = text.trim();
    match trimmed.parse::<i32>() {
        Ok(year) if year > 0 => Ok(year),
        _ => Err(QuoteError::InvalidAdmitYear {
            value: text.to_string(),
        }),
    }
}

/// The user's choices, complete or partial.
///
/// Deserialization uses the form's field keys. Empty or unrecognized values
/// of the fixed option fields read as unselected, so they price as no
/// discount.
///
/// # Example
///
/// ```
/// use tuition_engine::models::{LysScholarship, Selection, SiblingDiscount, Waiver};
///
/// let selection = Selection::new()
///     .with_admit_year(2024)
///     .with_academic_program("Other")
///     .with_admit_type("LYS")
///     .with_lys_scholarship(LysScholarship::Quarter)
///     .with_waiver(Waiver::None)
///     .with_sibling_discount(SiblingDiscount::No)
///     .with_citizenship("Turkish Citizen");
///
/// assert!(selection.is_lys_admission());
/// assert_eq!(selection.effective_lys_scholarship(), LysScholarship::Quarter);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// The chosen admit year.
    #[serde(default)]
    pub admit_year: Option<i32>,
    /// The chosen academic program.
    #[serde(default)]
    pub academic_program: Option<String>,
    /// The chosen admission type.
    #[serde(default)]
    pub admit_type: Option<String>,
    /// The chosen LYS scholarship tier (only meaningful for LYS admissions).
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub lys_scholarship: Option<LysScholarship>,
    /// The chosen waiver.
    #[serde(default, rename = "waivers", deserialize_with = "deserialize_lenient")]
    pub waiver: Option<Waiver>,
    /// The chosen sibling discount answer.
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub sibling_discount: Option<SiblingDiscount>,
    /// The chosen citizenship category.
    #[serde(default)]
    pub citizenship: Option<String>,
    /// The chosen payment method.
    #[serde(default, rename = "paymentMethods", deserialize_with = "deserialize_lenient")]
    pub payment_method: Option<PaymentMethod>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection whose catalog fields match the given record.
    pub fn matching(record: &TuitionRecord) -> Self {
        Self::new()
            .with_admit_year(record.admit_year)
            .with_academic_program(record.academic_program.clone())
            .with_admit_type(record.admit_type.clone())
            .with_citizenship(record.citizenship.clone())
    }

    /// Sets the admit year.
    pub fn with_admit_year(mut self, year: i32) -> Self {
        self.admit_year = Some(year);
        self
    }

    /// Sets the admit year from its textual form.
    pub fn with_admit_year_text(mut self, text: &str) -> QuoteResult<Self> {
        self.admit_year = Some(parse_admit_year(text)?);
        Ok(self)
    }

    /// Sets the academic program.
    pub fn with_academic_program(mut self, program: impl Into<String>) -> Self {
        self.academic_program = Some(program.into());
        self
    }

    /// Sets the admission type.
    pub fn with_admit_type(mut self, admit_type: impl Into<String>) -> Self {
        self.admit_type = Some(admit_type.into());
        self
    }

    /// Sets the LYS scholarship tier.
    pub fn with_lys_scholarship(mut self, tier: LysScholarship) -> Self {
        self.lys_scholarship = Some(tier);
        self
    }

    /// Sets the waiver.
    pub fn with_waiver(mut self, waiver: Waiver) -> Self {
        self.waiver = Some(waiver);
        self
    }

    /// Sets the sibling discount answer.
    pub fn with_sibling_discount(mut self, sibling: SiblingDiscount) -> Self {
        self.sibling_discount = Some(sibling);
        self
    }

    /// Sets the citizenship category.
    pub fn with_citizenship(mut self, citizenship: impl Into<String>) -> Self {
        self.citizenship = Some(citizenship.into());
        self
    }

    /// Sets the payment method.
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Returns the chosen value of a catalog field, if any.
    pub fn catalog_value(&self, field: CatalogField) -> Option<FieldValue> {
        match field {
            CatalogField::AdmitYear => self.admit_year.map(FieldValue::Year),
            CatalogField::AcademicProgram => self.academic_program.clone().map(FieldValue::Text),
            CatalogField::AdmitType => self.admit_type.clone().map(FieldValue::Text),
            CatalogField::Citizenship => self.citizenship.clone().map(FieldValue::Text),
        }
    }

    /// Clears a catalog field.
    pub fn clear_catalog_value(&mut self, field: CatalogField) {
        match field {
            CatalogField::AdmitYear => self.admit_year = None,
            CatalogField::AcademicProgram => self.academic_program = None,
            CatalogField::AdmitType => self.admit_type = None,
            CatalogField::Citizenship => self.citizenship = None,
        }
    }

    /// Returns true if every chosen catalog field equals the record's value.
    ///
    /// Fields that are not chosen impose no constraint.
    pub fn admits(&self, record: &TuitionRecord) -> bool {
        self.admit_year.is_none_or(|year| year == record.admit_year)
            && self
                .academic_program
                .as_deref()
                .is_none_or(|program| program == record.academic_program)
            && self
                .admit_type
                .as_deref()
                .is_none_or(|admit_type| admit_type == record.admit_type)
            && self
                .citizenship
                .as_deref()
                .is_none_or(|citizenship| citizenship == record.citizenship)
    }

    /// Returns a copy keeping only the catalog fields that precede `field`.
    pub fn preceding(&self, field: CatalogField) -> Selection {
        let mut filter = Selection::new();
        for earlier in CatalogField::ALL.into_iter().filter(|f| *f < field) {
            match earlier {
                CatalogField::AdmitYear => filter.admit_year = self.admit_year,
                CatalogField::AcademicProgram => {
                    filter.academic_program = self.academic_program.clone()
                }
                CatalogField::AdmitType => filter.admit_type = self.admit_type.clone(),
                CatalogField::Citizenship => filter.citizenship = self.citizenship.clone(),
            }
        }
        filter
    }

    /// Returns true if the admission type is LYS.
    pub fn is_lys_admission(&self) -> bool {
        self.admit_type.as_deref() == Some(LYS_ADMIT_TYPE)
    }

    /// Returns the LYS tier that actually applies.
    ///
    /// Any admission type other than LYS forces [`LysScholarship::None`].
    pub fn effective_lys_scholarship(&self) -> LysScholarship {
        if self.is_lys_admission() {
            self.lys_scholarship.unwrap_or_default()
        } else {
            LysScholarship::None
        }
    }

    /// Returns the chosen waiver, or none.
    pub fn effective_waiver(&self) -> Waiver {
        self.waiver.unwrap_or_default()
    }

    /// Returns the chosen sibling answer, or no.
    pub fn effective_sibling_discount(&self) -> SiblingDiscount {
        self.sibling_discount.unwrap_or_default()
    }

    /// Returns the chosen payment method, or single payment.
    pub fn effective_payment_method(&self) -> PaymentMethod {
        self.payment_method.unwrap_or_default()
    }
}
