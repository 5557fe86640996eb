//! Core data models for the Tuition Quote Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod discount_result;
mod options;
mod selection;
mod tuition_record;

pub use discount_result::{
    AuditStep, DiscountResult, DiscountStage, PaymentOutcome, QuoteOutcome, SemesterFees,
    StageDiscount,
};
pub use options::{
    LYS_ADMIT_TYPE, LysScholarship, PaymentMethod, SiblingDiscount, Waiver, parse_option,
};
pub use selection::{CatalogField, FieldValue, Selection, parse_admit_year};
pub use tuition_record::{Currency, TuitionRecord};
