//! Tuition Quote Engine
//!
//! This crate computes university tuition quotes from a static fee table:
//! dependent filtering of the form's catalog fields, lookup of the matching
//! fee record, and compounding LYS scholarship, waiver and sibling discounts
//! with single-payment and installment figures.

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod report;
pub mod wizard;
