//! Coercion of raw JSON rows into typed records.
//!
//! The fee data file is a flat array of flat objects. Values are loosely
//! typed in practice: years may arrive as strings and missing fees are often
//! written as `"NA"`. This module turns each row into a [`TuitionRecord`] or
//! reports it as incomplete.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{QuoteError, QuoteResult};
use crate::models::{Currency, TuitionRecord, parse_admit_year};

/// Parses one row of the fee data.
///
/// Returns `Ok(None)` for a record-shaped row that is incomplete (a missing
/// key field, or no fee at all) and `InvalidData` for a row that is not an
/// object.
pub(crate) fn parse_record(index: usize, row: &Value) -> QuoteResult<Option<TuitionRecord>> {
    let object = row.as_object().ok_or_else(|| QuoteError::InvalidData {
        message: format!("record {} is not an object", index),
    })?;

    let Some(admit_year) = object.get("Admit_Year").and_then(coerce_year) else {
        return Ok(None);
    };
    let (Some(academic_program), Some(admit_type), Some(citizenship)) = (
        text_field(object, "Academic_Program"),
        text_field(object, "Admit_Type"),
        text_field(object, "Citizenship"),
    ) else {
        return Ok(None);
    };

    let record = TuitionRecord {
        admit_year,
        academic_program,
        admit_type,
        citizenship,
        tuition_fee: fee_field(object, "Tuition_Fee"),
        tuition_fall: fee_field(object, "Tuition_Fall"),
        tuition_spring: fee_field(object, "Tuition_Spring"),
        currency: object
            .get("Currency")
            .and_then(Value::as_str)
            .map(Currency::from_label)
            .unwrap_or_else(|| Currency::Other(String::new())),
    };

    Ok(record.is_valid().then_some(record))
}

fn coerce_year(value: &Value) -> Option<i32> {
    let year = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| whole_number(number.as_f64()?))
            .and_then(|year| i32::try_from(year).ok()),
        Value::String(text) => parse_admit_year(text).ok(),
        _ => None,
    };
    year.filter(|year| *year > 0)
}

/// Spreadsheet exports write years as `2024.0`.
fn whole_number(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() <= i32::MAX as f64).then_some(value as i64)
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reads a fee; anything that is not a non-negative number counts as absent.
fn fee_field(object: &Map<String, Value>, key: &str) -> Option<Decimal> {
    let fee = match object.get(key)? {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }?;
    (!fee.is_sign_negative()).then_some(fee)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
