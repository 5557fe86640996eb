//! Tuition waiver stage.
//!
//! Employees and retirees of the university and of the wider group receive
//! a waiver applied on top of any scholarship.

use rust_decimal::Decimal;

use crate::models::{DiscountStage, Selection};

use super::stage::{RunningFees, StageResult, apply_stage};

/// Returns the waiver percentage for a selection; no waiver is 0%.
pub fn waiver_discount_percentage(selection: &Selection) -> Decimal {
    selection.effective_waiver().percentage()
}

/// Applies the waiver to the fees left by the LYS stage.
pub fn apply_waiver(fees: &RunningFees, selection: &Selection, step_number: u32) -> StageResult {
    let waiver = selection.effective_waiver();
    let percentage = waiver_discount_percentage(selection);

    let reasoning = if percentage.is_zero() {
        "No waiver applied".to_string()
    } else {
        format!("Waiver '{}' ({}%)", waiver, percentage.normalize())
    };

    apply_stage(
        DiscountStage::Waiver,
        percentage,
        fees,
        step_number,
        serde_json::json!({
            "waiver": waiver.as_str(),
            "fee_before": fees.combined.normalize().to_string()
        }),
        reasoning,
    )
}
