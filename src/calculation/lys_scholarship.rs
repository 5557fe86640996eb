//! LYS scholarship stage.
//!
//! Students admitted through the LYS entrance exam may hold a merit
//! scholarship of 25%, 50% or 75%. The stage is gated on the admit type: for
//! any other admission the scholarship is forced to 0%, whatever tier the
//! selection carries.

use rust_decimal::Decimal;

use crate::models::{DiscountStage, LYS_ADMIT_TYPE, Selection};

use super::stage::{RunningFees, StageResult, apply_stage};

/// Returns the LYS scholarship percentage that applies to a selection.
///
/// # Examples
///
/// ```
/// use tuition_engine::calculation::lys_discount_percentage;
/// use tuition_engine::models::{LysScholarship, Selection};
/// use rust_decimal::Decimal;
///
/// let lys = Selection::new()
///     .with_admit_type("LYS")
///     .with_lys_scholarship(LysScholarship::Half);
/// assert_eq!(lys_discount_percentage(&lys), Decimal::from(50));
///
/// let international = Selection::new()
///     .with_admit_type("International")
///     .with_lys_scholarship(LysScholarship::Half);
/// assert_eq!(lys_discount_percentage(&international), Decimal::ZERO);
/// ```
pub fn lys_discount_percentage(selection: &Selection) -> Decimal {
    selection.effective_lys_scholarship().percentage()
}

/// Applies the LYS scholarship to the running fees.
pub fn apply_lys_scholarship(
    fees: &RunningFees,
    selection: &Selection,
    step_number: u32,
) -> StageResult {
    let admit_type = selection.admit_type.as_deref().unwrap_or("");
    let tier = selection.lys_scholarship.unwrap_or_default();
    let percentage = lys_discount_percentage(selection);

    let reasoning = if !selection.is_lys_admission() {
        format!(
            "No LYS scholarship applied - admit type is '{}' (not {})",
            admit_type, LYS_ADMIT_TYPE
        )
    } else if percentage.is_zero() {
        "No LYS scholarship applied - no scholarship tier held".to_string()
    } else {
        format!("LYS scholarship {}", tier)
    };

    apply_stage(
        DiscountStage::LysScholarship,
        percentage,
        fees,
        step_number,
        serde_json::json!({
            "admit_type": admit_type,
            "lys_scholarship": tier.as_str(),
            "fee_before": fees.combined.normalize().to_string()
        }),
        reasoning,
    )
}
