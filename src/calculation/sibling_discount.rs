//! Sibling discount stage.
//!
//! A 5% discount for students with a sibling enrolled, applied last.

use rust_decimal::Decimal;

use crate::models::{DiscountStage, Selection, SiblingDiscount};

use super::stage::{RunningFees, StageResult, apply_stage};

/// Returns the sibling discount percentage for a selection.
pub fn sibling_discount_percentage(selection: &Selection) -> Decimal {
    selection.effective_sibling_discount().percentage()
}

/// Applies the sibling discount to the fees left by the waiver stage.
pub fn apply_sibling_discount(
    fees: &RunningFees,
    selection: &Selection,
    step_number: u32,
) -> StageResult {
    let sibling = selection.effective_sibling_discount();
    let percentage = sibling_discount_percentage(selection);

    let reasoning = match sibling {
        SiblingDiscount::Yes => "Sibling discount".to_string(),
        SiblingDiscount::No => "No sibling discount - no sibling enrolled".to_string(),
    };

    apply_stage(
        DiscountStage::Sibling,
        percentage,
        fees,
        step_number,
        serde_json::json!({
            "sibling_discount": sibling.as_str(),
            "fee_before": fees.combined.normalize().to_string()
        }),
        reasoning,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_fees() -> RunningFees {
        RunningFees {
            combined: dec("782500"),
            fall: Some(dec("391250")),
            spring: Some(dec("449938")),
        }
    }

    /// SB-001: sibling gets 5%
    #[test]
    fn test_sibling_gets_five_percent() {
        let selection = Selection::new().with_sibling_discount(SiblingDiscount::Yes);
        let result = apply_sibling_discount(&create_fees(), &selection, 3);

        assert_eq!(result.discount.amount, dec("39125"));
        assert_eq!(result.fees.combined, dec("743375"));
        assert_eq!(result.fees.fall, Some(dec("371688")));
        assert_eq!(result.fees.spring, Some(dec("427441")));
        assert_eq!(result.audit_step.step_number, 3);
    }

    /// SB-002: no sibling leaves fees unchanged
    #[test]
    fn test_no_sibling_gets_nothing() {
        let selection = Selection::new().with_sibling_discount(SiblingDiscount::No);
        let fees = create_fees();
        let result = apply_sibling_discount(&fees, &selection, 3);

        assert_eq!(result.fees, fees);
        assert!(result.audit_step.reasoning.contains("no sibling"));
    }
}
