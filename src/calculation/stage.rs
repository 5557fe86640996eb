//! Shared stage arithmetic.
//!
//! Each discount stage takes the fees left by the previous stage and applies
//! one percentage to them. The single-payment fee and the two semester
//! installments follow different rounding paths (see [`super::rounding`]).

use rust_decimal::Decimal;

use crate::models::{AuditStep, DiscountStage, StageDiscount, TuitionRecord};

use super::rounding::{discount_amount, discounted_value};

/// The fees carried from one stage to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningFees {
    /// The single-payment fee.
    pub combined: Decimal,
    /// The fall installment, if the record has one.
    pub fall: Option<Decimal>,
    /// The spring installment, if the record has one.
    pub spring: Option<Decimal>,
}

impl RunningFees {
    /// The undiscounted fees of a record.
    pub fn from_record(record: &TuitionRecord) -> Self {
        Self {
            combined: record.single_payment_fee(),
            fall: record.tuition_fall,
            spring: record.tuition_spring,
        }
    }
}

/// The result of applying one stage, including the audit step.
#[derive(Debug, Clone)]
pub struct StageResult {
    /// The discount taken at this stage.
    pub discount: StageDiscount,
    /// The fees after this stage.
    pub fees: RunningFees,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Applies `percentage` to `fees` and records the step.
///
/// `input` and `reasoning` describe why this percentage was chosen; the
/// arithmetic itself is appended to the reasoning.
pub(crate) fn apply_stage(
    stage: DiscountStage,
    percentage: Decimal,
    fees: &RunningFees,
    step_number: u32,
    input: serde_json::Value,
    reasoning: String,
) -> StageResult {
    let amount = discount_amount(fees.combined, percentage);
    let combined = fees.combined - amount;
    let fall = fees.fall.map(|value| discounted_value(value, percentage));
    let spring = fees.spring.map(|value| discounted_value(value, percentage));

    let applied = percentage > Decimal::ZERO;
    let reasoning = if applied {
        format!(
            "{}: {} x {}% = {}; {} - {} = {}",
            reasoning,
            fees.combined.normalize(),
            percentage.normalize(),
            amount.normalize(),
            fees.combined.normalize(),
            amount.normalize(),
            combined.normalize()
        )
    } else {
        reasoning
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: stage.rule_id().to_string(),
        rule_name: stage.rule_name().to_string(),
        input,
        output: serde_json::json!({
            "discount_applied": applied,
            "percentage": percentage.normalize().to_string(),
            "discount_amount": amount.normalize().to_string(),
            "fee_after": combined.normalize().to_string(),
            "fall_after": fall.map(|v| v.normalize().to_string()),
            "spring_after": spring.map(|v| v.normalize().to_string()),
        }),
        reasoning,
    };

    StageResult {
        discount: StageDiscount {
            stage,
            percentage,
            amount,
        },
        fees: RunningFees {
            combined,
            fall,
            spring,
        },
        audit_step,
    }
}
