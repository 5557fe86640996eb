//! Tuition quote computation.
//!
//! Runs the three discount stages in their fixed order over a matched
//! record and resolves the requested payment method.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AuditStep, DiscountResult, PaymentMethod, PaymentOutcome, SemesterFees, Selection,
    TuitionRecord,
};

use super::lys_scholarship::apply_lys_scholarship;
use super::rounding::rounded_percentage;
use super::sibling_discount::apply_sibling_discount;
use super::stage::{RunningFees, StageResult};
use super::waiver::apply_waiver;

/// Computes the discounted tuition for a record and a selection.
///
/// Discounts compound: each stage applies to the fee left by the previous
/// one, in the order LYS scholarship, waiver, sibling discount. The function
/// is pure, so identical inputs always give identical results.
///
/// If installments are requested but the record has no fall/spring split,
/// the payment outcome is [`PaymentOutcome::InstallmentUnavailable`] carrying
/// the single-payment figure.
///
/// # Examples
///
/// ```
/// use tuition_engine::calculation::compute_result;
/// use tuition_engine::models::{
///     Currency, LysScholarship, PaymentMethod, Selection, SiblingDiscount, TuitionRecord, Waiver,
/// };
/// use rust_decimal::Decimal;
///
/// let record = TuitionRecord {
///     admit_year: 2024,
///     academic_program: "Other".to_string(),
///     admit_type: "LYS".to_string(),
///     citizenship: "Turkish Citizen".to_string(),
///     tuition_fee: Some(Decimal::from(1_565_000)),
///     tuition_fall: None,
///     tuition_spring: None,
///     currency: Currency::TurkishLira,
/// };
/// let selection = Selection::matching(&record)
///     .with_lys_scholarship(LysScholarship::Quarter)
///     .with_waiver(Waiver::None)
///     .with_sibling_discount(SiblingDiscount::No)
///     .with_payment_method(PaymentMethod::SinglePayment);
///
/// let result = compute_result(&record, &selection);
/// assert_eq!(result.final_tuition_fee, Decimal::from(1_173_750));
/// assert_eq!(result.total_discount_percentage, Decimal::from(25));
/// ```
pub fn compute_result(record: &TuitionRecord, selection: &Selection) -> DiscountResult {
    let base = RunningFees::from_record(record);
    let mut step_number: u32 = 1;

    let lys = apply_lys_scholarship(&base, selection, step_number);
    step_number += 1;
    let waiver = apply_waiver(&lys.fees, selection, step_number);
    step_number += 1;
    let sibling = apply_sibling_discount(&waiver.fees, selection, step_number);
    step_number += 1;

    let base_tuition_fee = base.combined;
    let final_tuition_fee = sibling.fees.combined;
    let total_discount_amount = base_tuition_fee - final_tuition_fee;
    let total_discount_percentage = rounded_percentage(total_discount_amount, base_tuition_fee);

    let method = selection.effective_payment_method();
    let payment = resolve_payment(method, &base, &lys, &waiver, &sibling);
    let payment_step = payment_audit_step(method, &payment, step_number);

    debug!(
        base_tuition_fee = %base_tuition_fee,
        final_tuition_fee = %final_tuition_fee,
        total_discount_percentage = %total_discount_percentage,
        payment_method = method.as_str(),
        "Tuition discounts computed"
    );

    let after_lys_discount_fee = lys.fees.combined;
    let after_waiver_discount_fee = waiver.fees.combined;

    DiscountResult {
        currency: record.currency.clone(),
        base_tuition_fee,
        lys: lys.discount,
        waiver: waiver.discount,
        sibling: sibling.discount,
        after_lys_discount_fee,
        after_waiver_discount_fee,
        final_tuition_fee,
        total_discount_amount,
        total_discount_percentage,
        payment,
        audit_steps: vec![
            lys.audit_step,
            waiver.audit_step,
            sibling.audit_step,
            payment_step,
        ],
    }
}

/// Builds the payment outcome from the fees after each stage.
fn resolve_payment(
    method: PaymentMethod,
    base: &RunningFees,
    lys: &StageResult,
    waiver: &StageResult,
    sibling: &StageResult,
) -> PaymentOutcome {
    let single = PaymentOutcome::SinglePayment {
        total: sibling.fees.combined,
    };
    if method == PaymentMethod::SinglePayment {
        return single;
    }

    let semester = |pick: fn(&RunningFees) -> Option<Decimal>| -> Option<SemesterFees> {
        Some(SemesterFees {
            base: pick(base)?,
            after_lys: pick(&lys.fees)?,
            after_waiver: pick(&waiver.fees)?,
            final_fee: pick(&sibling.fees)?,
        })
    };

    match (
        semester(|f: &RunningFees| f.fall),
        semester(|f: &RunningFees| f.spring),
    ) {
        (Some(fall), Some(spring)) => {
            let total_annual = fall.final_fee + spring.final_fee;
            PaymentOutcome::Installment {
                fall,
                spring,
                total_annual,
            }
        }
        _ => PaymentOutcome::InstallmentUnavailable {
            total: sibling.fees.combined,
        },
    }
}

fn payment_audit_step(
    method: PaymentMethod,
    payment: &PaymentOutcome,
    step_number: u32,
) -> AuditStep {
    let (installment_available, reasoning) = match payment {
        PaymentOutcome::SinglePayment { total } => {
            (None, format!("Single payment of {}", total.normalize()))
        }
        PaymentOutcome::Installment {
            fall,
            spring,
            total_annual,
        } => (
            Some(true),
            format!(
                "Installments: fall {} + spring {} = {}",
                fall.final_fee.normalize(),
                spring.final_fee.normalize(),
                total_annual.normalize()
            ),
        ),
        PaymentOutcome::InstallmentUnavailable { total } => (
            Some(false),
            format!(
                "Installments requested but not available for this program - single payment of {}",
                total.normalize()
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id: "payment_method".to_string(),
        rule_name: "Payment Method".to_string(),
        input: serde_json::json!({
            "payment_method": method.as_str()
        }),
        output: serde_json::json!({
            "installment_available": installment_available,
            "total": payment.total().normalize().to_string()
        }),
        reasoning,
    }
}
