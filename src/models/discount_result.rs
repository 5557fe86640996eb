//! Discount result models for the Tuition Quote Engine.
//!
//! This module contains the [`DiscountResult`] type and its associated
//! structures that capture every output of a tuition calculation: the
//! per-stage discounts, the final fees for each payment method and an
//! audit trail of the decisions taken.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tuition_record::Currency;

/// One of the three sequential discount stages.
///
/// # Example
///
/// ```
/// use tuition_engine::models::DiscountStage;
///
/// assert_eq!(DiscountStage::ALL[0], DiscountStage::LysScholarship);
/// assert_eq!(DiscountStage::Sibling.rule_id(), "sibling_discount");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStage {
    /// Merit scholarship for LYS admissions.
    LysScholarship,
    /// Employee and retiree waiver.
    Waiver,
    /// Sibling discount.
    Sibling,
}

impl DiscountStage {
    /// The stages in the order they are applied.
    pub const ALL: [DiscountStage; 3] = [
        DiscountStage::LysScholarship,
        DiscountStage::Waiver,
        DiscountStage::Sibling,
    ];

    /// Returns the identifier used in the audit trail.
    pub fn rule_id(&self) -> &'static str {
        match self {
            DiscountStage::LysScholarship => "lys_scholarship",
            DiscountStage::Waiver => "waiver",
            DiscountStage::Sibling => "sibling_discount",
        }
    }

    /// Returns the human-readable stage name.
    pub fn rule_name(&self) -> &'static str {
        match self {
            DiscountStage::LysScholarship => "LYS Scholarship",
            DiscountStage::Waiver => "Tuition Waiver",
            DiscountStage::Sibling => "Sibling Discount",
        }
    }
}

/// The discount taken at one stage on the single-payment fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDiscount {
    /// Which stage this is.
    pub stage: DiscountStage,
    /// The percentage applied (0 when the stage does not apply).
    pub percentage: Decimal,
    /// The rounded amount subtracted from the running fee.
    pub amount: Decimal,
}

impl StageDiscount {
    /// Returns true if this stage reduced the fee.
    pub fn is_applied(&self) -> bool {
        self.percentage > Decimal::ZERO
    }
}

/// A semester installment traced through every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterFees {
    /// The installment before any discount.
    pub base: Decimal,
    /// After the LYS scholarship.
    pub after_lys: Decimal,
    /// After the waiver.
    pub after_waiver: Decimal,
    /// After the sibling discount.
    pub final_fee: Decimal,
}

/// How the quoted tuition is paid.
///
/// # Example
///
/// ```
/// use tuition_engine::models::PaymentOutcome;
/// use rust_decimal::Decimal;
///
/// let outcome = PaymentOutcome::InstallmentUnavailable {
///     total: Decimal::from(28_000),
/// };
/// assert_eq!(outcome.total(), Decimal::from(28_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// A single combined payment.
    SinglePayment {
        /// The final single-payment fee.
        total: Decimal,
    },
    /// Fall and spring installments.
    Installment {
        /// The fall installment.
        fall: SemesterFees,
        /// The spring installment.
        spring: SemesterFees,
        /// Final fall plus final spring.
        total_annual: Decimal,
    },
    /// Installments were requested but the record has no semester split.
    InstallmentUnavailable {
        /// The final single-payment fee shown instead.
        total: Decimal,
    },
}

impl PaymentOutcome {
    /// Returns the total amount payable under this outcome.
    pub fn total(&self) -> Decimal {
        match self {
            PaymentOutcome::SinglePayment { total }
            | PaymentOutcome::InstallmentUnavailable { total } => *total,
            PaymentOutcome::Installment { total_annual, .. } => *total_annual,
        }
    }
}

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a tuition calculation.
///
/// Derived from a matched record and a selection; never stored back into
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountResult {
    /// The currency of every amount in this result.
    pub currency: Currency,
    /// The single-payment fee before any discount.
    pub base_tuition_fee: Decimal,
    /// The LYS scholarship stage.
    pub lys: StageDiscount,
    /// The waiver stage.
    pub waiver: StageDiscount,
    /// The sibling discount stage.
    pub sibling: StageDiscount,
    /// The single-payment fee after the LYS stage.
    pub after_lys_discount_fee: Decimal,
    /// The single-payment fee after the waiver stage.
    pub after_waiver_discount_fee: Decimal,
    /// The single-payment fee after every stage.
    pub final_tuition_fee: Decimal,
    /// Base fee minus final fee.
    pub total_discount_amount: Decimal,
    /// Total discount as a rounded percentage of the base fee.
    pub total_discount_percentage: Decimal,
    /// The fees payable under the requested payment method.
    pub payment: PaymentOutcome,
    /// The audit trail, one step per stage.
    pub audit_steps: Vec<AuditStep>,
}

impl DiscountResult {
    /// Returns the three stages in application order.
    pub fn stages(&self) -> [&StageDiscount; 3] {
        [&self.lys, &self.waiver, &self.sibling]
    }

    /// Returns true if any stage reduced the fee.
    pub fn has_discount(&self) -> bool {
        self.total_discount_amount > Decimal::ZERO
    }
}

/// The result of asking for a quote on a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum QuoteOutcome {
    /// A record matched and was priced.
    Quoted(DiscountResult),
    /// No record matches the selection.
    NoMatch,
}

impl QuoteOutcome {
    /// Returns the priced result, if any.
    pub fn result(&self) -> Option<&DiscountResult> {
        match self {
            QuoteOutcome::Quoted(result) => Some(result),
            QuoteOutcome::NoMatch => None,
        }
    }
}
