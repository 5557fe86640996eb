//! Calculation logic for the Tuition Quote Engine.
//!
//! This module contains the discount engine: the LYS scholarship, waiver and
//! sibling discount stages, the currency rounding rules they share, and
//! [`compute_result`], which runs the stages in order over a matched record.

mod engine;
mod lys_scholarship;
mod rounding;
mod sibling_discount;
mod stage;
mod waiver;

pub use engine::compute_result;
pub use lys_scholarship::{apply_lys_scholarship, lys_discount_percentage};
pub use rounding::{discount_amount, discounted_value, round_currency, rounded_percentage};
pub use sibling_discount::{apply_sibling_discount, sibling_discount_percentage};
pub use stage::{RunningFees, StageResult};
pub use waiver::{apply_waiver, waiver_discount_percentage};
