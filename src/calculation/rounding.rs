//! Currency rounding helpers.
//!
//! Fees are whole currency units. Every intermediate figure is rounded half
//! away from zero, which on non-negative fees is ordinary arithmetic rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole currency units, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// The rounded amount taken off `fee` by a `percentage` discount.
///
/// Used on the single-payment path: the amount is rounded first and then
/// subtracted from the running fee.
pub fn discount_amount(fee: Decimal, percentage: Decimal) -> Decimal {
    round_currency(fee * percentage / Decimal::ONE_HUNDRED)
}

/// The rounded value left after a `percentage` discount.
///
/// Used on the installment path, where the remainder itself is rounded.
/// For the same input this can differ by one unit from
/// `fee - discount_amount(fee, percentage)`.
pub fn discounted_value(value: Decimal, percentage: Decimal) -> Decimal {
    round_currency(value * (Decimal::ONE - percentage / Decimal::ONE_HUNDRED))
}

/// `part` as a rounded percentage of `whole`, or zero when `whole` is zero.
pub fn rounded_percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    round_currency(part * Decimal::ONE_HUNDRED / whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_goes_up_on_positive_values() {
        assert_eq!(round_currency(dec("7.5")), dec("8"));
        assert_eq!(round_currency(dec("7.49")), dec("7"));
        assert_eq!(round_currency(dec("0.5")), dec("1"));
    }

    #[test]
    fn test_discount_amount_on_whole_fee() {
        assert_eq!(discount_amount(dec("1565000"), dec("25")), dec("391250"));
        assert_eq!(discount_amount(dec("782500"), dec("5")), dec("39125"));
    }

    #[test]
    fn test_discounted_value_on_installment() {
        assert_eq!(discounted_value(dec("899875"), dec("25")), dec("674906"));
        assert_eq!(discounted_value(dec("14000"), dec("0")), dec("14000"));
    }

    #[test]
    fn test_two_rounding_paths_can_diverge() {
        let fee = dec("15");
        let percentage = dec("50");

        let single_payment = fee - discount_amount(fee, percentage);
        let installment = discounted_value(fee, percentage);

        assert_eq!(single_payment, dec("7"));
        assert_eq!(installment, dec("8"));
    }

    #[test]
    fn test_rounded_percentage() {
        assert_eq!(rounded_percentage(dec("821625"), dec("1565000")), dec("53"));
        assert_eq!(rounded_percentage(dec("391250"), dec("1565000")), dec("25"));
    }

    #[test]
    fn test_rounded_percentage_of_zero_whole_is_zero() {
        assert_eq!(rounded_percentage(dec("0"), dec("0")), Decimal::ZERO);
    }
}
