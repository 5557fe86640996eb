//! Fixed option sets for the discount-affecting fields.
//!
//! These values are not drawn from the tuition data. They form the legal
//! domain of the LYS scholarship, waiver, sibling discount and payment
//! method fields. Each variant's data value is its strum serialization,
//! which serde reuses.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::warn;

use crate::error::{QuoteError, QuoteResult};

/// The admit type that unlocks the LYS scholarship stage.
pub const LYS_ADMIT_TYPE: &str = "LYS";

/// LYS merit scholarship tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(into = "&'static str", try_from = "String")]
pub enum LysScholarship {
    /// No scholarship.
    #[default]
    None,
    /// 25% scholarship.
    #[strum(serialize = "25%")]
    Quarter,
    /// 50% scholarship.
    #[strum(serialize = "50%")]
    Half,
    /// 75% scholarship.
    #[strum(serialize = "75%")]
    ThreeQuarters,
}

impl LysScholarship {
    /// Returns the data value of this tier.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Returns the discount percentage for this tier.
    pub fn percentage(&self) -> Decimal {
        match self {
            LysScholarship::None => Decimal::ZERO,
            LysScholarship::Quarter => Decimal::from(25),
            LysScholarship::Half => Decimal::from(50),
            LysScholarship::ThreeQuarters => Decimal::from(75),
        }
    }
}

/// Employee and retiree tuition waiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Waiver {
    /// No waiver.
    #[default]
    None,
    /// Retiree of a Koç Group company.
    #[strum(serialize = "Koç Group Retiree")]
    KocGroupRetiree,
    /// Employee of a Koç Group company.
    #[strum(serialize = "Koç Group Employee")]
    KocGroupEmployee,
    /// Employee of Koç University.
    #[strum(serialize = "Koç University Employee")]
    KocUniversityEmployee,
    /// Retiree of Koç University.
    #[strum(serialize = "Koç University Retiree")]
    KocUniversityRetiree,
}

impl Waiver {
    /// Returns the data value of this waiver.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Returns the discount percentage for this waiver.
    pub fn percentage(&self) -> Decimal {
        match self {
            Waiver::None => Decimal::ZERO,
            Waiver::KocGroupRetiree | Waiver::KocGroupEmployee => Decimal::from(10),
            Waiver::KocUniversityEmployee => Decimal::from(50),
            Waiver::KocUniversityRetiree => Decimal::from(20),
        }
    }
}

/// Whether a sibling is also enrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(into = "&'static str", try_from = "String")]
pub enum SiblingDiscount {
    /// No sibling discount.
    #[default]
    No,
    /// Sibling discount applies.
    Yes,
}

impl SiblingDiscount {
    /// Returns the data value of this answer.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Returns the discount percentage for this answer.
    pub fn percentage(&self) -> Decimal {
        match self {
            SiblingDiscount::No => Decimal::ZERO,
            SiblingDiscount::Yes => Decimal::from(5),
        }
    }
}

/// How the tuition is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(into = "&'static str", try_from = "String")]
pub enum PaymentMethod {
    /// Fall and spring semester installments.
    Installment,
    /// One combined payment.
    #[default]
    #[strum(serialize = "Single Payment")]
    SinglePayment,
}

impl PaymentMethod {
    /// Returns the data value of this method.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl TryFrom<String> for LysScholarship {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Waiver {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for SiblingDiscount {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parses a fixed option value, naming the form field on failure.
///
/// # Example
///
/// ```
/// use tuition_engine::models::{Waiver, parse_option};
///
/// let waiver: Waiver = parse_option("waivers", "Koç Group Retiree").unwrap();
/// assert_eq!(waiver, Waiver::KocGroupRetiree);
/// assert!(parse_option::<Waiver>("waivers", "Alumni").is_err());
/// ```
pub fn parse_option<T: FromStr>(field: &str, value: &str) -> QuoteResult<T> {
    value.parse().map_err(|_| QuoteError::InvalidOption {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Deserializes an optional fixed option leniently.
///
/// Missing, null, empty and unrecognized values all read as unselected, so
/// an unknown waiver counts as no waiver rather than failing the whole
/// selection.
pub(crate) fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse() {
        Ok(option) => Ok(Some(option)),
        Err(_) => {
            warn!(value, "Ignoring unrecognized option value");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lys_percentages() {
        assert_eq!(LysScholarship::None.percentage(), Decimal::ZERO);
        assert_eq!(LysScholarship::Quarter.percentage(), Decimal::from(25));
        assert_eq!(LysScholarship::Half.percentage(), Decimal::from(50));
        assert_eq!(LysScholarship::ThreeQuarters.percentage(), Decimal::from(75));
    }

    #[test]
    fn test_waiver_percentages() {
        assert_eq!(Waiver::None.percentage(), Decimal::ZERO);
        assert_eq!(Waiver::KocGroupRetiree.percentage(), Decimal::from(10));
        assert_eq!(Waiver::KocGroupEmployee.percentage(), Decimal::from(10));
        assert_eq!(Waiver::KocUniversityEmployee.percentage(), Decimal::from(50));
        assert_eq!(Waiver::KocUniversityRetiree.percentage(), Decimal::from(20));
    }

    #[test]
    fn test_sibling_percentages() {
        assert_eq!(SiblingDiscount::No.percentage(), Decimal::ZERO);
        assert_eq!(SiblingDiscount::Yes.percentage(), Decimal::from(5));
    }

    #[test]
    fn test_option_order_matches_display_order() {
        let waivers: Vec<&str> = Waiver::iter().map(|waiver| waiver.as_str()).collect();
        assert_eq!(
            waivers,
            vec![
                "None",
                "Koç Group Retiree",
                "Koç Group Employee",
                "Koç University Employee",
                "Koç University Retiree"
            ]
        );

        let methods: Vec<&str> = PaymentMethod::iter().map(|method| method.as_str()).collect();
        assert_eq!(methods, vec!["Installment", "Single Payment"]);
    }

    #[test]
    fn test_parse_known_values() {
        assert_eq!("50%".parse::<LysScholarship>().unwrap(), LysScholarship::Half);
        assert_eq!(
            "Koç University Retiree".parse::<Waiver>().unwrap(),
            Waiver::KocUniversityRetiree
        );
        assert_eq!("Yes".parse::<SiblingDiscount>().unwrap(), SiblingDiscount::Yes);
        assert_eq!(
            "Single Payment".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::SinglePayment
        );
    }

    #[test]
    fn test_parse_rejects_out_of_domain_value() {
        match parse_option::<Waiver>("waivers", "Alumni") {
            Err(QuoteError::InvalidOption { field, value }) => {
                assert_eq!(field, "waivers");
                assert_eq!(value, "Alumni");
            }
            other => panic!("Expected InvalidOption error, got {:?}", other),
        }

        assert!("yes".parse::<SiblingDiscount>().is_err());
        assert!("100%".parse::<LysScholarship>().is_err());
    }

    #[test]
    fn test_serde_uses_data_values() {
        let json = serde_json::to_string(&Waiver::KocGroupEmployee).unwrap();
        assert_eq!(json, "\"Koç Group Employee\"");

        let tier: LysScholarship = serde_json::from_str("\"75%\"").unwrap();
        assert_eq!(tier, LysScholarship::ThreeQuarters);

        let method: PaymentMethod = serde_json::from_str("\"Single Payment\"").unwrap();
        assert_eq!(method, PaymentMethod::SinglePayment);

        assert!(serde_json::from_str::<Waiver>("\"Alumni\"").is_err());
    }

    #[test]
    fn test_serde_and_display_agree_for_every_variant() {
        for tier in LysScholarship::iter() {
            assert_eq!(serde_json::to_value(tier).unwrap(), tier.to_string());
        }
        for waiver in Waiver::iter() {
            assert_eq!(serde_json::to_value(waiver).unwrap(), waiver.to_string());
            assert_eq!(waiver.to_string().parse::<Waiver>().unwrap(), waiver);
        }
        for sibling in SiblingDiscount::iter() {
            assert_eq!(serde_json::to_value(sibling).unwrap(), sibling.as_str());
        }
        for method in PaymentMethod::iter() {
            assert_eq!(serde_json::to_value(method).unwrap(), method.as_str());
        }
    }
}
