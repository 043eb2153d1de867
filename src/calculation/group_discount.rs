//! Group discount.
//!
//! Applied last, to the total that already includes the supplementary and
//! personalized flat fees, so those fees are discounted as well.

use rust_decimal::Decimal;

use crate::config::GroupDiscountRates;
use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

/// Returns true if `person_count` qualifies as a group enrollment.
pub fn is_group_enrollment(person_count: u32, rates: &GroupDiscountRates) -> bool {
    person_count >= rates.min_persons
}

/// Applies the group multiplier for bookings of `min_persons` or more.
pub fn apply_group_discount(
    amount: Decimal,
    person_count: u32,
    rates: &GroupDiscountRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    if !is_group_enrollment(person_count, rates) {
        return Ok(None);
    }

    let applied = PricingRule::GroupDiscount.record(
        step_number,
        amount,
        RuleEffect::Multiply(rates.multiplier),
        serde_json::json!({
            "person_count": person_count,
            "min_persons": rates.min_persons,
        }),
        |after| {
            format!(
                "Group discount: {} persons (>= {}), {} × {} = {}",
                person_count,
                rates.min_persons,
                amount.normalize(),
                rates.multiplier.normalize(),
                after.normalize()
            )
        },
    )?;
    Ok(Some(applied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingRates;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> GroupDiscountRates {
        PricingRates::default().group_discount
    }

    #[test]
    fn test_four_persons_is_not_a_group() {
        assert!(!is_group_enrollment(4, &rates()));
        assert!(apply_group_discount(dec("16000"), 4, &rates(), 8).unwrap().is_none());
    }

    #[test]
    fn test_five_persons_is_a_group() {
        assert!(is_group_enrollment(5, &rates()));
        let applied = apply_group_discount(dec("20000"), 5, &rates(), 8).unwrap().unwrap();
        assert_eq!(applied.amount_after, dec("17000"));
    }

    #[test]
    fn test_discount_applies_to_fee_inclusive_total() {
        let applied = apply_group_discount(dec("58080"), 6, &rates(), 10).unwrap().unwrap();
        assert_eq!(applied.amount_after, dec("49368"));
        assert!(applied.reasoning.contains("6 persons"));
    }
}
