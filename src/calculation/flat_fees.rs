//! Flat fees added after person-count scaling.
//!
//! The supplementary materials fee is charged per person; the personalized
//! lessons fee is charged per course week regardless of the person count.

use rust_decimal::Decimal;

use crate::config::OptionRates;
use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

/// Adds `supplementary_fee_per_person * person_count` when selected.
pub fn apply_supplementary_fee(
    amount: Decimal,
    selected: bool,
    person_count: u32,
    rates: &OptionRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    if !selected {
        return Ok(None);
    }

    let fee = rates
        .supplementary_fee_per_person
        .checked_mul(Decimal::from(person_count))
        .ok_or_else(|| PricingRule::SupplementaryFee.overflow(amount))?;
    let applied = PricingRule::SupplementaryFee.record(
        step_number,
        amount,
        RuleEffect::Add(fee),
        serde_json::json!({
            "fee_per_person": rates.supplementary_fee_per_person.normalize().to_string(),
            "person_count": person_count,
        }),
        |after| {
            format!(
                "Supplementary materials: {} × {} persons = {}, total {}",
                rates.supplementary_fee_per_person.normalize(),
                person_count,
                fee.normalize(),
                after.normalize()
            )
        },
    )?;
    Ok(Some(applied))
}

/// Adds `personalized_fee_per_week * total_length` when selected.
pub fn apply_personalized_fee(
    amount: Decimal,
    selected: bool,
    total_length: u32,
    rates: &OptionRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    if !selected {
        return Ok(None);
    }

    let fee = rates
        .personalized_fee_per_week
        .checked_mul(Decimal::from(total_length))
        .ok_or_else(|| PricingRule::PersonalizedFee.overflow(amount))?;
    let applied = PricingRule::PersonalizedFee.record(
        step_number,
        amount,
        RuleEffect::Add(fee),
        serde_json::json!({
            "fee_per_week": rates.personalized_fee_per_week.normalize().to_string(),
            "total_length": total_length,
        }),
        |after| {
            format!(
                "Personalized lessons: {} × {} weeks = {}, total {}",
                rates.personalized_fee_per_week.normalize(),
                total_length,
                fee.normalize(),
                after.normalize()
            )
        },
    )?;
    Ok(Some(applied))
}
