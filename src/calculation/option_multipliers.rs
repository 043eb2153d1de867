//! Option multipliers: intensive course and excursions.
//!
//! Both scale the per-person amount before it is multiplied by the person
//! count, and they compose multiplicatively when both are selected.

use rust_decimal::Decimal;

use crate::config::OptionRates;
use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

/// Applies the intensive course multiplier when the option is selected.
pub fn apply_intensive_course(
    amount: Decimal,
    selected: bool,
    rates: &OptionRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    selected
        .then(|| {
            apply_option_multiplier(
                PricingRule::IntensiveCourse,
                amount,
                rates.intensive_course_multiplier,
                step_number,
            )
        })
        .transpose()
}

/// Applies the excursions multiplier when the option is selected.
pub fn apply_excursions(
    amount: Decimal,
    selected: bool,
    rates: &OptionRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    selected
        .then(|| {
            apply_option_multiplier(
                PricingRule::Excursions,
                amount,
                rates.excursions_multiplier,
                step_number,
            )
        })
        .transpose()
}

fn apply_option_multiplier(
    rule: PricingRule,
    amount: Decimal,
    multiplier: Decimal,
    step_number: u32,
) -> EngineResult<AppliedRule> {
    rule.record(
        step_number,
        amount,
        RuleEffect::Multiply(multiplier),
        serde_json::json!({ "selected": true }),
        |after| {
            format!(
                "{}: {} × {} = {}",
                rule.name(),
                amount.normalize(),
                multiplier.normalize(),
                after.normalize()
            )
        },
    )
}
