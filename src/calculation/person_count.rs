//! Person-count scaling.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

/// Multiplies the per-person amount by the number of persons.
///
/// Always fires; a single person is recorded as a multiplication by 1 so the
/// trace shows where the per-person amount became the booking total.
pub fn apply_person_count(
    amount: Decimal,
    person_count: u32,
    step_number: u32,
) -> EngineResult<AppliedRule> {
    PricingRule::PersonCount.record(
        step_number,
        amount,
        RuleEffect::Multiply(Decimal::from(person_count)),
        serde_json::json!({ "person_count": person_count }),
        |after| {
            format!(
                "Person count: {} × {} persons = {}",
                amount.normalize(),
                person_count,
                after.normalize()
            )
        },
    )
}
