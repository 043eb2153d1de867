//! Base cost calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AppliedRule, CourseOffering, RuleEffect};

use super::PricingRule;

/// Returns `fee_per_hour * week_length * total_length`.
///
/// A course with zero weekly hours or zero weeks costs zero.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::CalculationError`] when the product
/// does not fit in a [`Decimal`].
pub fn base_cost(course: &CourseOffering) -> EngineResult<Decimal> {
    course
        .fee_per_hour
        .checked_mul(Decimal::from(course.total_hours()))
        .ok_or_else(|| PricingRule::BaseCost.overflow(course.fee_per_hour))
}

/// Starts the running amount at the course's base cost.
///
/// # Examples
///
/// ```
/// use enrollment_pricing::calculation::apply_base_cost;
/// use enrollment_pricing::models::CourseOffering;
/// use rust_decimal::Decimal;
///
/// let course = CourseOffering {
///     id: 1,
///     name: "English for Beginners".to_string(),
///     description: String::new(),
///     teacher: String::new(),
///     level: "beginner".to_string(),
///     fee_per_hour: Decimal::new(100, 0),
///     week_length: 10,
///     total_length: 4,
///     start_dates: vec![],
/// };
///
/// let applied = apply_base_cost(&course, 1).unwrap();
/// assert_eq!(applied.amount_after, Decimal::new(4000, 0));
/// ```
pub fn apply_base_cost(course: &CourseOffering, step_number: u32) -> EngineResult<AppliedRule> {
    let cost = base_cost(course)?;

    PricingRule::BaseCost.record(
        step_number,
        Decimal::ZERO,
        RuleEffect::Set(cost),
        serde_json::json!({
            "fee_per_hour": course.fee_per_hour.normalize().to_string(),
            "week_length": course.week_length,
            "total_length": course.total_length,
        }),
        |after| {
            format!(
                "Base cost: {} × {} h/week × {} weeks = {}",
                course.fee_per_hour.normalize(),
                course.week_length,
                course.total_length,
                after.normalize()
            )
        },
    )
}
