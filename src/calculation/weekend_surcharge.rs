//! Weekend surcharge.
//!
//! Courses starting on a Saturday or Sunday cost more. Only the start date
//! matters; the weekday a course ends on is irrelevant.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::config::WeekendRates;
use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

/// Returns true if `date` is a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use enrollment_pricing::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-02-07 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap()));
/// // 2026-02-09 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Applies the weekend multiplier when the start date falls on a weekend.
///
/// Returns `Ok(None)` when no date is selected or the date is a weekday.
pub fn apply_weekend_surcharge(
    amount: Decimal,
    start_date: Option<NaiveDate>,
    rates: &WeekendRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    let Some(date) = start_date.filter(|date| is_weekend(*date)) else {
        return Ok(None);
    };
    let effect = RuleEffect::Multiply(rates.multiplier);

    let applied = PricingRule::WeekendSurcharge.record(
        step_number,
        amount,
        effect,
        serde_json::json!({
            "start_date": date.to_string(),
            "weekday": date.weekday().to_string(),
        }),
        |after| {
            format!(
                "Weekend surcharge: {} is a {}, {} × {} = {}",
                date,
                date.weekday(),
                amount.normalize(),
                rates.multiplier.normalize(),
                after.normalize()
            )
        },
    )?;
    Ok(Some(applied))
}
