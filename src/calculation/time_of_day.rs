//! Time-of-day fee.
//!
//! Morning and evening starts carry a flat fee. Only the start hour is
//! compared, so 20:45 still falls in an evening band whose last hour is 20.
//! The morning band is checked first and at most one fee applies.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::config::{TimeBand, TimeOfDayRates};
use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

/// Returns the name and band that `time` falls into, if any.
///
/// # Example
///
/// ```
/// use enrollment_pricing::calculation::time_band_for;
/// use enrollment_pricing::config::PricingRates;
/// use chrono::NaiveTime;
///
/// let rates = PricingRates::default().time_of_day;
/// let (name, band) = time_band_for(NaiveTime::from_hms_opt(19, 0, 0).unwrap(), &rates).unwrap();
/// assert_eq!(name, "evening");
/// assert_eq!(band.fee.to_string(), "1000");
/// assert!(time_band_for(NaiveTime::from_hms_opt(12, 0, 0).unwrap(), &rates).is_none());
/// ```
pub fn time_band_for(time: NaiveTime, rates: &TimeOfDayRates) -> Option<(&'static str, &TimeBand)> {
    let hour = time.hour();
    if rates.morning.contains(hour) {
        Some(("morning", &rates.morning))
    } else if rates.evening.contains(hour) {
        Some(("evening", &rates.evening))
    } else {
        None
    }
}

/// Adds the flat fee for a morning or evening start.
///
/// Returns `Ok(None)` when no time is selected or the hour is in neither band.
pub fn apply_time_of_day_fee(
    amount: Decimal,
    start_time: Option<NaiveTime>,
    rates: &TimeOfDayRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    let Some(time) = start_time else {
        return Ok(None);
    };
    let Some((band_name, band)) = time_band_for(time, rates) else {
        return Ok(None);
    };

    let applied = PricingRule::TimeOfDayFee.record(
        step_number,
        amount,
        RuleEffect::Add(band.fee),
        serde_json::json!({
            "start_time": time.format("%H:%M").to_string(),
            "band": band_name,
            "first_hour": band.first_hour,
            "last_hour": band.last_hour,
        }),
        |after| {
            format!(
                "Time of day fee: {} start at {}, {} + {} = {}",
                band_name,
                time.format("%H:%M"),
                amount.normalize(),
                band.fee.normalize(),
                after.normalize()
            )
        },
    )?;
    Ok(Some(applied))
}
