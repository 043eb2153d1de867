//! Early-registration discount.
//!
//! A booking qualifies when the course starts at least `min_days_ahead` days
//! after the moment of booking. The day difference runs from `now` to midnight
//! at the start of the selected date and is rounded up, so any part of a day
//! counts as a whole day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::config::EarlyRegistrationRates;
use crate::error::EngineResult;
use crate::models::{AppliedRule, RuleEffect};

use super::PricingRule;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Returns the number of days from `now` until midnight of `start_date`,
/// rounded up.
///
/// # Example
///
/// ```
/// use enrollment_pricing::calculation::days_until_start;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let now = NaiveDateTime::parse_from_str("2026-01-07 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let start = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
/// assert_eq!(days_until_start(start, now), 31);
///
/// // Half a day later the difference is 30.5 days, rounded up to 31.
/// let noon = NaiveDateTime::parse_from_str("2026-01-07 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_until_start(start, noon), 31);
/// ```
pub fn days_until_start(start_date: NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (start_date.and_time(NaiveTime::MIN) - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Returns true if a course starting on `start_date` qualifies for the
/// early-registration discount when booked at `now`.
pub fn is_early_registration(
    start_date: NaiveDate,
    now: NaiveDateTime,
    rates: &EarlyRegistrationRates,
) -> bool {
    days_until_start(start_date, now) >= rates.min_days_ahead
}

/// Applies the early-registration multiplier when the start date is far
/// enough ahead.
///
/// Returns `Ok(None)` when no date is selected or the date is too close.
pub fn apply_early_registration(
    amount: Decimal,
    start_date: Option<NaiveDate>,
    now: NaiveDateTime,
    rates: &EarlyRegistrationRates,
    step_number: u32,
) -> EngineResult<Option<AppliedRule>> {
    let Some(date) = start_date else {
        return Ok(None);
    };
    let days_ahead = days_until_start(date, now);
    if days_ahead < rates.min_days_ahead {
        return Ok(None);
    }

    let effect = RuleEffect::Multiply(rates.multiplier);
    let applied = PricingRule::EarlyRegistration.record(
        step_number,
        amount,
        effect,
        serde_json::json!({
            "start_date": date.to_string(),
            "now": now.to_string(),
            "days_ahead": days_ahead,
            "min_days_ahead": rates.min_days_ahead,
        }),
        |after| {
            format!(
                "Early registration: {} days ahead (>= {}), {} × {} = {}",
                days_ahead,
                rates.min_days_ahead,
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

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn rates() -> EarlyRegistrationRates {
        PricingRates::default().early_registration
    }

    #[test]
    fn test_days_until_start_whole_days() {
        let start = date("2026-02-07");
        assert_eq!(days_until_start(start, make_datetime("2026-01-08 00:00:00")), 30);
        assert_eq!(days_until_start(start, make_datetime("2026-01-09 00:00:00")), 29);
        assert_eq!(days_until_start(start, make_datetime("2026-02-07 00:00:00")), 0);
    }

    #[test]
    fn test_days_until_start_rounds_partial_days_up() {
        let start = date("2026-02-07");
        // 29.5 days
        assert_eq!(days_until_start(start, make_datetime("2026-01-08 12:00:00")), 30);
        // 0.25 days
        assert_eq!(days_until_start(start, make_datetime("2026-02-06 18:00:00")), 1);
    }

    #[test]
    fn test_days_until_start_in_the_past() {
        let start = date("2026-02-07");
        // Noon on the start day is half a day past midnight: ceil(-0.5) = 0
        assert_eq!(days_until_start(start, make_datetime("2026-02-07 12:00:00")), 0);
        assert_eq!(days_until_start(start, make_datetime("2026-02-09 00:00:00")), -2);
    }

    #[test]
    fn test_exactly_thirty_days_qualifies() {
        assert!(is_early_registration(
            date("2026-02-07"),
            make_datetime("2026-01-08 00:00:00"),
            &rates()
        ));
    }

    #[test]
    fn test_twenty_nine_whole_days_does_not_qualify() {
        assert!(!is_early_registration(
            date("2026-02-07"),
            make_datetime("2026-01-09 00:00:00"),
            &rates()
        ));
    }

    #[test]
    fn test_discount_multiplies_by_point_nine() {
        let applied = apply_early_registration(
            dec("6000"),
            Some(date("2026-02-07")),
            make_datetime("2026-01-07 00:00:00"),
            &rates(),
            3,
        )
        .unwrap()
        .expect("31 days ahead should fire");

        assert_eq!(applied.amount_after, dec("5400"));
        assert_eq!(applied.input["days_ahead"], 31);
        assert!(applied.reasoning.contains("31 days ahead"));
    }

    #[test]
    fn test_late_booking_does_not_fire() {
        let result = apply_early_registration(
            dec("4000"),
            Some(date("2026-02-07")),
            make_datetime("2026-02-01 09:00:00"),
            &rates(),
            3,
        );
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_no_date_does_not_fire() {
        let result = apply_early_registration(
            dec("4000"),
            None,
            make_datetime("2026-01-01 00:00:00"),
            &rates(),
            3,
        );
        assert!(result.unwrap().is_none());
    }
}
