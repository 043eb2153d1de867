//! Property tests for the pricing core.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use enrollment_pricing::calculation::compute_price;
use enrollment_pricing::config::PricingRates;
use enrollment_pricing::models::{CourseOffering, EnrollmentSelection, OptionFlags, RuleEffect};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn course(fee: i64, week_length: u32, total_length: u32) -> CourseOffering {
    CourseOffering {
        id: 1,
        name: "English".to_string(),
        description: String::new(),
        teacher: String::new(),
        level: String::new(),
        fee_per_hour: Decimal::new(fee, 0),
        week_length,
        total_length,
        start_dates: vec![],
    }
}

fn option_flags() -> impl Strategy<Value = OptionFlags> {
    any::<[bool; 6]>().prop_map(|flags| OptionFlags {
        intensive_course: flags[0],
        supplementary: flags[1],
        personalized: flags[2],
        excursions: flags[3],
        assessment: flags[4],
        interactive: flags[5],
    })
}

fn selection() -> impl Strategy<Value = EnrollmentSelection> {
    (
        proptest::option::of(0i64..120),
        proptest::option::of((0u32..24, 0u32..60)),
        0u32..12,
        option_flags(),
    )
        .prop_map(|(day_offset, hm, person_count, options)| EnrollmentSelection {
            start_date: day_offset.map(|days| now().date() + Duration::days(days)),
            start_time: hm.and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0)),
            person_count,
            options,
        })
}

proptest! {
    #[test]
    fn base_only_total_is_fee_times_hours(fee in 0i64..5000, week_length in 0u32..40, total_length in 0u32..52) {
        let breakdown = compute_price(
            Some(&course(fee, week_length, total_length)),
            &EnrollmentSelection::default(),
            now(),
            &PricingRates::default(),
        ).unwrap();

        let expected = Decimal::from(fee * i64::from(week_length) * i64::from(total_length));
        prop_assert_eq!(breakdown.base_cost, expected);
        prop_assert_eq!(breakdown.total, expected);
    }

    #[test]
    fn zero_length_gives_zero_base(fee in 0i64..5000, week_length in 0u32..40) {
        let breakdown = compute_price(
            Some(&course(fee, week_length, 0)),
            &EnrollmentSelection::default(),
            now(),
            &PricingRates::default(),
        ).unwrap();
        prop_assert_eq!(breakdown.base_cost, Decimal::ZERO);

        let breakdown = compute_price(
            Some(&course(fee, 0, week_length)),
            &EnrollmentSelection::default(),
            now(),
            &PricingRates::default(),
        ).unwrap();
        prop_assert_eq!(breakdown.base_cost, Decimal::ZERO);
    }

    #[test]
    fn pricing_is_idempotent(selection in selection()) {
        let offering = course(100, 10, 4);
        let rates = PricingRates::default();
        let first = compute_price(Some(&offering), &selection, now(), &rates).unwrap();
        let second = compute_price(Some(&offering), &selection, now(), &rates).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_is_whole_and_non_negative(selection in selection()) {
        let breakdown = compute_price(
            Some(&course(100, 10, 4)),
            &selection,
            now(),
            &PricingRates::default(),
        ).unwrap();
        prop_assert!(breakdown.total >= Decimal::ZERO);
        prop_assert_eq!(breakdown.total, breakdown.total.trunc());
    }

    #[test]
    fn group_discount_needs_five_persons(selection in selection()) {
        let breakdown = compute_price(
            Some(&course(100, 10, 4)),
            &selection,
            now(),
            &PricingRates::default(),
        ).unwrap();
        let group = selection.person_count >= 5;
        prop_assert_eq!(breakdown.group_enrollment, group);
        prop_assert_eq!(breakdown.applied("group_discount").is_some(), group);
    }

    #[test]
    fn time_fee_follows_hour_bands(hour in 0u32..24, minute in 0u32..60) {
        let selection = EnrollmentSelection {
            start_time: NaiveTime::from_hms_opt(hour, minute, 0),
            ..EnrollmentSelection::default()
        };
        let breakdown = compute_price(
            Some(&course(100, 10, 4)),
            &selection,
            now(),
            &PricingRates::default(),
        ).unwrap();

        let expected = match hour {
            9..=11 => Some(RuleEffect::Add(Decimal::new(400, 0))),
            18..=20 => Some(RuleEffect::Add(Decimal::new(1000, 0))),
            _ => None,
        };
        prop_assert_eq!(breakdown.applied("time_of_day_fee").map(|rule| rule.effect), expected);
    }
}
