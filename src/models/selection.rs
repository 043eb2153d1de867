//! Enrollment selection model.
//!
//! This module defines the [`EnrollmentSelection`] built from the enrollment
//! form, the [`OptionFlags`] toggles it carries, and the person-count parsing
//! that turns a raw form field into a usable count.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ExistingOrder;
use super::formats::{lenient_person_count, optional_date, optional_time};

/// The optional extras a user can toggle on the enrollment form.
///
/// Only `intensive_course`, `supplementary`, `personalized` and `excursions`
/// change the price; `assessment` and `interactive` are carried through to the
/// submitted order unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionFlags {
    /// Intensive course (more hours per week, priced as a multiplier).
    pub intensive_course: bool,
    /// Supplementary study materials (flat fee per person).
    pub supplementary: bool,
    /// Personalized lessons (flat fee per course week).
    pub personalized: bool,
    /// Cultural excursions (priced as a multiplier).
    pub excursions: bool,
    /// Level assessment at the end of the course.
    pub assessment: bool,
    /// Access to the interactive online platform.
    pub interactive: bool,
}

/// The user's chosen date, time, options and person count for one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentSelection {
    /// Selected start date, if any.
    #[serde(default, with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    /// Selected start time, if any.
    #[serde(default, with = "optional_time")]
    pub start_time: Option<NaiveTime>,
    /// Number of people enrolling. Values below 1 are priced as 1.
    #[serde(
        default = "default_person_count",
        deserialize_with = "lenient_person_count::deserialize"
    )]
    pub person_count: u32,
    /// Option toggles.
    #[serde(flatten)]
    pub options: OptionFlags,
}

fn default_person_count() -> u32 {
    1
}

impl Default for EnrollmentSelection {
    fn default() -> Self {
        Self {
            start_date: None,
            start_time: None,
            person_count: default_person_count(),
            options: OptionFlags::default(),
        }
    }
}

impl EnrollmentSelection {
    /// Builds the selection for editing an existing order.
    ///
    /// Missing fields fall back to the blank-form values: no date, no time,
    /// one person, every option off.
    pub fn from_order(order: &ExistingOrder) -> Self {
        Self {
            start_date: order.date_start,
            start_time: order.time_start,
            person_count: order.persons.filter(|&p| p >= 1).unwrap_or(1),
            options: order.options,
        }
    }

    /// Returns the person count used for pricing and whether it was defaulted.
    pub fn effective_person_count(&self) -> (u32, bool) {
        if self.person_count >= 1 {
            (self.person_count, false)
        } else {
            (1, true)
        }
    }
}

/// Parses the raw person-count form field.
///
/// Reads the leading integer after trimming whitespace, so `"3 people"` is 3.
/// An absent, empty, unparsable or non-positive value becomes 1. The second
/// element of the tuple is true when that fallback was used.
///
/// # Examples
///
/// ```
/// use enrollment_pricing::models::parse_person_count;
///
/// assert_eq!(parse_person_count(Some("6")), (6, false));
/// assert_eq!(parse_person_count(Some(" 3 people")), (3, false));
/// assert_eq!(parse_person_count(Some("abc")), (1, true));
/// assert_eq!(parse_person_count(Some("0")), (1, true));
/// assert_eq!(parse_person_count(None), (1, true));
/// ```
pub fn parse_person_count(raw: Option<&str>) -> (u32, bool) {
    let Some(raw) = raw else {
        return (1, true);
    };

    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digit_len = digits.bytes().take_while(u8::is_ascii_digit).count();

    match digits[..digit_len].parse::<u32>() {
        Ok(count) if sign > 0 && count >= 1 => (count, false),
        _ => (1, true),
    }
}
