//! Serde helpers for the field shapes used by the storefront API.
//!
//! Form fields carry `YYYY-MM-DD` and `HH:MM`; stored orders come back as
//! `YYYY-MM-DDTHH:MM:SS` and `HH:MM:SS`. Both shapes deserialize, and the
//! short form-field shape is what gets serialized. The person count arrives
//! as whatever the form field held and is read leniently.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parses a date, ignoring any `T...` time suffix.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub(crate) fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_FORMAT))
        .ok()
}

/// `Option<NaiveDate>` where `null` and `""` both mean "not selected".
pub(crate) mod optional_date {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => s.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_date(value)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {value}"))),
        }
    }
}

/// `Option<NaiveTime>` where `null` and `""` both mean "not selected".
pub(crate) mod optional_time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => s.serialize_str(&time.format(TIME_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_time(value)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time: {value}"))),
        }
    }
}

/// A required time written as `HH:MM`.
pub(crate) mod time_hm {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time: {raw}")))
    }
}

/// A person count read from a raw form value.
///
/// Accepts a JSON number or string and never fails: strings go through
/// [`parse_person_count`](super::selection::parse_person_count), fractions are
/// truncated, and anything that is not a positive count in `u32` range becomes
/// 0, which pricing treats as "defaulted to 1".
pub(crate) mod lenient_person_count {
    use std::fmt;

    use serde::Deserializer;
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

    use super::super::selection::parse_person_count;

    struct PersonCountVisitor;

    impl<'de> Visitor<'de> for PersonCountVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a person count")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(0))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
            // NaN fails both comparisons
            if v >= 1.0 && v <= f64::from(u32::MAX) {
                Ok(v.trunc() as u32)
            } else {
                Ok(0)
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            match parse_person_count(Some(v)) {
                (count, false) => Ok(count),
                (_, true) => Ok(0),
            }
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<u32, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<u32, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<u32, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        d.deserialize_any(PersonCountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_plain_and_datetime_shapes() {
        let expected = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        assert_eq!(parse_date("2026-02-07"), Some(expected));
        assert_eq!(parse_date("2026-02-07T09:00:00"), Some(expected));
        assert_eq!(parse_date("07.02.2026"), None);
    }

    #[test]
    fn test_parse_time_accepts_with_and_without_seconds() {
        let expected = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        assert_eq!(parse_time("19:00"), Some(expected));
        assert_eq!(parse_time("19:00:00"), Some(expected));
        assert_eq!(parse_time("7pm"), None);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Form {
        #[serde(deserialize_with = "lenient_person_count::deserialize")]
        persons: u32,
    }

    fn persons(raw: &str) -> u32 {
        let json = format!("{{\"persons\": {}}}", raw);
        serde_json::from_str::<Form>(&json).unwrap().persons
    }

    #[test]
    fn test_person_count_accepts_numbers_and_strings() {
        assert_eq!(persons("6"), 6);
        assert_eq!(persons(r#""3""#), 3);
        assert_eq!(persons(r#""3 people""#), 3);
        assert_eq!(persons("2.7"), 2);
    }

    #[test]
    fn test_invalid_person_count_reads_as_zero() {
        assert_eq!(persons("-1"), 0);
        assert_eq!(persons("0"), 0);
        assert_eq!(persons(r#""abc""#), 0);
        assert_eq!(persons(r#""-2""#), 0);
        assert_eq!(persons("null"), 0);
        assert_eq!(persons("true"), 0);
        assert_eq!(persons("[3]"), 0);
        assert_eq!(persons(r#"{"n": 3}"#), 0);
        assert_eq!(persons("0.5"), 0);
        assert_eq!(persons("99999999999"), 0);
    }
}
