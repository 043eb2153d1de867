//! Course offering model and its start-slot schedule.
//!
//! This module defines the [`CourseOffering`] struct as delivered by the
//! catalog API, together with the schedule queries the enrollment form needs:
//! which dates a course starts on, which times are offered on a date, and when
//! a course that starts on a given date ends.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable course definition with an hourly rate and a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOffering {
    /// Catalog identifier of the course.
    pub id: u64,
    /// Display name of the course.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Name of the teacher running the course.
    #[serde(default)]
    pub teacher: String,
    /// Course level (e.g. "beginner", "intermediate", "advanced").
    #[serde(default)]
    pub level: String,
    /// Fee charged per academic hour.
    #[serde(rename = "course_fee_per_hour")]
    pub fee_per_hour: Decimal,
    /// Hours of tuition per week.
    pub week_length: u32,
    /// Duration of the course in weeks.
    pub total_length: u32,
    /// Date/time pairs the course can begin at.
    #[serde(default)]
    pub start_dates: Vec<NaiveDateTime>,
}

impl CourseOffering {
    /// Returns the total number of tuition hours (`week_length * total_length`).
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert_eq!(course.total_hours(), 40);
    /// ```
    pub fn total_hours(&self) -> u64 {
        u64::from(self.week_length) * u64::from(self.total_length)
    }

    /// Returns the distinct dates the course can start on, oldest first.
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.start_dates.iter().map(|dt| dt.date()).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Returns the start times offered on `date`, earliest first.
    pub fn times_on(&self, date: NaiveDate) -> Vec<NaiveTime> {
        let mut times: Vec<NaiveTime> = self
            .start_dates
            .iter()
            .filter(|dt| dt.date() == date)
            .map(|dt| dt.time())
            .collect();
        times.sort();
        times.dedup();
        times
    }

    /// Returns true if the course has at least one start slot on `date`.
    pub fn offers_date(&self, date: NaiveDate) -> bool {
        self.start_dates.iter().any(|dt| dt.date() == date)
    }

    /// Returns true if the course can begin at exactly `date` and `time`.
    pub fn offers_slot(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.start_dates.contains(&date.and_time(time))
    }

    /// Returns the date the course ends when started on `start`.
    ///
    /// The course runs for `total_length` whole weeks.
    ///
    /// # Examples
    ///
    /// ```
    /// use enrollment_pricing::models::CourseOffering;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let course = CourseOffering {
    ///     id: 1,
    ///     name: "Business German".to_string(),
    ///     description: String::new(),
    ///     teacher: String::new(),
    ///     level: "advanced".to_string(),
    ///     fee_per_hour: Decimal::new(250, 0),
    ///     week_length: 3,
    ///     total_length: 4,
    ///     start_dates: vec![],
    /// };
    /// let start = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
    /// assert_eq!(course.end_date(start), NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
    /// ```
    pub fn end_date(&self, start: NaiveDate) -> NaiveDate {
        start + Duration::weeks(i64::from(self.total_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn create_test_course() -> CourseOffering {
        CourseOffering {
            id: 7,
            name: "Spanish Conversation".to_string(),
            description: "Speaking practice".to_string(),
            teacher: "Maria Lopez".to_string(),
            level: "intermediate".to_string(),
            fee_per_hour: Decimal::new(100, 0),
            week_length: 10,
            total_length: 4,
            start_dates: vec![
                make_datetime("2026-02-09T18:00:00"),
                make_datetime("2026-02-07T19:00:00"),
                make_datetime("2026-02-07T09:00:00"),
                make_datetime("2026-02-09T10:00:00"),
            ],
        }
    }

    #[test]
    fn test_total_hours_multiplies_week_length_by_weeks() {
        assert_eq!(create_test_course().total_hours(), 40);
    }

    #[test]
    fn test_total_hours_past_u32_range() {
        let mut course = create_test_course();
        course.week_length = 70_000;
        course.total_length = 70_000;
        assert_eq!(course.total_hours(), 4_900_000_000);

        course.week_length = u32::MAX;
        course.total_length = u32::MAX;
        assert_eq!(course.total_hours(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_available_dates_are_unique_and_sorted() {
        let course = create_test_course();
        assert_eq!(
            course.available_dates(),
            vec![date("2026-02-07"), date("2026-02-09")]
        );
    }

    #[test]
    fn test_times_on_date_are_sorted() {
        let course = create_test_course();
        assert_eq!(
            course.times_on(date("2026-02-07")),
            vec![time("09:00"), time("19:00")]
        );
        assert!(course.times_on(date("2026-02-08")).is_empty());
    }

    #[test]
    fn test_offers_slot_requires_exact_pair() {
        let course = create_test_course();
        assert!(course.offers_slot(date("2026-02-07"), time("19:00")));
        assert!(!course.offers_slot(date("2026-02-07"), time("18:00")));
        assert!(course.offers_date(date("2026-02-09")));
        assert!(!course.offers_date(date("2026-02-10")));
    }

    #[test]
    fn test_end_date_adds_whole_weeks() {
        let course = create_test_course();
        assert_eq!(course.end_date(date("2026-02-07")), date("2026-03-07"));
    }

    #[test]
    fn test_deserialize_from_catalog_json() {
        let json = r#"{
            "id": 3,
            "name": "French A1",
            "description": "Basics",
            "teacher": "Jean Dupont",
            "level": "Beginner",
            "course_fee_per_hour": 200,
            "week_length": 2,
            "total_length": 8,
            "start_dates": ["2026-03-02T09:00:00", "2026-03-02T18:00:00"]
        }"#;

        let course: CourseOffering = serde_json::from_str(json).unwrap();
        assert_eq!(course.fee_per_hour, Decimal::new(200, 0));
        assert_eq!(course.total_hours(), 16);
        assert_eq!(course.start_dates.len(), 2);
    }
}
