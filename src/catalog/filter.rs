//! Course and tutor search filters.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CourseOffering, Tutor};

/// Criteria from the course search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFilter {
    /// Case-insensitive substring of the course name. Empty matches all.
    pub name: String,
    /// Course level, compared case-insensitively. Empty matches all.
    pub level: String,
}

impl CourseFilter {
    /// Returns true if `course` satisfies the filter.
    pub fn matches(&self, course: &CourseOffering) -> bool {
        let query = self.name.trim().to_lowercase();
        let name_matches = course.name.to_lowercase().contains(&query);
        let level_matches =
            self.level.is_empty() || course.level.to_lowercase() == self.level.to_lowercase();
        name_matches && level_matches
    }
}

/// Criteria from the tutor filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorFilter {
    /// Language level, compared case-insensitively. Empty matches all.
    pub qualification: String,
    /// Minimum years of experience.
    pub min_experience: u32,
}

impl TutorFilter {
    /// Returns true if `tutor` satisfies the filter.
    pub fn matches(&self, tutor: &Tutor) -> bool {
        let qualification_matches = self.qualification.is_empty()
            || tutor.language_level.to_lowercase() == self.qualification.to_lowercase();
        qualification_matches && tutor.work_experience >= self.min_experience
    }
}

/// Returns the courses matching `filter`, in catalog order.
///
/// # Example
///
/// ```
/// use enrollment_pricing::catalog::{CourseFilter, filter_courses};
///
/// let filter = CourseFilter { name: "  ENGLISH ".to_string(), level: String::new() };
/// assert!(filter_courses(&[], &filter).is_empty());
/// ```
pub fn filter_courses(courses: &[CourseOffering], filter: &CourseFilter) -> Vec<CourseOffering> {
    courses
        .iter()
        .filter(|course| filter.matches(course))
        .cloned()
        .collect()
}

/// Returns the tutors matching `filter`, in roster order.
pub fn filter_tutors(tutors: &[Tutor], filter: &TutorFilter) -> Vec<Tutor> {
    tutors
        .iter()
        .filter(|tutor| filter.matches(tutor))
        .cloned()
        .collect()
}

/// Looks a course up by id.
///
/// # Errors
///
/// Returns [`EngineError::CourseNotFound`] when no course has that id.
pub fn find_course(courses: &[CourseOffering], course_id: u64) -> EngineResult<&CourseOffering> {
    courses
        .iter()
        .find(|course| course.id == course_id)
        .ok_or(EngineError::CourseNotFound { course_id })
}
