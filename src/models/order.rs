//! Order models: stored orders read back for editing, and the payload
//! submitted to create or update one.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::formats::{optional_date, optional_time, time_hm};
use super::{CourseOffering, EnrollmentSelection, OptionFlags, PriceBreakdown};

/// An order as returned by the orders API, used to prefill the form in edit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingOrder {
    /// Order identifier.
    pub id: u64,
    /// Course the order enrolls in, for course orders.
    #[serde(default)]
    pub course_id: Option<u64>,
    /// Tutor the order books, for tutoring orders.
    #[serde(default)]
    pub tutor_id: Option<u64>,
    /// Start date.
    #[serde(default, with = "optional_date")]
    pub date_start: Option<NaiveDate>,
    /// Start time.
    #[serde(default, with = "optional_time")]
    pub time_start: Option<NaiveTime>,
    /// Duration in weeks (courses) or hours (tutoring).
    #[serde(default)]
    pub duration: Option<u32>,
    /// Number of people.
    #[serde(default)]
    pub persons: Option<u32>,
    /// Price stored with the order.
    #[serde(default)]
    pub price: Decimal,
    /// Option toggles stored with the order.
    #[serde(flatten)]
    pub options: OptionFlags,
}

/// What a request to the orders API does: create, replace or remove an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OrderTarget {
    /// A new order.
    Create,
    /// An edit of the order with the given id.
    Update {
        /// The order being edited.
        order_id: u64,
    },
    /// Removal of the order with the given id.
    Delete {
        /// The order being removed.
        order_id: u64,
    },
}

impl OrderTarget {
    /// Creates the target for an optional edit-mode order id.
    pub fn for_order(order_id: Option<u64>) -> Self {
        match order_id {
            Some(order_id) => OrderTarget::Update { order_id },
            None => OrderTarget::Create,
        }
    }

    /// The HTTP verb the transport uses for this target.
    pub fn method(&self) -> &'static str {
        match self {
            OrderTarget::Create => "POST",
            OrderTarget::Update { .. } => "PUT",
            OrderTarget::Delete { .. } => "DELETE",
        }
    }

    /// The resource path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            OrderTarget::Create => "/orders".to_string(),
            OrderTarget::Update { order_id } | OrderTarget::Delete { order_id } => {
                format!("/orders/{}", order_id)
            }
        }
    }
}

/// The body submitted to the orders API for a course enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentOrder {
    /// Course being enrolled in.
    pub course_id: u64,
    /// Always `null` for course enrollments.
    pub tutor_id: Option<u64>,
    /// Start date.
    pub date_start: NaiveDate,
    /// Start time, as `HH:MM`.
    #[serde(with = "time_hm")]
    pub time_start: NaiveTime,
    /// Course duration in weeks.
    pub duration: u32,
    /// Number of people enrolling.
    pub persons: u32,
    /// Rounded total price, identical to the displayed total.
    pub price: i64,
    /// Whether the early-registration discount applied.
    pub early_registration: bool,
    /// Whether the group discount applied.
    pub group_enrollment: bool,
    /// Intensive course option.
    pub intensive_course: bool,
    /// Supplementary materials option.
    pub supplementary: bool,
    /// Personalized lessons option.
    pub personalized: bool,
    /// Excursions option.
    pub excursions: bool,
    /// Assessment option.
    pub assessment: bool,
    /// Interactive platform option.
    pub interactive: bool,
}

impl EnrollmentOrder {
    /// Builds the submission payload from a computed price.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingSchedule`] if no start date or time is
    /// selected, and [`EngineError::CalculationError`] if the rounded total
    /// does not fit the payload's integer price.
    pub fn from_quote(
        course: &CourseOffering,
        selection: &EnrollmentSelection,
        breakdown: &PriceBreakdown,
    ) -> EngineResult<Self> {
        let date_start = selection
            .start_date
            .ok_or_else(|| EngineError::MissingSchedule {
                field: "date_start".to_string(),
            })?;
        let time_start = selection
            .start_time
            .ok_or_else(|| EngineError::MissingSchedule {
                field: "time_start".to_string(),
            })?;
        let price = price_as_integer(breakdown.total)?;
        let options = selection.options;

        Ok(Self {
            course_id: course.id,
            tutor_id: None,
            date_start,
            time_start,
            duration: course.total_length,
            persons: breakdown.person_count,
            price,
            early_registration: breakdown.early_registration,
            group_enrollment: breakdown.group_enrollment,
            intensive_course: options.intensive_course,
            supplementary: options.supplementary,
            personalized: options.personalized,
            excursions: options.excursions,
            assessment: options.assessment,
            interactive: options.interactive,
        })
    }
}

fn price_as_integer(total: Decimal) -> EngineResult<i64> {
    if !total.fract().is_zero() {
        return Err(EngineError::CalculationError {
            message: format!("price {} is not a whole currency amount", total),
        });
    }
    total.to_i64().ok_or_else(|| EngineError::CalculationError {
        message: format!("price {} is out of range", total),
    })
}
