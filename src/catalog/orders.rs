//! The orders page: stored orders as numbered, labelled table rows.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::formats::{optional_date, optional_time};
use crate::models::{CourseOffering, ExistingOrder, OrderTarget, Tutor};

use super::pagination::{Page, paginate};

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    /// 1-based position in the whole order list.
    pub row_number: usize,
    /// Stored order id.
    pub order_id: u64,
    /// Course name, or the tutoring label for tutor bookings.
    pub label: String,
    /// Start date.
    #[serde(default, with = "optional_date")]
    pub date_start: Option<NaiveDate>,
    /// Start time, as `HH:MM`.
    #[serde(default, with = "optional_time")]
    pub time_start: Option<NaiveTime>,
    /// Price stored with the order.
    pub price: Decimal,
}

impl OrderRow {
    fn new(
        row_number: usize,
        order: &ExistingOrder,
        courses: &[CourseOffering],
        tutors: &[Tutor],
    ) -> Self {
        Self {
            row_number,
            order_id: order.id,
            label: order_label(order, courses, tutors),
            date_start: order.date_start,
            time_start: order.time_start,
            price: order.price,
        }
    }

    /// The request that removes this row's order.
    pub fn delete_target(&self) -> OrderTarget {
        OrderTarget::Delete {
            order_id: self.order_id,
        }
    }
}

/// The display name of an order.
///
/// Course orders show the course name. Anything else, including a course id
/// missing from `courses`, is a tutoring booking labelled by tutor.
///
/// # Example
///
/// ```
/// use enrollment_pricing::catalog::order_label;
/// use enrollment_pricing::models::ExistingOrder;
///
/// let order: ExistingOrder = serde_json::from_str(r#"{"id": 3, "tutor_id": 9}"#).unwrap();
/// assert_eq!(order_label(&order, &[], &[]), "Tutoring with a tutor");
/// ```
pub fn order_label(order: &ExistingOrder, courses: &[CourseOffering], tutors: &[Tutor]) -> String {
    let course = order
        .course_id
        .and_then(|id| courses.iter().find(|course| course.id == id));
    if let Some(course) = course {
        return course.name.clone();
    }

    let tutor = order
        .tutor_id
        .and_then(|id| tutors.iter().find(|tutor| tutor.id == id));
    match tutor {
        Some(tutor) => format!("Tutoring with {}", tutor.name),
        None => "Tutoring with a tutor".to_string(),
    }
}

/// Returns page `page` (1-based) of the orders table.
///
/// Row numbers continue across pages, so the first row of page 2 at five per
/// page is row 6.
pub fn order_page(
    orders: &[ExistingOrder],
    courses: &[CourseOffering],
    tutors: &[Tutor],
    page: usize,
    per_page: usize,
) -> Page<OrderRow> {
    let Page {
        items,
        page,
        total_pages,
        total_items,
        first_row,
    } = paginate(orders, page, per_page);

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, order)| {
            OrderRow::new(first_row.saturating_add(index), order, courses, tutors)
        })
        .collect();

    Page {
        items: rows,
        page,
        total_pages,
        total_items,
        first_row,
    }
}
