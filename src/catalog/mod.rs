//! Catalog filtering and pagination.
//!
//! The storefront lists courses and tutors fetched from the catalog API. This
//! module holds the list logic that sits between the fetched records and the
//! rendered page: search filters, page slicing and the orders table.

mod filter;
mod orders;
mod pagination;

pub use filter::{CourseFilter, TutorFilter, filter_courses, filter_tutors, find_course};
pub use orders::{OrderRow, order_label, order_page};
pub use pagination::{Page, paginate};
