//! Core data models for the Enrollment Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod course;
pub(crate) mod formats;
mod order;
mod price_breakdown;
mod selection;
mod tutor;

pub use course::CourseOffering;
pub use order::{EnrollmentOrder, ExistingOrder, OrderTarget};
pub use price_breakdown::{AppliedRule, PriceBreakdown, PricingWarning, RuleEffect};
pub use selection::{EnrollmentSelection, OptionFlags, parse_person_count};
pub use tutor::Tutor;
