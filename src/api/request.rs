//! Request types for the Enrollment Pricing Engine API.
//!
//! This module defines the JSON request structures for the quote, order and
//! catalog endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::{CourseFilter, TutorFilter};
use crate::models::{CourseOffering, EnrollmentSelection, ExistingOrder, Tutor};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The course being priced. A missing course yields `MISSING_COURSE`.
    #[serde(default)]
    pub course: Option<CourseOffering>,
    /// The form selection.
    #[serde(default)]
    pub selection: EnrollmentSelection,
    /// The moment to price at; defaults to the current UTC time.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/orders/payload` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayloadRequest {
    /// The course being enrolled in.
    #[serde(default)]
    pub course: Option<CourseOffering>,
    /// The form selection.
    #[serde(default)]
    pub selection: EnrollmentSelection,
    /// Id of the order being edited, if any.
    #[serde(default)]
    pub order_id: Option<u64>,
    /// The moment to price at; defaults to the current UTC time.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/orders/edit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditOrderRequest {
    /// The course catalog to look the order's course up in.
    pub courses: Vec<CourseOffering>,
    /// The stored order to edit.
    pub order: ExistingOrder,
    /// The moment to price at; defaults to the current UTC time.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/orders/list` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListRequest {
    /// The user's stored orders, in the order the orders API returned them.
    pub orders: Vec<ExistingOrder>,
    /// The course catalog, for course order labels.
    #[serde(default)]
    pub courses: Vec<CourseOffering>,
    /// The tutor roster, for tutoring order labels.
    #[serde(default)]
    pub tutors: Vec<Tutor>,
    /// 1-based page number; defaults to 1.
    #[serde(default)]
    pub page: Option<usize>,
}

/// Request body for the `/orders/delete` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDeleteRequest {
    /// The order to remove.
    pub order_id: u64,
}

/// Request body for the `/courses/search` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSearchRequest {
    /// The course catalog to search.
    pub courses: Vec<CourseOffering>,
    /// Search criteria.
    #[serde(default)]
    pub filter: CourseFilter,
    /// 1-based page number; defaults to 1.
    #[serde(default)]
    pub page: Option<usize>,
}

/// Request body for the `/tutors/search` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorSearchRequest {
    /// The tutor roster to search.
    pub tutors: Vec<Tutor>,
    /// Filter criteria.
    #[serde(default)]
    pub filter: TutorFilter,
}
