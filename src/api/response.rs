//! Response types for the Enrollment Pricing Engine API.
//!
//! This module defines the success bodies that wrap domain results, the error
//! response structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EnrollmentOrder, EnrollmentSelection, PriceBreakdown};

/// Response body for the `/orders/payload` endpoint.
///
/// Describes the request the transport should send to the orders API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayloadResponse {
    /// HTTP verb (`POST` to create, `PUT` to update).
    pub method: String,
    /// Resource path relative to the orders API base URL.
    pub path: String,
    /// The JSON body to send.
    pub body: EnrollmentOrder,
}

/// Response body for the `/orders/delete` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDeleteResponse {
    /// HTTP verb, always `DELETE`.
    pub method: String,
    /// Resource path relative to the orders API base URL.
    pub path: String,
}

/// Response body for the `/orders/edit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditOrderResponse {
    /// The selection prefilled from the stored order.
    pub selection: EnrollmentSelection,
    /// The price of that selection today.
    pub quote: PriceBreakdown,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::MissingCourse => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "MISSING_COURSE",
                    message,
                    "A course must be selected before a price can be computed",
                ),
            ),
            EngineError::MissingSchedule { field } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "MISSING_SCHEDULE",
                    message,
                    format!("Field '{}' is required to submit an order", field),
                ),
            ),
            EngineError::CourseNotFound { course_id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "COURSE_NOT_FOUND",
                    message,
                    format!("No course with id {} in the supplied catalog", course_id),
                ),
            ),
            EngineError::CalculationError { message: details } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", details),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_course_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::MissingCourse.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "MISSING_COURSE");
    }

    #[test]
    fn test_missing_schedule_names_field() {
        let api_error: ApiErrorResponse = EngineError::MissingSchedule {
            field: "date_start".to_string(),
        }
        .into();
        assert_eq!(api_error.error.code, "MISSING_SCHEDULE");
        assert!(api_error.error.details.unwrap().contains("date_start"));
    }

    #[test]
    fn test_course_not_found_maps_to_not_found() {
        let api_error: ApiErrorResponse = EngineError::CourseNotFound { course_id: 9 }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "COURSE_NOT_FOUND");
    }
}
