//! HTTP request handlers for the Enrollment Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{filter_courses, filter_tutors, find_course, order_page, paginate};
use crate::error::EngineError;
use crate::models::{EnrollmentOrder, EnrollmentSelection, OrderTarget};

use super::request::{
    CourseSearchRequest, EditOrderRequest, OrderDeleteRequest, OrderListRequest,
    OrderPayloadRequest, QuoteRequest, TutorSearchRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, EditOrderResponse, OrderDeleteResponse, OrderPayloadResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/orders/payload", post(order_payload_handler))
        .route("/orders/edit", post(edit_order_handler))
        .route("/orders/list", post(order_list_handler))
        .route("/orders/delete", post(order_delete_handler))
        .route("/courses/search", post(course_search_handler))
        .route("/tutors/search", post(tutor_search_handler))
        .with_state(state)
}

/// Handler for POST /quote.
///
/// Prices a course and a selection.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let now = request.now.unwrap_or_else(current_time);
    match state
        .calculator()
        .quote(request.course.as_ref(), &request.selection, now)
    {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                course_id = breakdown.course_id,
                total = %breakdown.total,
                rules_applied = breakdown.applied_rules.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Quote computed"
            );
            json_ok(&breakdown)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /orders/payload.
///
/// Prices the selection and returns the request the transport should send to
/// the orders API: POST for a new order, PUT when editing `order_id`.
async fn order_payload_handler(
    State(state): State<AppState>,
    payload: Result<Json<OrderPayloadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing order payload request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let now = request.now.unwrap_or_else(current_time);
    let result = request
        .course
        .as_ref()
        .ok_or(EngineError::MissingCourse)
        .and_then(|course| {
            let breakdown = state
                .calculator()
                .quote(Some(course), &request.selection, now)?;
            EnrollmentOrder::from_quote(course, &request.selection, &breakdown)
        });

    match result {
        Ok(body) => {
            let target = OrderTarget::for_order(request.order_id);
            info!(
                correlation_id = %correlation_id,
                course_id = body.course_id,
                price = body.price,
                method = target.method(),
                "Order payload built"
            );
            json_ok(&OrderPayloadResponse {
                method: target.method().to_string(),
                path: target.path(),
                body,
            })
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /orders/edit.
///
/// Finds the stored order's course, prefills the selection from the order and
/// reprices it.
async fn edit_order_handler(
    State(state): State<AppState>,
    payload: Result<Json<EditOrderRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing edit order request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let now = request.now.unwrap_or_else(current_time);
    let selection = EnrollmentSelection::from_order(&request.order);
    let result = request
        .order
        .course_id
        .ok_or(EngineError::MissingCourse)
        .and_then(|course_id| find_course(&request.courses, course_id))
        .and_then(|course| state.calculator().quote(Some(course), &selection, now));

    match result {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                order_id = request.order.id,
                total = %quote.total,
                "Order prefilled for editing"
            );
            json_ok(&EditOrderResponse { selection, quote })
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /orders/list.
///
/// Labels and numbers one page of the user's stored orders.
async fn order_list_handler(
    State(state): State<AppState>,
    payload: Result<Json<OrderListRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let page = order_page(
        &request.orders,
        &request.courses,
        &request.tutors,
        request.page.unwrap_or(1),
        state.settings().page_size,
    );
    info!(
        correlation_id = %correlation_id,
        orders = page.total_items,
        page = page.page,
        "Order list built"
    );
    json_ok(&page)
}

/// Handler for POST /orders/delete.
///
/// Returns the request the transport sends to remove an order.
async fn order_delete_handler(
    payload: Result<Json<OrderDeleteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let target = OrderTarget::Delete {
        order_id: request.order_id,
    };
    info!(correlation_id = %correlation_id, order_id = request.order_id, "Order removal planned");
    json_ok(&OrderDeleteResponse {
        method: target.method().to_string(),
        path: target.path(),
    })
}

/// Handler for POST /courses/search.
async fn course_search_handler(
    State(state): State<AppState>,
    payload: Result<Json<CourseSearchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let matches = filter_courses(&request.courses, &request.filter);
    let page = paginate(
        &matches,
        request.page.unwrap_or(1),
        state.settings().page_size,
    );
    info!(
        correlation_id = %correlation_id,
        matched = page.total_items,
        page = page.page,
        "Course search completed"
    );
    json_ok(&page)
}

/// Handler for POST /tutors/search.
async fn tutor_search_handler(
    payload: Result<Json<TutorSearchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let tutors = filter_tutors(&request.tutors, &request.filter);
    info!(correlation_id = %correlation_id, matched = tutors.len(), "Tutor search completed");
    json_ok(&tutors)
}

fn current_time() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response())
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}
