//! HTTP API module for the Enrollment Pricing Engine.
//!
//! This module exposes the pricing core as a small JSON service: price
//! quotes, order payloads for create and edit, the orders table, and catalog
//! search.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CourseSearchRequest, EditOrderRequest, OrderDeleteRequest, OrderListRequest,
    OrderPayloadRequest, QuoteRequest, TutorSearchRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, EditOrderResponse, OrderDeleteResponse, OrderPayloadResponse,
};
pub use state::AppState;
