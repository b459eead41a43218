use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::error::handle_panic;
use super::handlers::{
    AppState, approve_booking, create_booking, get_booking, list_my_bookings,
    list_owned_item_bookings,
};

/// Creates the API router with all booking endpoints
///
/// Every booking endpoint identifies the caller by the `X-Sharer-User-Id` header.
///
/// - POST /bookings - Request a booking
/// - PATCH /bookings/:id?approved= - Approve or reject a booking (item owner only)
/// - GET /bookings/:id - Booking details (booker or item owner)
/// - GET /bookings?state= - Bookings made by the caller
/// - GET /bookings/owner?state= - Bookings on the caller's items
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/bookings", post(create_booking).get(list_my_bookings))
        .route("/bookings/owner", get(list_owned_item_bookings))
        .route("/bookings/:id", get(get_booking).patch(approve_booking))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Uncaught failures become a generic 500
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
