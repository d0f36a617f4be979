//! API route configuration.

use crate::api::handlers::{
    hotel_handler, hotel_list_handler, room_type_handler, room_type_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only hotel catalog routes.
///
/// # Endpoints
///
/// - `GET /hotels`                                - Paginated hotel listing
/// - `GET /hotels/{address}`                      - Single hotel
/// - `GET /hotels/{address}/roomTypes`            - All room types of a hotel
/// - `GET /hotels/{address}/roomTypes/{room_type_id}` - Single room type
pub fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(hotel_list_handler))
        .route("/hotels/{address}", get(hotel_handler))
        .route("/hotels/{address}/roomTypes", get(room_type_list_handler))
        .route(
            "/hotels/{address}/roomTypes/{room_type_id}",
            get(room_type_handler),
        )
}
