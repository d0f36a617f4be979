//! Handlers for hotel room types.

use axum::{Json, extract::State};
use serde_json::{Map, Value};

use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all room types of a hotel keyed by id.
///
/// # Endpoint
///
/// `GET /hotels/{address}/roomTypes`
///
/// # Errors
///
/// - 400 `#badRequest` if a path segment cannot be decoded
/// - 404 `#hotelNotFound` if the address is not in the index
/// - 502 `#hotelNotAccessible` if the hotel's description cannot be read
pub async fn room_type_list_handler(
    State(state): State<AppState>,
    ApiPath(address): ApiPath<String>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let room_types = state.catalog_service.room_types(&address).await?;
    Ok(Json(room_types))
}

/// Retrieves a single room type.
///
/// # Endpoint
///
/// `GET /hotels/{address}/roomTypes/{room_type_id}`
///
/// # Errors
///
/// - 400 `#badRequest` if a path segment cannot be decoded
/// - 404 `#hotelNotFound` if the address is not in the index
/// - 404 `#roomTypeNotFound` if the hotel has no such room type
/// - 502 `#hotelNotAccessible` if the hotel's description cannot be read
pub async fn room_type_handler(
    State(state): State<AppState>,
    ApiPath((address, room_type_id)): ApiPath<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let room_type = state
        .catalog_service
        .room_type(&address, &room_type_id)
        .await?;
    Ok(Json(room_type))
}
