//! Handlers for the hotel listing and single-hotel lookup.

use axum::{Json, extract::State, http::Uri};

use crate::api::dto::hotels::{HotelListQuery, HotelListResponse, HotelQuery};
use crate::api::extract::{ApiPath, ApiQuery};
use crate::domain::entities::ResolvedHotel;
use crate::domain::fields::{DEFAULT_HOTEL_FIELDS, DEFAULT_HOTELS_FIELDS, FieldSet};
use crate::domain::pagination::parse_limit;
use crate::error::AppError;
use crate::state::AppState;

/// Lists hotels page by page.
///
/// # Endpoint
///
/// `GET /hotels`
///
/// # Query Parameters
///
/// - `limit` (optional): Page size, a natural number greater than 0; values
///   beyond `usize::MAX` are clamped
/// - `startWith` (optional): Address of the first hotel of the page
/// - `fields` (optional): Comma-separated field names (default: `id,location,name`)
///
/// # Response
///
/// ```json
/// {
///   "items": [{ "id": "0x...", "name": "...", "location": { ... } }],
///   "errors": [{ "id": "0x...", "error": "Cannot access off-chain data", "originalError": "..." }],
///   "next": "https://api.example.com/hotels?limit=10&fields=id,name,location&startWith=0x..."
/// }
/// ```
///
/// Hotels whose data cannot be resolved are reported in `errors` and the page
/// is backfilled with further hotels, so `items` holds up to `limit` entries.
///
/// # Errors
///
/// - 400 `#badRequest` if the query string cannot be parsed (e.g. a repeated parameter)
/// - 422 `#paginationLimitError` if `limit` is not a natural number
/// - 404 `#paginationStartWithError` if `startWith` is not in the index
/// - 502 `#unreachableIndex` if the index cannot be read
pub async fn hotel_list_handler(
    State(state): State<AppState>,
    uri: Uri,
    ApiQuery(params): ApiQuery<HotelListQuery>,
) -> Result<Json<HotelListResponse>, AppError> {
    let limit = parse_limit(params.limit.as_deref())?;
    let fields = FieldSet::resolve(params.fields.as_deref().unwrap_or(DEFAULT_HOTELS_FIELDS));

    let page = state
        .catalog_service
        .list_hotels(uri.path(), &fields, limit, params.start_with.as_deref())
        .await?;

    Ok(Json(page.into()))
}

/// Retrieves a single hotel.
///
/// # Endpoint
///
/// `GET /hotels/{address}`
///
/// # Query Parameters
///
/// - `fields` (optional): Comma-separated field names
///   (default: `id,location,name,description,contacts,address,currency,images,amenities,updatedAt`)
///
/// # Errors
///
/// - 400 `#badRequest` if the address or the query string cannot be decoded
/// - 404 `#hotelNotFound` if the address is not in the index
/// - 502 `#hotelNotAccessible` if the hotel's description cannot be read
pub async fn hotel_handler(
    State(state): State<AppState>,
    ApiPath(address): ApiPath<String>,
    ApiQuery(params): ApiQuery<HotelQuery>,
) -> Result<Json<ResolvedHotel>, AppError> {
    let fields = FieldSet::resolve(params.fields.as_deref().unwrap_or(DEFAULT_HOTEL_FIELDS));

    let hotel = state.catalog_service.get_hotel(&address, &fields).await?;

    Ok(Json(hotel))
}
