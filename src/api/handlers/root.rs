//! Service root and fallback handlers.

use axum::{Json, extract::State};

use crate::api::dto::root::RootResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Describes the service.
///
/// # Endpoint
///
/// `GET /`
///
/// `docs` is only present when `DOCS_URL` is configured.
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        docs: state.docs_url.clone(),
        info: env!("CARGO_PKG_DESCRIPTION").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Answers every unknown route with a `#notFound` error.
pub async fn fallback_handler() -> AppError {
    AppError::route_not_found()
}
