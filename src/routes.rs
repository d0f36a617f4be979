//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`          - Service info (public)
//! - `GET /health`    - Health check: hotel index (public)
//! - `GET /hotels/*`  - Hotel catalog (rate limited)
//! - anything else    - `404 #notFound`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler, root_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Rate limiting settings for the catalog routes.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst_size: u32,
    /// When `true`, the client IP is read from forwarding headers; enable
    /// only when the service runs behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, limits: RateLimit) -> NormalizePath<Router> {
    let catalog = api::routes::hotel_routes();
    let catalog = if limits.behind_proxy {
        catalog.layer(rate_limit::proxied_layer(
            limits.per_second,
            limits.burst_size,
        ))
    } else {
        catalog.layer(rate_limit::layer(
            limits.per_second,
            limits.burst_size,
        ))
    };

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(catalog)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
