//! Application layer services implementing the catalog logic.
//!
//! Services orchestrate the repository traits of the domain layer and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::hotel_resolver::HotelResolver`] - Resolves one hotel from the index and the content store
//! - [`services::catalog_service::CatalogService`] - Paginated listing with backfill, single lookups, room types

pub mod services;
