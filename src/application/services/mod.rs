//! Business logic services for the application layer.

pub mod catalog_service;
pub mod hotel_resolver;

pub use catalog_service::{CatalogService, HotelPage};
pub use hotel_resolver::HotelResolver;
