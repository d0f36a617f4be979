//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgHotelIndex`] - The ordered hotel index

pub mod pg_hotel_index;

pub use pg_hotel_index::PgHotelIndex;
