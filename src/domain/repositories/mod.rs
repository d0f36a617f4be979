//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two backing stores of the catalog. Concrete
//! implementations live in `crate::infrastructure`; mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`HotelIndex`] - The ordered, authoritative hotel index
//! - [`ContentStore`] - Dereferences content pointers into JSON documents

pub mod content_store;
pub mod hotel_index;

pub use content_store::{ContentError, ContentStore};
pub use hotel_index::{HotelIndex, IndexError};

#[cfg(test)]
pub use content_store::MockContentStore;
#[cfg(test)]
pub use hotel_index::MockHotelIndex;
