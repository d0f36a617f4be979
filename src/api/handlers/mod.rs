//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod hotels;
pub mod room_types;
pub mod root;

pub use health::health_handler;
pub use hotels::{hotel_handler, hotel_list_handler};
pub use room_types::{room_type_handler, room_type_list_handler};
pub use root::{fallback_handler, root_handler};
