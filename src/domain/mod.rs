//! Domain layer containing the catalog model and its pure logic.
//!
//! # Architecture
//!
//! - [`entities`] - Hotels, description documents and resolution outcomes
//! - [`fields`] - The field catalog and per-request field sets
//! - [`pagination`] - Cursor windowing over the hotel index
//! - [`repositories`] - Traits for the index and the content store
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod fields;
pub mod pagination;
pub mod repositories;
