//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures; fetching and resolving them is the job
//! of the repositories and services.
//!
//! # Entity Types
//!
//! - [`Hotel`] - A record from the hotel index
//! - [`DescriptionDocument`] - Content-sourced hotel data behind the content pointer
//! - [`ResolvedHotel`] / [`FailedHotel`] - The two outcomes of resolving a hotel

pub mod description;
pub mod hotel;
pub mod resolution;

pub use description::{DESCRIPTION_URI_KEY, DescriptionDocument, FieldValue};
pub use hotel::Hotel;
pub use resolution::{FailedHotel, FailureKind, FieldMap, ResolvedHotel};
